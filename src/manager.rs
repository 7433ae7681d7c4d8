//! Joystick manager.
//!
//! [`JoystickManager`] owns one [`JoystickImpl`] per slot and the last
//! snapshot of each. Call [`update`](JoystickManager::update) once per frame:
//! - open slots are polled; a slot reporting disconnection is closed;
//! - closed slots that pass the prefilter try to open.
//!
//! The per-slot queries (`is_connected`, `axis_position`, ...) read the cached
//! snapshot and never touch the platform.

use crate::activity::JoystickContext;
use crate::axis::Axis;
use crate::device::InputDeviceSource;
use crate::joystick::{JoystickCaps, JoystickImpl};
use crate::metadata::Identification;
use crate::snapshot::JoystickState;
use std::sync::Arc;

struct Slot<S> {
    joystick: JoystickImpl<S>,
    state: JoystickState,
    capabilities: JoystickCaps,
    identification: Identification,
}

/// Fixed set of joystick slots over one [`JoystickContext`].
pub struct JoystickManager<S> {
    context: Arc<JoystickContext<S>>,
    slots: Vec<Slot<S>>,
}

impl<S: InputDeviceSource> JoystickManager<S> {
    /// One closed slot per configured joystick; runs the backend's `initialize`.
    pub fn new(context: Arc<JoystickContext<S>>) -> Self {
        context.initialize();
        let slots = (0..context.config().joystick_count)
            .map(|_| Slot {
                joystick: JoystickImpl::new(Arc::clone(&context)),
                state: JoystickState::disconnected(),
                capabilities: JoystickCaps::default(),
                identification: Identification::default(),
            })
            .collect();

        Self { context, slots }
    }

    pub fn context(&self) -> &Arc<JoystickContext<S>> {
        &self.context
    }

    pub fn slot_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Poll every slot once.
    pub fn update(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let index = index as u32;

            if slot.state.connected {
                slot.state = slot.joystick.update();

                if !slot.state.connected {
                    #[cfg(feature = "debug-log")]
                    log::debug!("joystick {index} disconnected ({})", slot.identification);
                    slot.joystick.close();
                    slot.capabilities = JoystickCaps::default();
                    slot.identification = Identification::default();
                }
            } else if JoystickImpl::is_connected(&self.context, index) && slot.joystick.open(index) {
                slot.capabilities = slot.joystick.capabilities();
                slot.identification = slot.joystick.identification().clone();
                slot.state = slot.joystick.update();
                #[cfg(feature = "debug-log")]
                log::debug!("joystick {index} connected ({})", slot.identification);
            }
        }
    }

    fn slot(&self, index: u32) -> Option<&Slot<S>> {
        self.slots.get(index as usize)
    }

    pub fn is_connected(&self, index: u32) -> bool {
        self.slot(index).is_some_and(|slot| slot.state.connected)
    }

    /// Buttons of a connected joystick, `0` otherwise.
    pub fn button_count(&self, index: u32) -> u32 {
        self.slot(index)
            .filter(|slot| slot.state.connected)
            .map_or(0, |slot| slot.capabilities.button_count)
    }

    pub fn has_axis(&self, index: u32, axis: Axis) -> bool {
        self.slot(index)
            .is_some_and(|slot| slot.state.connected && slot.capabilities.has_axis(axis))
    }

    pub fn is_button_pressed(&self, index: u32, button: u32) -> bool {
        self.slot(index)
            .is_some_and(|slot| slot.state.connected && slot.state.button(button))
    }

    /// Axis position in `[-100, 100]`; `0.0` for disconnected joysticks.
    pub fn axis_position(&self, index: u32, axis: Axis) -> f32 {
        self.slot(index)
            .filter(|slot| slot.state.connected)
            .map_or(0.0, |slot| slot.state.axis(axis))
    }

    /// Identification of a joystick; anonymous when the slot is empty.
    pub fn identification(&self, index: u32) -> Identification {
        self.slot(index)
            .map(|slot| slot.identification.clone())
            .unwrap_or_default()
    }

    /// Last snapshot of a slot.
    pub fn state(&self, index: u32) -> JoystickState {
        self.slot(index)
            .map_or_else(JoystickState::disconnected, |slot| slot.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::{VirtualDevice, VirtualInputDevices};

    fn manager() -> (VirtualInputDevices, JoystickManager<VirtualInputDevices>) {
        let devices = VirtualInputDevices::new();
        let context = Arc::new(JoystickContext::new(devices.clone()));
        (devices, JoystickManager::new(context))
    }

    #[test]
    fn slots_follow_config() {
        let (_, manager) = manager();
        assert_eq!(manager.slot_count(), crate::joystick::JOYSTICK_COUNT);
        assert!(!manager.is_connected(0));
        assert!(!manager.is_connected(99));
        assert_eq!(manager.state(99), JoystickState::disconnected());
    }

    #[test]
    fn queries_on_empty_slots_are_neutral() {
        let (_, manager) = manager();
        assert_eq!(manager.button_count(0), 0);
        assert!(!manager.has_axis(0, Axis::X));
        assert!(!manager.is_button_pressed(0, 0));
        assert_eq!(manager.axis_position(0, Axis::X), 0.0);
        assert_eq!(manager.identification(0), Identification::default());
    }

    #[test]
    fn unplugged_device_frees_its_slot() {
        let (devices, mut manager) = manager();
        devices.connect(VirtualDevice::gamepad(3, "Pad"));

        manager.update();
        assert!(manager.is_connected(0));
        assert_eq!(manager.button_count(0), 32);
        assert_eq!(manager.identification(0).name, "Pad");

        devices.disconnect(3);
        manager.update();
        assert!(!manager.is_connected(0));
        assert!(!manager.context().is_claimed(3));
        assert_eq!(manager.identification(0), Identification::default());
    }
}
