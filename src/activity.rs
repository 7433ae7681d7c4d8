//! Shared joystick context.
//!
//! [`JoystickContext`] is the explicitly passed replacement for a process-wide
//! activity singleton. It owns:
//! - the platform [`InputDeviceSource`](crate::device::InputDeviceSource) (the JVM on Android),
//! - the [`BackendConfig`],
//! - a mutex-guarded [`JoystickStates`] map `DeviceId → DeviceInputState`.
//!
//! Two parties use the map:
//! - joystick slots ([`JoystickImpl`](crate::joystick::JoystickImpl)) insert an
//!   entry when they claim a device, read it every frame, and remove it on close;
//! - the input-event path (motion/key events delivered to the activity) writes
//!   axis and button values through [`JoystickContext::apply_motion`],
//!   [`JoystickContext::set_axis`] and [`JoystickContext::set_button`].
//!
//! Locking is coarse: one mutex for the whole map, held for the full duration
//! of each joystick operation.

use crate::axis::{Axis, AXIS_COUNT};
use crate::config::BackendConfig;
use crate::device::DeviceId;
use crate::error::Result;
use crate::joystick::BUTTON_COUNT;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Android reports axis values in `[-1, 1]`; positions are kept in `[-100, 100]`.
const AXIS_SCALE: f32 = 100.0;

/// Running input state of one claimed device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceInputState {
    /// Axis positions in `[-100, 100]`, indexed by [`Axis::index`].
    pub axes: [f32; AXIS_COUNT],
    /// Pressed flags indexed by button number.
    pub buttons: [bool; BUTTON_COUNT],
}

impl Default for DeviceInputState {
    fn default() -> Self {
        Self {
            axes: [0.0; AXIS_COUNT],
            buttons: [false; BUTTON_COUNT],
        }
    }
}

/// Map of claimed devices to their running state.
#[derive(Debug, Default)]
pub struct JoystickStates {
    devices: HashMap<DeviceId, DeviceInputState>,
}

impl JoystickStates {
    /// Whether some joystick slot already claimed `id`.
    #[inline]
    pub fn contains(&self, id: DeviceId) -> bool {
        self.devices.contains_key(&id)
    }

    pub fn get(&self, id: DeviceId) -> Option<&DeviceInputState> {
        self.devices.get(&id)
    }

    pub fn get_mut(&mut self, id: DeviceId) -> Option<&mut DeviceInputState> {
        self.devices.get_mut(&id)
    }

    /// Claim `id` with a neutral state. An existing entry is reset.
    pub fn insert(&mut self, id: DeviceId) {
        self.devices.insert(id, DeviceInputState::default());
    }

    /// Release `id`; returns whether it was claimed.
    pub fn remove(&mut self, id: DeviceId) -> bool {
        self.devices.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Claimed device IDs, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = DeviceId> + '_ {
        self.devices.keys().copied()
    }

    fn clear(&mut self) {
        self.devices.clear();
    }
}

/// Platform source, configuration and shared state of the joystick backend.
///
/// Share it between joystick slots and the event path with an `Arc`.
pub struct JoystickContext<S> {
    source: S,
    config: BackendConfig,
    states: Mutex<JoystickStates>,
}

impl<S> JoystickContext<S> {
    /// Context with the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: BackendConfig::default(),
            states: Mutex::new(JoystickStates::default()),
        }
    }

    /// Context with a validated custom configuration.
    pub fn with_config(source: S, config: BackendConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            states: Mutex::new(JoystickStates::default()),
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Lock the state map.
    ///
    /// The map holds plain values, so a poisoned lock is recovered rather than
    /// propagated.
    pub fn lock(&self) -> MutexGuard<'_, JoystickStates> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Backend start-up hook. There is no global state to prepare.
    pub fn initialize(&self) {
        log::debug!(
            "joystick backend initialized ({} slots, sources {:?})",
            self.config.joystick_count,
            self.config.source_mask
        );
    }

    /// Backend shutdown hook: releases every claimed device.
    pub fn cleanup(&self) {
        self.lock().clear();
    }

    /// Whether `id` is currently claimed by a joystick slot.
    pub fn is_claimed(&self, id: DeviceId) -> bool {
        self.lock().contains(id)
    }

    /// Store a motion event for `id`.
    ///
    /// `read_axis` is called with the Android code of each [`Axis`] and must
    /// return the raw `[-1, 1]` value (e.g. `AMotionEvent_getAxisValue`).
    /// Returns `false` (and reads nothing) when `id` is not claimed.
    pub fn apply_motion(&self, id: DeviceId, mut read_axis: impl FnMut(i32) -> f32) -> bool {
        let mut states = self.lock();
        let Some(device) = states.get_mut(id) else {
            return false;
        };
        for axis in Axis::ALL {
            device.axes[axis.index()] = clamp_position(read_axis(axis.to_android()) * AXIS_SCALE);
        }
        true
    }

    /// Store one axis position (already in `[-100, 100]`) for `id`.
    pub fn set_axis(&self, id: DeviceId, axis: Axis, position: f32) -> bool {
        match self.lock().get_mut(id) {
            Some(device) => {
                device.axes[axis.index()] = clamp_position(position);
                true
            }
            None => false,
        }
    }

    /// Store a button edge for `id`. Buttons beyond [`BUTTON_COUNT`] are dropped.
    pub fn set_button(&self, id: DeviceId, button: u32, pressed: bool) -> bool {
        let mut states = self.lock();
        let Some(device) = states.get_mut(id) else {
            return false;
        };
        match device.buttons.get_mut(button as usize) {
            Some(slot) => {
                *slot = pressed;
                true
            }
            None => false,
        }
    }
}

#[inline]
fn clamp_position(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-AXIS_SCALE, AXIS_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualInputDevices;

    fn context() -> JoystickContext<VirtualInputDevices> {
        JoystickContext::new(VirtualInputDevices::new())
    }

    #[test]
    fn events_for_unclaimed_devices_are_ignored() {
        let ctx = context();
        assert!(!ctx.set_button(7, 0, true));
        assert!(!ctx.set_axis(7, Axis::X, 50.0));
        assert!(!ctx.apply_motion(7, |_| panic!("must not read axes")));
        assert!(ctx.lock().is_empty());
    }

    #[test]
    fn motion_is_scaled_to_positions() {
        let ctx = context();
        ctx.lock().insert(3);
        assert!(ctx.apply_motion(3, |code| match Axis::from_android(code) {
            Some(Axis::X) => 0.5,
            Some(Axis::PovY) => -1.0,
            Some(Axis::V) => 3.0,
            _ => 0.0,
        }));
        let states = ctx.lock();
        let device = states.get(3).unwrap();
        assert_eq!(device.axes[Axis::X.index()], 50.0);
        assert_eq!(device.axes[Axis::PovY.index()], -100.0);
        assert_eq!(device.axes[Axis::V.index()], 100.0);
        assert_eq!(device.axes[Axis::Y.index()], 0.0);
    }

    #[test]
    fn out_of_range_buttons_are_dropped() {
        let ctx = context();
        ctx.lock().insert(1);
        assert!(ctx.set_button(1, 31, true));
        assert!(!ctx.set_button(1, 32, true));
        assert!(ctx.lock().get(1).unwrap().buttons[31]);
    }

    #[test]
    fn cleanup_releases_every_device() {
        let ctx = context();
        ctx.lock().insert(1);
        ctx.lock().insert(2);
        ctx.cleanup();
        assert!(!ctx.is_claimed(1));
        assert!(!ctx.is_claimed(2));
    }

    #[test]
    fn with_config_validates() {
        let bad = BackendConfig {
            joystick_count: 0,
            ..BackendConfig::default()
        };
        assert!(JoystickContext::with_config(VirtualInputDevices::new(), bad).is_err());
    }
}
