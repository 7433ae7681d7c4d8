//! Per-frame joystick snapshot.
//!
//! [`JoystickState`] is an **owned**, read-only view of one joystick at a point
//! in time (typically “this frame”). It is produced by
//! [`JoystickImpl::update`](crate::joystick::JoystickImpl::update) by combining
//! the platform liveness check with the running state that the input-event path
//! keeps in [`JoystickStates`](crate::activity::JoystickStates).
//!
//! # Semantics
//! - A closed slot or a failed platform query yields
//!   [`JoystickState::disconnected`]: neutral axes, released buttons.
//! - A claimed device that stopped enumerating reports `connected == false`
//!   but keeps the last axes and buttons the event path stored.
//! - Axis positions are in `[-100, 100]`.
//! - A snapshot is immutable; call `update()` again for the next frame.

use crate::activity::DeviceInputState;
use crate::axis::{Axis, AXIS_COUNT};
use crate::joystick::BUTTON_COUNT;
use serde::{Deserialize, Serialize};

/// Snapshot of a joystick's connection, axis and button state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoystickState {
    /// Whether the device was still enumerable when the snapshot was taken.
    pub connected: bool,
    /// Axis positions indexed by [`Axis::index`].
    pub axes: [f32; AXIS_COUNT],
    /// Button states indexed by button number.
    pub buttons: [bool; BUTTON_COUNT],
}

impl Default for JoystickState {
    fn default() -> Self {
        Self::disconnected()
    }
}

impl JoystickState {
    /// Snapshot reported when the device is gone or could not be queried.
    pub const fn disconnected() -> Self {
        Self {
            connected: false,
            axes: [0.0; AXIS_COUNT],
            buttons: [false; BUTTON_COUNT],
        }
    }

    /// Combine a liveness flag with the stored running state.
    pub fn from_device(connected: bool, device: &DeviceInputState) -> Self {
        Self {
            connected,
            axes: device.axes,
            buttons: device.buttons,
        }
    }

    /// Position of `axis`.
    #[inline]
    pub fn axis(&self, axis: Axis) -> f32 {
        self.axes[axis.index()]
    }

    /// Whether `button` is pressed; out-of-range buttons read as released.
    #[inline]
    pub fn button(&self, button: u32) -> bool {
        self.buttons
            .get(button as usize)
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_is_neutral() {
        let s = JoystickState::disconnected();
        assert!(!s.connected);
        assert!(s.axes.iter().all(|v| *v == 0.0));
        assert!(s.buttons.iter().all(|b| !b));
    }

    #[test]
    fn out_of_range_button_reads_released() {
        let mut device = DeviceInputState::default();
        device.buttons[3] = true;
        let s = JoystickState::from_device(true, &device);
        assert!(s.button(3));
        assert!(!s.button(BUTTON_COUNT as u32));
        assert!(!s.button(u32::MAX));
    }
}
