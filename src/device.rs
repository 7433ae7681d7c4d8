//! Platform seam between the joystick backend and `InputDevice` enumeration.
//!
//! The backend never talks to JNI directly. It asks an [`InputDeviceSource`]
//! for a session (on Android: attach the thread, open a local frame, resolve
//! `android/view/InputDevice`), and inside that session enumerates device IDs
//! and inspects [`InputDevice`] handles.
//!
//! Handles borrow the session. Nothing obtained from a session outlives it,
//! only owned values (`String`, `Vec<i32>`, ...) escape.
//!
//! ## Errors vs. absence
//! - `Err(_)`: a lookup or call failed. The implementation logs it where it is
//!   detected.
//! - `Ok(None)` from [`InputDeviceSession::device`]: the ID no longer maps
//!   to a device. This is normal (unplug between enumeration and query) and
//!   must not be logged.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Platform-assigned input device ID.
pub type DeviceId = i32;

/// `AINPUT_SOURCE_*` bitmask.
///
/// [`InputDevice::supports_source`] follows `InputDevice.supportsSource`:
/// a device matches only when it reports *all* requested bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceFlags(pub u32);

impl SourceFlags {
    /// `AINPUT_SOURCE_GAMEPAD`.
    pub const GAMEPAD: SourceFlags = SourceFlags(0x0000_0401);
    /// `AINPUT_SOURCE_JOYSTICK`.
    pub const JOYSTICK: SourceFlags = SourceFlags(0x0100_0010);
    /// `AINPUT_SOURCE_KEYBOARD`.
    pub const KEYBOARD: SourceFlags = SourceFlags(0x0000_0101);
    /// `AINPUT_SOURCE_TOUCHSCREEN`.
    pub const TOUCHSCREEN: SourceFlags = SourceFlags(0x0000_1002);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: SourceFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SourceFlags {
    type Output = SourceFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        SourceFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for SourceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceFlags({:#010x})", self.0)
    }
}

/// Provider of enumeration sessions.
pub trait InputDeviceSource: Send + Sync {
    /// Open a session and run `f` inside it.
    ///
    /// Returns `Err` when the session itself cannot be established (thread
    /// attach or class resolution failed); `f` is not called in that case.
    fn with_session<R>(&self, f: impl FnOnce(&mut dyn InputDeviceSession) -> R) -> Result<R>;
}

/// One enumeration pass over the platform's input devices.
pub trait InputDeviceSession {
    /// IDs of all currently known input devices, in platform order.
    fn device_ids(&mut self) -> Result<Vec<DeviceId>>;

    /// Handle for `id`, or `Ok(None)` if the device disappeared.
    fn device(&mut self, id: DeviceId) -> Result<Option<Box<dyn InputDevice + '_>>>;
}

/// Query surface of one `InputDevice`.
///
/// Each method is one platform call; nothing is cached.
pub trait InputDevice {
    fn name(&mut self) -> Result<String>;
    fn vendor_id(&mut self) -> Result<u32>;
    fn product_id(&mut self) -> Result<u32>;
    fn supports_source(&mut self, sources: SourceFlags) -> Result<bool>;

    /// Android axis codes of every motion range the device reports.
    fn motion_range_axes(&mut self) -> Result<Vec<i32>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_requires_all_bits() {
        let pad = SourceFlags::GAMEPAD | SourceFlags::JOYSTICK;
        assert!(pad.contains(SourceFlags::GAMEPAD));
        assert!(pad.contains(pad));
        assert!(!SourceFlags::GAMEPAD.contains(pad));
        // GAMEPAD shares the button class bit with KEYBOARD, but not the full value.
        assert!(!SourceFlags::KEYBOARD.contains(SourceFlags::GAMEPAD));
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(
            format!("{:?}", SourceFlags::JOYSTICK),
            "SourceFlags(0x01000010)"
        );
    }
}
