//! Joystick axes and their Android motion-event codes.
//!
//! The engine side works with a closed set of eight axes ([`Axis`]). Android
//! reports axes as `AMOTION_EVENT_AXIS_*` integer codes, both in
//! `InputDevice.MotionRange.getAxis()` (capabilities) and in motion events
//! (running state). This module is the only place the two meet.
//!
//! | Axis     | Android code            |
//! |----------|-------------------------|
//! | `X`      | `AXIS_X` (0)            |
//! | `Y`      | `AXIS_Y` (1)            |
//! | `Z`      | `AXIS_Z` (11)           |
//! | `R`      | `AXIS_RZ` (14)          |
//! | `U`      | `AXIS_LTRIGGER` (17)    |
//! | `V`      | `AXIS_RTRIGGER` (18)    |
//! | `PovX`   | `AXIS_HAT_X` (15)       |
//! | `PovY`   | `AXIS_HAT_Y` (16)       |

use serde::{Deserialize, Serialize};

/// Number of supported axes.
pub const AXIS_COUNT: usize = 8;

/// Android `AMOTION_EVENT_AXIS_*` codes used by the mapping.
pub mod codes {
    pub const AXIS_X: i32 = 0;
    pub const AXIS_Y: i32 = 1;
    pub const AXIS_Z: i32 = 11;
    pub const AXIS_RZ: i32 = 14;
    pub const AXIS_HAT_X: i32 = 15;
    pub const AXIS_HAT_Y: i32 = 16;
    pub const AXIS_LTRIGGER: i32 = 17;
    pub const AXIS_RTRIGGER: i32 = 18;
}

/// Joystick axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
    R,
    U,
    V,
    PovX,
    PovY,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::R,
        Axis::U,
        Axis::V,
        Axis::PovX,
        Axis::PovY,
    ];

    /// Position of this axis in per-axis arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map an Android axis code; codes outside the supported set yield `None`.
    pub fn from_android(code: i32) -> Option<Axis> {
        use codes::*;

        match code {
            AXIS_X => Some(Axis::X),
            AXIS_Y => Some(Axis::Y),
            AXIS_Z => Some(Axis::Z),
            AXIS_RZ => Some(Axis::R),
            AXIS_LTRIGGER => Some(Axis::U),
            AXIS_RTRIGGER => Some(Axis::V),
            AXIS_HAT_X => Some(Axis::PovX),
            AXIS_HAT_Y => Some(Axis::PovY),
            _ => None,
        }
    }

    /// Android axis code reported for this axis.
    pub fn to_android(self) -> i32 {
        use codes::*;

        match self {
            Axis::X => AXIS_X,
            Axis::Y => AXIS_Y,
            Axis::Z => AXIS_Z,
            Axis::R => AXIS_RZ,
            Axis::U => AXIS_LTRIGGER,
            Axis::V => AXIS_RTRIGGER,
            Axis::PovX => AXIS_HAT_X,
            Axis::PovY => AXIS_HAT_Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_a_bijection_on_supported_axes() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_android(axis.to_android()), Some(axis));
        }
    }

    #[test]
    fn unsupported_codes_are_ignored() {
        // AXIS_RX, AXIS_RY, AXIS_GAS, AXIS_BRAKE
        for code in [12, 13, 22, 23, -1] {
            assert_eq!(Axis::from_android(code), None);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }
}
