//! Device identification.
//!
//! [`Identification`] is captured once, when a joystick slot claims a device,
//! from `InputDevice.getName()`, `getVendorId()` and `getProductId()`. It is a
//! plain cloneable record suitable for UI display, logging and persistence.
//!
//! ## Persistence notes
//! - `vendor_id`/`product_id` are the USB/Bluetooth IDs reported by Android and
//!   are `0` for devices (virtual, some built-in controllers) that report none.
//! - The Android device ID is *not* part of the identification: it is only
//!   stable for the lifetime of one physical connection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name and USB IDs of a joystick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// User-facing device name.
    pub name: String,

    /// Vendor ID, `0` if unknown.
    pub vendor_id: u32,

    /// Product ID, `0` if unknown.
    pub product_id: u32,
}

impl fmt::Display for Identification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:04x}:{:04x})",
            self.name, self.vendor_id, self.product_id
        )
    }
}
