//! Input device sources for `droidstick`.
//!
//! Implementations of [`InputDeviceSource`](crate::device::InputDeviceSource).
//!
//! - [`android`]: `android.view.InputDevice` through JNI. Compiles on every
//!   target; it only does something useful inside an Android process.
//! - [`virtual_input`]: in-memory devices for tests, demos and desktop runs.
//!
//! Neither backend creates devices on the OS side; they only enumerate.

pub mod android;
pub mod virtual_input;

pub use android::AndroidInputDevices;
pub use virtual_input::{VirtualDevice, VirtualInputDevices};
