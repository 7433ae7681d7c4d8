//! Android gamepad enumeration and polling.
//!
//! [`JoystickImpl`] claims one gamepad per slot from the devices reported by
//! `android.view.InputDevice`, reads its name, vendor and product IDs, and
//! reports which of the eight supported axes it has. Axis and button values
//! are fed in by the host's input event handler through
//! [`JoystickContext::apply_motion`] and friends, and read back with
//! [`JoystickImpl::update`].
//!
//! [`JoystickManager`] drives every slot once per frame.

pub mod activity;
pub mod axis;
pub mod backends;
pub mod config;
pub mod device;
pub mod error;
pub mod joystick;
pub mod logger;
pub mod manager;
pub mod metadata;
pub mod snapshot;

pub use activity::{DeviceInputState, JoystickContext, JoystickStates};
pub use axis::{Axis, AXIS_COUNT};
pub use config::{BackendConfig, CapabilityMode};
pub use device::{DeviceId, InputDevice, InputDeviceSession, InputDeviceSource, SourceFlags};
pub use error::{Error, Result};
pub use joystick::{JoystickCaps, JoystickImpl, BUTTON_COUNT, JOYSTICK_COUNT};
pub use manager::JoystickManager;
pub use metadata::Identification;
pub use snapshot::JoystickState;
