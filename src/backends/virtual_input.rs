//! In-memory input device source.
//!
//! [`VirtualInputDevices`] stands in for the Android `InputDevice` API. It keeps
//! a device table that tests and demos mutate (`connect` / `disconnect`) while
//! a [`JoystickContext`](crate::activity::JoystickContext) polls it, and it can
//! inject the failures the JNI layer produces:
//! - thread attach failure ([`VirtualInputDevices::fail_attach`]),
//! - class resolution failure ([`VirtualInputDevices::fail_class_lookup`]),
//! - unreadable motion ranges ([`VirtualDevice::with_unreadable_motion_ranges`]),
//! - an enumerated ID whose device lookup returns nothing
//!   ([`VirtualInputDevices::connect_ghost`]).
//!
//! Handles are cheap clones sharing one table.

use crate::axis::Axis;
use crate::device::{DeviceId, InputDevice, InputDeviceSession, InputDeviceSource, SourceFlags};
use crate::error::{Error, Result};
use std::sync::{Arc, Mutex, PoisonError};

/// Description of one simulated device.
#[derive(Clone, Debug)]
pub struct VirtualDevice {
    pub id: DeviceId,
    pub name: String,
    pub vendor_id: u32,
    pub product_id: u32,
    pub sources: SourceFlags,
    /// Android axis codes of the motion ranges; `None` makes them unreadable.
    pub motion_ranges: Option<Vec<i32>>,
}

impl VirtualDevice {
    /// A gamepad reporting every supported axis.
    pub fn gamepad(id: DeviceId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            vendor_id: 0,
            product_id: 0,
            sources: SourceFlags::GAMEPAD | SourceFlags::JOYSTICK,
            motion_ranges: Some(Axis::ALL.iter().map(|a| a.to_android()).collect()),
        }
    }

    /// A non-joystick device (keyboard).
    pub fn keyboard(id: DeviceId, name: &str) -> Self {
        Self {
            sources: SourceFlags::KEYBOARD,
            motion_ranges: Some(Vec::new()),
            ..Self::gamepad(id, name)
        }
    }

    pub fn with_ids(mut self, vendor_id: u32, product_id: u32) -> Self {
        self.vendor_id = vendor_id;
        self.product_id = product_id;
        self
    }

    pub fn with_sources(mut self, sources: SourceFlags) -> Self {
        self.sources = sources;
        self
    }

    /// Replace the motion ranges with raw Android axis codes.
    pub fn with_axis_codes(mut self, codes: &[i32]) -> Self {
        self.motion_ranges = Some(codes.to_vec());
        self
    }

    pub fn with_unreadable_motion_ranges(mut self) -> Self {
        self.motion_ranges = None;
        self
    }
}

#[derive(Debug, Default)]
struct Table {
    /// `None` entries are enumerated but cannot be looked up.
    entries: Vec<(DeviceId, Option<VirtualDevice>)>,
    fail_attach: bool,
    fail_class_lookup: bool,
    sessions: usize,
}

/// Shared, mutable virtual device table.
#[derive(Clone, Debug, Default)]
pub struct VirtualInputDevices {
    table: Arc<Mutex<Table>>,
}

impl VirtualInputDevices {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> std::sync::MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Plug `device` in; an existing device with the same ID is replaced.
    pub fn connect(&self, device: VirtualDevice) {
        let mut table = self.table();
        let id = device.id;
        match table.entries.iter_mut().find(|(known, _)| *known == id) {
            Some(entry) => entry.1 = Some(device),
            None => table.entries.push((id, Some(device))),
        }
    }

    /// Enumerate `id` without a device behind it.
    pub fn connect_ghost(&self, id: DeviceId) {
        let mut table = self.table();
        table.entries.retain(|(known, _)| *known != id);
        table.entries.push((id, None));
    }

    /// Unplug `id`; returns whether it was present.
    pub fn disconnect(&self, id: DeviceId) -> bool {
        let mut table = self.table();
        let before = table.entries.len();
        table.entries.retain(|(known, _)| *known != id);
        table.entries.len() != before
    }

    pub fn fail_attach(&self, fail: bool) {
        self.table().fail_attach = fail;
    }

    pub fn fail_class_lookup(&self, fail: bool) {
        self.table().fail_class_lookup = fail;
    }

    /// Number of sessions successfully opened so far.
    pub fn session_count(&self) -> usize {
        self.table().sessions
    }
}

impl InputDeviceSource for VirtualInputDevices {
    fn with_session<R>(&self, f: impl FnOnce(&mut dyn InputDeviceSession) -> R) -> Result<R> {
        let entries = {
            let mut table = self.table();
            if table.fail_attach {
                log::error!("Failed to initialize JNI");
                return Err(Error::Attach(jni::errors::Error::JniCall(
                    jni::errors::JniError::Unknown,
                )));
            }
            if table.fail_class_lookup {
                log::error!("Could not locate Java class android/view/InputDevice");
                return Err(Error::ClassNotFound("android/view/InputDevice"));
            }
            table.sessions += 1;
            table.entries.clone()
        };

        let mut session = VirtualSession { entries };
        Ok(f(&mut session))
    }
}

/// Point-in-time copy of the table, like one JNI enumeration pass.
struct VirtualSession {
    entries: Vec<(DeviceId, Option<VirtualDevice>)>,
}

impl InputDeviceSession for VirtualSession {
    fn device_ids(&mut self) -> Result<Vec<DeviceId>> {
        Ok(self.entries.iter().map(|(id, _)| *id).collect())
    }

    fn device(&mut self, id: DeviceId) -> Result<Option<Box<dyn InputDevice + '_>>> {
        let device = self
            .entries
            .iter()
            .find(|(known, _)| *known == id)
            .and_then(|(_, device)| device.as_ref());

        Ok(device.map(|device| Box::new(VirtualHandle { device }) as Box<dyn InputDevice + '_>))
    }
}

struct VirtualHandle<'a> {
    device: &'a VirtualDevice,
}

impl InputDevice for VirtualHandle<'_> {
    fn name(&mut self) -> Result<String> {
        Ok(self.device.name.clone())
    }

    fn vendor_id(&mut self) -> Result<u32> {
        Ok(self.device.vendor_id)
    }

    fn product_id(&mut self) -> Result<u32> {
        Ok(self.device.product_id)
    }

    fn supports_source(&mut self, sources: SourceFlags) -> Result<bool> {
        Ok(self.device.sources.contains(sources))
    }

    fn motion_range_axes(&mut self) -> Result<Vec<i32>> {
        self.device
            .motion_ranges
            .clone()
            .ok_or(Error::NullResult("InputDevice.getMotionRanges"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_see_a_snapshot_of_the_table() {
        let devices = VirtualInputDevices::new();
        devices.connect(VirtualDevice::gamepad(4, "Pad"));
        devices.connect_ghost(9);

        let ids = devices
            .with_session(|session| session.device_ids().unwrap())
            .unwrap();
        assert_eq!(ids, vec![4, 9]);

        let (pad, ghost) = devices
            .with_session(|session| {
                let pad = session.device(4).unwrap().is_some();
                let ghost = session.device(9).unwrap().is_some();
                (pad, ghost)
            })
            .unwrap();
        assert!(pad);
        assert!(!ghost);
        assert_eq!(devices.session_count(), 2);
    }

    #[test]
    fn reconnect_replaces_in_place() {
        let devices = VirtualInputDevices::new();
        devices.connect(VirtualDevice::gamepad(1, "Old"));
        devices.connect(VirtualDevice::gamepad(2, "Other"));
        devices.connect(VirtualDevice::gamepad(1, "New"));

        let name = devices
            .with_session(|session| session.device(1).unwrap().unwrap().name().unwrap())
            .unwrap();
        assert_eq!(name, "New");
        let ids = devices
            .with_session(|session| session.device_ids().unwrap())
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn injected_failures_skip_the_session() {
        let devices = VirtualInputDevices::new();
        devices.fail_attach(true);
        assert!(matches!(
            devices.with_session(|_| unreachable!()),
            Err(Error::Attach(_))
        ));
        devices.fail_attach(false);
        devices.fail_class_lookup(true);
        assert!(matches!(
            devices.with_session(|_| unreachable!()),
            Err(Error::ClassNotFound(_))
        ));
        assert_eq!(devices.session_count(), 0);
    }
}
