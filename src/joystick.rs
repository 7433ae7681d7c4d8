//! Android joystick slot.
//!
//! A [`JoystickImpl`] is one engine-side joystick slot. It moves through
//! **closed → open → closed**:
//!
//! - [`open`](JoystickImpl::open) walks the platform device list, picks the
//!   `index`-th device exposing the configured source flags that no other slot
//!   claimed yet, records its identification and capabilities, and claims its
//!   [`DeviceId`] in the shared [`JoystickStates`](crate::activity::JoystickStates);
//! - [`update`](JoystickImpl::update) re-checks that the device is still
//!   enumerable and snapshots the running state kept by the event path;
//! - [`close`](JoystickImpl::close) (or dropping the slot) releases the claim.
//!
//! Every failure degrades to "not connected" for the current call; callers
//! re-poll next frame.

use crate::activity::{JoystickContext, JoystickStates};
use crate::axis::{Axis, AXIS_COUNT};
use crate::config::{BackendConfig, CapabilityMode};
use crate::device::{DeviceId, InputDevice, InputDeviceSession, InputDeviceSource};
use crate::error::Result;
use crate::metadata::Identification;
use crate::snapshot::JoystickState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default number of joystick slots.
pub const JOYSTICK_COUNT: u32 = 8;

/// Buttons per joystick. Android exposes no per-device button count.
pub const BUTTON_COUNT: usize = 32;

/// What a joystick can report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoystickCaps {
    pub button_count: u32,
    /// Presence flags indexed by [`Axis::index`].
    pub axes: [bool; AXIS_COUNT],
}

impl JoystickCaps {
    /// Every axis present, [`BUTTON_COUNT`] buttons.
    pub fn all() -> Self {
        Self {
            button_count: BUTTON_COUNT as u32,
            axes: [true; AXIS_COUNT],
        }
    }

    /// Capabilities from motion-range axis codes; unknown codes are ignored.
    pub fn from_axis_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        let mut caps = Self {
            button_count: BUTTON_COUNT as u32,
            axes: [false; AXIS_COUNT],
        };
        for axis in codes.into_iter().filter_map(Axis::from_android) {
            caps.axes[axis.index()] = true;
        }
        caps
    }

    #[inline]
    pub fn has_axis(&self, axis: Axis) -> bool {
        self.axes[axis.index()]
    }
}

/// The device a successful `open` settled on.
struct Claim {
    id: DeviceId,
    capabilities: JoystickCaps,
    identification: Identification,
}

/// One joystick slot backed by an [`InputDeviceSource`].
pub struct JoystickImpl<S> {
    context: Arc<JoystickContext<S>>,
    device: Option<DeviceId>,
    capabilities: JoystickCaps,
    identification: Identification,
}

impl<S: InputDeviceSource> JoystickImpl<S> {
    /// A closed slot.
    pub fn new(context: Arc<JoystickContext<S>>) -> Self {
        Self {
            context,
            device: None,
            capabilities: JoystickCaps::default(),
            identification: Identification::default(),
        }
    }

    /// Cheap prefilter run before [`open`](Self::open).
    ///
    /// Only checks the slot range: deciding whether a device exists would
    /// duplicate the enumeration `open` performs.
    pub fn is_connected(context: &JoystickContext<S>, index: u32) -> bool {
        index < context.config().joystick_count
    }

    pub fn is_open(&self) -> bool {
        self.device.is_some()
    }

    /// Android ID of the claimed device, if open.
    pub fn device_id(&self) -> Option<DeviceId> {
        self.device
    }

    pub fn context(&self) -> &Arc<JoystickContext<S>> {
        &self.context
    }

    /// Claim the `index`-th joystick. Returns `false` and stays closed on any failure.
    ///
    /// Opening an already open slot releases its previous device first.
    pub fn open(&mut self, index: u32) -> bool {
        if index >= self.context.config().joystick_count {
            return false;
        }
        self.close();

        let context = Arc::clone(&self.context);
        let mut states = context.lock();
        let config = context.config();

        let claim = context
            .source()
            .with_session(|session| find_claimable(session, &states, index, config))
            .and_then(|found| found);

        let Ok(Some(claim)) = claim else {
            return false;
        };

        #[cfg(feature = "debug-log")]
        log::debug!(
            "[JOYSTICK/OPEN] slot={index} device={} ident={} caps={:?}",
            claim.id,
            claim.identification,
            claim.capabilities
        );

        states.insert(claim.id);
        self.device = Some(claim.id);
        self.capabilities = claim.capabilities;
        self.identification = claim.identification;
        true
    }

    /// Release the claimed device. No-op when closed.
    pub fn close(&mut self) {
        if let Some(id) = self.device.take() {
            self.context.lock().remove(id);
            self.capabilities = JoystickCaps::default();
            self.identification = Identification::default();
        }
    }

    pub fn capabilities(&self) -> JoystickCaps {
        self.capabilities
    }

    pub fn identification(&self) -> &Identification {
        &self.identification
    }

    /// Current state of the claimed device.
    ///
    /// A closed slot, a failed platform query, or a device whose state entry is
    /// momentarily missing all report [`JoystickState::disconnected`].
    pub fn update(&self) -> JoystickState {
        let Some(id) = self.device else {
            return JoystickState::disconnected();
        };

        let states = self.context.lock();

        let present = self
            .context
            .source()
            .with_session(|session| session.device(id).map(|device| device.is_some()))
            .and_then(|present| present);

        let Ok(connected) = present else {
            return JoystickState::disconnected();
        };

        // Reconnecting another gamepad can make Android drop and re-add this
        // device's entry for one frame.
        match states.get(id) {
            Some(device) => JoystickState::from_device(connected, device),
            None => JoystickState::disconnected(),
        }
    }
}

impl<S> Drop for JoystickImpl<S> {
    fn drop(&mut self) {
        if let Some(id) = self.device.take() {
            self.context.lock().remove(id);
        }
    }
}

/// Walk the device list and pick the device slot `index` should claim.
///
/// Gamepads before the `index`-th are counted whether claimed or not; from
/// there on the first unclaimed one wins.
fn find_claimable(
    session: &mut dyn InputDeviceSession,
    states: &JoystickStates,
    index: u32,
    config: &BackendConfig,
) -> Result<Option<Claim>> {
    let mut gamepads_so_far = 0;

    for id in session.device_ids()? {
        let Some(mut device) = session.device(id)? else {
            continue;
        };

        if !device.supports_source(config.source_mask)? {
            continue;
        }

        if gamepads_so_far < index {
            gamepads_so_far += 1;
            continue;
        }

        if states.contains(id) {
            continue;
        }

        let Some(capabilities) = read_capabilities(device.as_mut(), config.capabilities) else {
            return Ok(None);
        };

        let identification = Identification {
            name: device.name()?,
            vendor_id: device.vendor_id()?,
            product_id: device.product_id()?,
        };

        return Ok(Some(Claim {
            id,
            capabilities,
            identification,
        }));
    }

    Ok(None)
}

fn read_capabilities<D>(device: &mut D, mode: CapabilityMode) -> Option<JoystickCaps>
where
    D: InputDevice + ?Sized,
{
    match mode {
        CapabilityMode::AssumeAll => Some(JoystickCaps::all()),
        CapabilityMode::Query => match device.motion_range_axes() {
            Ok(codes) => Some(JoystickCaps::from_axis_codes(codes)),
            Err(_) => {
                log::error!("Gamepad was found, but its capabilities couldn't be read, skipping");
                None
            }
        },
    }
}
