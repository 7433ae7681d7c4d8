//! Android backend: `android.view.InputDevice` over JNI.
//!
//! Layering:
//! - [`attach`]: per-call thread attachment ([`Jni`]).
//! - [`array`], [`list`]: marshalling for `int[]` and `java.util.List`.
//! - [`input_device`], [`motion_range`]: the two `android.view` classes the
//!   joystick backend reads.
//! - [`AndroidInputDevices`]: the [`InputDeviceSource`] built on top of them.
//!
//! Every session runs inside one JNI local frame. Local references created
//! while enumerating devices are released when the session ends, so a thread
//! that stays attached for the life of the process does not accumulate them.
//! Nothing handed back from a session borrows the JVM.

pub mod array;
pub mod attach;
pub mod input_device;
pub mod list;
pub mod motion_range;

mod lookup;

pub use array::JniArray;
pub use attach::Jni;
pub use input_device::{JniInputDevice, JniInputDeviceClass};
pub use list::{JniList, JniListClass, JniListElement};
pub use motion_range::{JniMotionRange, JniMotionRangeClass};

use crate::device::{DeviceId, InputDevice, InputDeviceSession, InputDeviceSource, SourceFlags};
use crate::error::{Error, Result};
use jni::{JNIEnv, JavaVM};

/// Local reference slots reserved per session.
///
/// The frame grows on demand; this only sizes the first allocation.
const LOCAL_FRAME_CAPACITY: i32 = 32;

/// Input devices of the running Android process.
pub struct AndroidInputDevices {
    vm: JavaVM,
}

impl AndroidInputDevices {
    pub fn new(vm: JavaVM) -> Self {
        Self { vm }
    }

    /// Wrap a raw `JavaVM*`, e.g. the one passed to `JNI_OnLoad`.
    ///
    /// # Safety
    /// `vm` must be a valid `JavaVM` pointer that outlives the returned value.
    pub unsafe fn from_raw(vm: *mut jni::sys::JavaVM) -> Result<Self> {
        let vm = JavaVM::from_raw(vm)?;
        Ok(Self::new(vm))
    }

    /// Use the VM registered by the activity glue (`android-activity`,
    /// `ndk-glue`).
    #[cfg(target_os = "android")]
    #[cfg_attr(docsrs, doc(cfg(target_os = "android")))]
    pub fn from_android_context() -> Result<Self> {
        let vm = ndk_context::android_context().vm();
        if vm.is_null() {
            return Err(Error::NullResult("ndk_context::android_context().vm()"));
        }
        // SAFETY: the activity glue keeps the VM alive for the process.
        unsafe { Self::from_raw(vm.cast()) }
    }

    pub fn vm(&self) -> &JavaVM {
        &self.vm
    }
}

impl InputDeviceSource for AndroidInputDevices {
    fn with_session<R>(&self, f: impl FnOnce(&mut dyn InputDeviceSession) -> R) -> Result<R> {
        let mut jni = Jni::attach_current_thread(&self.vm)?;

        jni.env()
            .with_local_frame(LOCAL_FRAME_CAPACITY, |env| -> Result<R> {
                let class = JniInputDeviceClass::find_class(env)?;
                let mut session = JniSession { env, class };
                Ok(f(&mut session))
            })
    }
}

/// One attached, frame-scoped enumeration pass.
struct JniSession<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    class: JniInputDeviceClass<'local>,
}

impl InputDeviceSession for JniSession<'_, '_> {
    fn device_ids(&mut self) -> Result<Vec<DeviceId>> {
        Ok(self.class.device_ids(self.env)?.into_vec())
    }

    fn device(&mut self, id: DeviceId) -> Result<Option<Box<dyn InputDevice + '_>>> {
        let Some(device) = self.class.device(self.env, id)? else {
            return Ok(None);
        };
        Ok(Some(Box::new(JniDeviceHandle {
            env: &mut *self.env,
            device,
        })))
    }
}

struct JniDeviceHandle<'s, 'local> {
    env: &'s mut JNIEnv<'local>,
    device: JniInputDevice<'s, 'local>,
}

impl InputDevice for JniDeviceHandle<'_, '_> {
    fn name(&mut self) -> Result<String> {
        self.device.name(self.env)
    }

    fn vendor_id(&mut self) -> Result<u32> {
        self.device.vendor_id(self.env)
    }

    fn product_id(&mut self) -> Result<u32> {
        self.device.product_id(self.env)
    }

    fn supports_source(&mut self, sources: SourceFlags) -> Result<bool> {
        self.device.supports_source(self.env, sources)
    }

    fn motion_range_axes(&mut self) -> Result<Vec<i32>> {
        let ranges = self.device.motion_ranges(self.env)?;
        let count = ranges.size(self.env)?;

        let mut axes = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
        for idx in 0..count {
            let range = ranges
                .get(self.env, idx)?
                .ok_or(Error::NullResult("List.get"))?;
            axes.push(range.axis(self.env)?);
        }
        Ok(axes)
    }
}
