//! `android.view.InputDevice` access.

use super::array::JniArray;
use super::list::{JniList, JniListClass};
use super::lookup::{checked, find_class, method_id, static_method_id};
use super::motion_range::JniMotionRange;
use crate::device::SourceFlags;
use crate::error::{Error, Result};
use jni::objects::{JClass, JIntArray, JMethodID, JObject, JStaticMethodID, JString};
use jni::signature::{Primitive, ReturnType};
use jni::sys::{jint, jvalue};
use jni::JNIEnv;

/// Resolved `InputDevice` class with every method the backend calls.
pub struct JniInputDeviceClass<'local> {
    class: JClass<'local>,
    get_device_ids: JStaticMethodID,
    get_device: JStaticMethodID,
    get_name: JMethodID,
    get_vendor_id: JMethodID,
    get_product_id: JMethodID,
    supports_source: JMethodID,
    get_motion_ranges: JMethodID,
}

impl<'local> JniInputDeviceClass<'local> {
    pub const NAME: &'static str = "android/view/InputDevice";

    /// Resolve the class and its methods.
    ///
    /// A missing method is logged once, as "Could not locate required
    /// InputDevice methods".
    pub fn find_class(env: &mut JNIEnv<'local>) -> Result<Self> {
        let class = find_class(env, Self::NAME)?;
        Self::resolve(env, class).map_err(|err| {
            log::error!("Could not locate required InputDevice methods");
            err
        })
    }

    fn resolve(env: &mut JNIEnv<'local>, class: JClass<'local>) -> Result<Self> {
        let n = Self::NAME;

        Ok(Self {
            get_device_ids: static_method_id(env, &class, n, "getDeviceIds", "()[I")?,
            get_device: static_method_id(
                env,
                &class,
                n,
                "getDevice",
                "(I)Landroid/view/InputDevice;",
            )?,
            get_name: method_id(env, &class, n, "getName", "()Ljava/lang/String;")?,
            get_vendor_id: method_id(env, &class, n, "getVendorId", "()I")?,
            get_product_id: method_id(env, &class, n, "getProductId", "()I")?,
            supports_source: method_id(env, &class, n, "supportsSource", "(I)Z")?,
            get_motion_ranges: method_id(
                env,
                &class,
                n,
                "getMotionRanges",
                "()Ljava/util/List;",
            )?,
            class,
        })
    }

    /// `InputDevice.getDeviceIds()`.
    pub fn device_ids(&self, env: &mut JNIEnv<'local>) -> Result<JniArray<jint>> {
        // SAFETY: static method resolved on this class with signature `()[I`.
        let ids = unsafe {
            env.call_static_method_unchecked(&self.class, self.get_device_ids, ReturnType::Array, &[])
        };
        let ids = checked(env, ids.and_then(|v| v.l()))?;
        if ids.is_null() {
            log::error!("No input devices found.");
            return Err(Error::NullResult("InputDevice.getDeviceIds"));
        }
        JniArray::from_int_array(env, &JIntArray::from(ids))
    }

    /// `InputDevice.getDevice(id)`; `Ok(None)` if the device is gone.
    pub fn device<'c>(
        &'c self,
        env: &mut JNIEnv<'local>,
        id: jint,
    ) -> Result<Option<JniInputDevice<'c, 'local>>> {
        // SAFETY: static method resolved on this class with signature
        // `(I)Landroid/view/InputDevice;`, called with one int.
        let device = unsafe {
            env.call_static_method_unchecked(
                &self.class,
                self.get_device,
                ReturnType::Object,
                &[jvalue { i: id }],
            )
        };
        let object = checked(env, device.and_then(|v| v.l()))?;
        if object.is_null() {
            return Ok(None);
        }
        Ok(Some(JniInputDevice {
            class: self,
            object,
        }))
    }
}

/// One `InputDevice` instance.
///
/// Borrows the method IDs of the class it was obtained from.
pub struct JniInputDevice<'c, 'local> {
    class: &'c JniInputDeviceClass<'local>,
    object: JObject<'local>,
}

impl<'c, 'local> JniInputDevice<'c, 'local> {
    /// `InputDevice.getName()`, copied into a Rust string.
    pub fn name(&self, env: &mut JNIEnv<'local>) -> Result<String> {
        // SAFETY: resolved with signature `()Ljava/lang/String;`.
        let name = unsafe {
            env.call_method_unchecked(&self.object, self.class.get_name, ReturnType::Object, &[])
        };
        let name = checked(env, name.and_then(|v| v.l()))?;
        if name.is_null() {
            return Err(Error::NullResult("InputDevice.getName"));
        }
        java_string(env, &JString::from(name))
    }

    /// `InputDevice.getVendorId()`.
    pub fn vendor_id(&self, env: &mut JNIEnv<'local>) -> Result<u32> {
        self.int_method(env, self.class.get_vendor_id).map(|v| v as u32)
    }

    /// `InputDevice.getProductId()`.
    pub fn product_id(&self, env: &mut JNIEnv<'local>) -> Result<u32> {
        self.int_method(env, self.class.get_product_id).map(|v| v as u32)
    }

    /// `InputDevice.supportsSource(sources)`.
    pub fn supports_source(&self, env: &mut JNIEnv<'local>, sources: SourceFlags) -> Result<bool> {
        // SAFETY: resolved with signature `(I)Z`, called with one int.
        let supported = unsafe {
            env.call_method_unchecked(
                &self.object,
                self.class.supports_source,
                ReturnType::Primitive(Primitive::Boolean),
                &[jvalue {
                    i: sources.bits() as jint,
                }],
            )
        };
        checked(env, supported.and_then(|v| v.z()))
    }

    /// `InputDevice.getMotionRanges()`.
    pub fn motion_ranges(
        &self,
        env: &mut JNIEnv<'local>,
    ) -> Result<JniList<'local, JniMotionRange<'local>>> {
        let list_class = JniListClass::find_class(env)?;

        // SAFETY: resolved with signature `()Ljava/util/List;`.
        let list = unsafe {
            env.call_method_unchecked(
                &self.object,
                self.class.get_motion_ranges,
                ReturnType::Object,
                &[],
            )
        };
        let list = checked(env, list.and_then(|v| v.l()))?;
        if list.is_null() {
            return Err(Error::NullResult("InputDevice.getMotionRanges"));
        }
        list_class.make_from_java(env, list)
    }

    fn int_method(&self, env: &mut JNIEnv<'local>, method: JMethodID) -> Result<jint> {
        // SAFETY: only called with `()I` methods of this class.
        let value = unsafe {
            env.call_method_unchecked(
                &self.object,
                method,
                ReturnType::Primitive(Primitive::Int),
                &[],
            )
        };
        checked(env, value.and_then(|v| v.i()))
    }
}

/// Copy a Java string; the UTF chars are released before returning.
fn java_string(env: &mut JNIEnv<'_>, s: &JString<'_>) -> Result<String> {
    let copied = env.get_string(s).map(String::from);
    checked(env, copied)
}
