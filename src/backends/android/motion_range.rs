//! `android.view.InputDevice.MotionRange` access.

use super::list::JniListElement;
use super::lookup::{checked, find_class, method_id};
use crate::error::Result;
use jni::objects::{JClass, JMethodID, JObject};
use jni::signature::{Primitive, ReturnType};
use jni::JNIEnv;

/// Resolved `InputDevice$MotionRange` class.
pub struct JniMotionRangeClass<'local> {
    class: JClass<'local>,
}

impl<'local> JniMotionRangeClass<'local> {
    pub const NAME: &'static str = "android/view/InputDevice$MotionRange";

    pub fn find_class(env: &mut JNIEnv<'local>) -> Result<Self> {
        Ok(Self {
            class: find_class(env, Self::NAME)?,
        })
    }

    pub fn make_from_java(
        &self,
        env: &mut JNIEnv<'local>,
        motion_range: JObject<'local>,
    ) -> Result<JniMotionRange<'local>> {
        match method_id(env, &self.class, Self::NAME, "getAxis", "()I") {
            Ok(get_axis) => Ok(JniMotionRange {
                object: motion_range,
                get_axis,
            }),
            Err(err) => {
                log::error!("Could not locate required InputDevice.MotionRange methods");
                Err(err)
            }
        }
    }
}

/// One motion range of an input device.
pub struct JniMotionRange<'local> {
    object: JObject<'local>,
    get_axis: JMethodID,
}

impl<'local> JniMotionRange<'local> {
    /// `MotionRange.getAxis()`: the `AMOTION_EVENT_AXIS_*` code.
    pub fn axis(&self, env: &mut JNIEnv<'local>) -> Result<i32> {
        // SAFETY: `get_axis` was resolved on MotionRange with signature `()I`.
        let axis = unsafe {
            env.call_method_unchecked(
                &self.object,
                self.get_axis,
                ReturnType::Primitive(Primitive::Int),
                &[],
            )
        };
        checked(env, axis.and_then(|v| v.i()))
    }
}

impl<'local> JniListElement<'local> for JniMotionRange<'local> {
    fn from_java(env: &mut JNIEnv<'local>, object: JObject<'local>) -> Result<Self> {
        JniMotionRangeClass::find_class(env)?.make_from_java(env, object)
    }
}
