//! `java.util.List` access.

use super::lookup::{checked, find_class, method_id};
use crate::error::Result;
use jni::objects::{JClass, JMethodID, JObject};
use jni::signature::{Primitive, ReturnType};
use jni::sys::jvalue;
use jni::JNIEnv;
use std::marker::PhantomData;

/// Element types a [`JniList`] can hand out.
///
/// `from_java` runs on every [`JniList::get`], including the element class
/// lookup.
pub trait JniListElement<'local>: Sized {
    fn from_java(env: &mut JNIEnv<'local>, object: JObject<'local>) -> Result<Self>;
}

/// Resolved `java/util/List` class.
pub struct JniListClass<'local> {
    class: JClass<'local>,
}

impl<'local> JniListClass<'local> {
    pub const NAME: &'static str = "java/util/List";

    pub fn find_class(env: &mut JNIEnv<'local>) -> Result<Self> {
        Ok(Self {
            class: find_class(env, Self::NAME)?,
        })
    }

    /// Wrap `list`, resolving `get` and `size`.
    pub fn make_from_java<T: JniListElement<'local>>(
        &self,
        env: &mut JNIEnv<'local>,
        list: JObject<'local>,
    ) -> Result<JniList<'local, T>> {
        let methods = method_id(env, &self.class, Self::NAME, "get", "(I)Ljava/lang/Object;")
            .and_then(|get| {
                let size = method_id(env, &self.class, Self::NAME, "size", "()I")?;
                Ok((get, size))
            });

        match methods {
            Ok((get, size)) => Ok(JniList {
                list,
                get,
                size,
                _element: PhantomData,
            }),
            Err(err) => {
                log::error!("Could not locate required List methods");
                Err(err)
            }
        }
    }
}

/// Index-accessed view of a Java `List` whose elements wrap as `T`.
pub struct JniList<'local, T> {
    list: JObject<'local>,
    get: JMethodID,
    size: JMethodID,
    _element: PhantomData<T>,
}

impl<'local, T: JniListElement<'local>> JniList<'local, T> {
    /// `List.size()`.
    pub fn size(&self, env: &mut JNIEnv<'local>) -> Result<i32> {
        // SAFETY: `size` was resolved on java/util/List with signature `()I`.
        let size = unsafe {
            env.call_method_unchecked(
                &self.list,
                self.size,
                ReturnType::Primitive(Primitive::Int),
                &[],
            )
        };
        checked(env, size.and_then(|v| v.i()))
    }

    /// `List.get(idx)`; a `null` element yields `Ok(None)`.
    pub fn get(&self, env: &mut JNIEnv<'local>, idx: i32) -> Result<Option<T>> {
        // SAFETY: `get` was resolved on java/util/List with signature
        // `(I)Ljava/lang/Object;` and receives exactly one int.
        let element = unsafe {
            env.call_method_unchecked(&self.list, self.get, ReturnType::Object, &[jvalue { i: idx }])
        };
        let element = checked(env, element.and_then(|v| v.l()))?;
        if element.is_null() {
            return Ok(None);
        }
        T::from_java(env, element).map(Some)
    }
}
