//! Class and method lookup helpers shared by the wrappers.
//!
//! Failed lookups and calls leave a Java exception pending; every helper here
//! clears it before handing the error back, so the next JNI call on the same
//! thread does not abort the VM.

use crate::error::{Error, Result};
use jni::objects::{JClass, JMethodID, JStaticMethodID};
use jni::JNIEnv;

pub(crate) fn clear_exception(env: &mut JNIEnv<'_>) {
    if env.exception_check().unwrap_or(false) {
        #[cfg(feature = "debug-log")]
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}

/// Map a raw JNI result into the crate error, clearing any pending exception.
pub(crate) fn checked<T>(env: &mut JNIEnv<'_>, result: jni::errors::Result<T>) -> Result<T> {
    result.map_err(|err| {
        clear_exception(env);
        Error::Jni(err)
    })
}

/// `FindClass`; a missing class is logged.
pub(crate) fn find_class<'local>(
    env: &mut JNIEnv<'local>,
    name: &'static str,
) -> Result<JClass<'local>> {
    env.find_class(name).map_err(|err| {
        clear_exception(env);
        log::error!("Could not locate Java class {name}: {err}");
        Error::ClassNotFound(name)
    })
}

/// `GetMethodID`. Not logged here: callers report one line per class.
pub(crate) fn method_id<'local>(
    env: &mut JNIEnv<'local>,
    class: &JClass<'local>,
    class_name: &'static str,
    method: &'static str,
    sig: &'static str,
) -> Result<JMethodID> {
    env.get_method_id(class, method, sig).map_err(|_| {
        clear_exception(env);
        Error::MethodNotFound {
            class: class_name,
            method,
        }
    })
}

/// `GetStaticMethodID`. Not logged here: callers report one line per class.
pub(crate) fn static_method_id<'local>(
    env: &mut JNIEnv<'local>,
    class: &JClass<'local>,
    class_name: &'static str,
    method: &'static str,
    sig: &'static str,
) -> Result<JStaticMethodID> {
    env.get_static_method_id(class, method, sig).map_err(|_| {
        clear_exception(env);
        Error::MethodNotFound {
            class: class_name,
            method,
        }
    })
}
