//! Thread attachment.

use crate::error::{Error, Result};
use jni::{AttachGuard, JNIEnv, JavaVM};

/// Scope guard for one JVM-attached operation.
///
/// Wraps [`AttachGuard`]: if this call attached the thread, it is detached
/// when the guard drops. A thread that was attached beforehand (the activity
/// main thread, a permanently attached game loop) stays attached.
pub struct Jni<'vm> {
    guard: AttachGuard<'vm>,
}

impl<'vm> Jni<'vm> {
    /// Attach the current native thread to `vm`.
    ///
    /// Failure is logged and non-fatal: the caller reports "not connected"
    /// for this call.
    pub fn attach_current_thread(vm: &'vm JavaVM) -> Result<Self> {
        match vm.attach_current_thread() {
            Ok(guard) => Ok(Self { guard }),
            Err(err) => {
                log::error!("Failed to initialize JNI: {err}");
                Err(Error::Attach(err))
            }
        }
    }

    /// Environment of the attached thread.
    pub fn env(&mut self) -> &mut JNIEnv<'vm> {
        &mut self.guard
    }
}
