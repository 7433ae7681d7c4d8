//! Crate error type.
//!
//! Every JNI step that can fail maps to one variant here. Callers of the
//! joystick API never see these directly: [`JoystickImpl`](crate::joystick::JoystickImpl)
//! degrades them to "not connected" for the current call. They are public so
//! custom [`InputDeviceSource`](crate::device::InputDeviceSource) implementations
//! can report the same failure classes.

use thiserror::Error;

/// Failures of the JNI layer, the platform seam, or configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// `AttachCurrentThread` reported an error.
    #[error("failed to attach the current thread to the Java VM: {0}")]
    Attach(#[source] jni::errors::Error),

    /// `FindClass` could not resolve a class.
    #[error("could not locate Java class `{0}`")]
    ClassNotFound(&'static str),

    /// A method ID lookup failed on an otherwise resolved class.
    #[error("could not locate method `{method}` on `{class}`")]
    MethodNotFound {
        class: &'static str,
        method: &'static str,
    },

    /// A Java call that must return an object returned `null`.
    #[error("`{0}` returned null")]
    NullResult(&'static str),

    /// Any other JNI failure (type mismatch, pending exception, ...).
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The TOML configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
