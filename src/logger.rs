//! Log sink setup.
//!
//! The crate logs through the [`log`] facade. On Android, [`init`] routes it to
//! logcat under the `droidstick` tag; elsewhere it does nothing and the host
//! application picks its own logger.
//!
//! With the `debug-log` feature, the level is raised to `Trace` so claim and
//! release events show up.

use std::sync::Once;

/// Logcat tag.
pub const TAG: &str = "droidstick";

static INIT: Once = Once::new();

/// Install the platform logger. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(max_level())
                .with_tag(TAG),
        );
        log::debug!("{TAG} logging initialized");
    });
}

/// Level the crate logs at.
pub fn max_level() -> log::LevelFilter {
    if cfg!(feature = "debug-log") {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        assert!(INIT.is_completed());
    }

    #[test]
    fn level_follows_feature() {
        let expected = if cfg!(feature = "debug-log") {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        };
        assert_eq!(max_level(), expected);
    }
}
