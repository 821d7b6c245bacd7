//! Duplicate-free, priority-aware tag collections for task records.
//!
//! [`TagSet`] holds the tags of one task. It rejects duplicates, keeps at most
//! one priority tag (HIGH, MEDIUM, LOW) when tags are added, and publishes
//! every change to subscribers through a read-only [`TagSetView`].

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod logging;
pub mod tag;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use logging::{init_logging, LogConfig};
pub use tag::{Priority, Tag, TagError, TagSet, TagSetChange, TagSetView};
pub use user_config::{
    load_user_config, load_user_config_from, ConfigError, LoggingSettings, NotifyConfig,
    UserConfig,
};
