//! Filesystem-backed configuration loading.
//!
//! Schema and validation live in `domain::config`.

mod load_config;

pub use load_config::{HOME_ENV, load_config, parse_config_content, resolve_root};
