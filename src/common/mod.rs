//! # Common Components
//!
//! - [`config`]: TOML configuration loading
//! - [`report`]: JSON summaries of encode/decode/capacity runs

pub mod config;
pub mod report;
