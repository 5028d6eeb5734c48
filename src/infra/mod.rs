//! Infrastructure - application configuration
//!
//! - `config` - TOML configuration loading with defaults

pub mod config;

// Re-export commonly used types
pub use config::Config;
