//! Configuration module for monospend
//!
//! - Path resolution for settings and record files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MonospendPaths;
pub use settings::Settings;
