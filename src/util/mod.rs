pub mod assets;
pub mod config;
pub mod format;
pub mod version;
