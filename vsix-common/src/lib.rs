// vsix-common/src/lib.rs
pub mod cache;
pub mod config;
pub mod error;
pub mod model;

// Re-export key types
pub use cache::Cache;
pub use config::Config;
pub use error::{Result, VsixError};
pub use model::ExtensionId;
