// vsix-net/src/lib.rs
pub mod api;
pub mod fetch;
pub mod validation;

// Re-export the public fetching functions
pub use api::query_latest_version;
pub use fetch::fetch;
pub use validation::validate_url;
pub use vsix_common::{
    error::{Result, VsixError},
    model::ExtensionId,
    Config,
};
