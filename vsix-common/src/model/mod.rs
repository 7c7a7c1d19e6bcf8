// vsix-common/src/model/mod.rs
pub mod extension;
pub mod gallery;

pub use extension::ExtensionId;
