//! Core plumbing shared by the awesome-icons crates.
//!
//! This crate provides:
//! - [`Signal`]: a small callback registry used for change notifications
//!   (theme resets, animation ticks)
//! - [`ResourceManager`]: lookup of font bytes from embedded directories or
//!   filesystem roots through `:/path` style resource paths
//! - [`logging`]: `tracing` target names used across the workspace

pub mod error;
pub mod logging;
pub mod resource;
pub mod signal;

pub use error::{ResourceError, ResourceResult};
pub use resource::{EmbeddedDir, IncludeDir, ResourceManager, ResourcePath};
pub use signal::{ConnectionId, Signal};
