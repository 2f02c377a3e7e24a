//! Process lifecycle: configuration, starting and stopping the store, and logging setup.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use self::tracing::setup_tracing;
