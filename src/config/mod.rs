//! Configuration module
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
