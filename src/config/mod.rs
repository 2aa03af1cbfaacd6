//! Configuration module for Homekeeper
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Logging initialisation

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::init_tracing;
pub use paths::HomekeeperPaths;
pub use settings::Settings;
