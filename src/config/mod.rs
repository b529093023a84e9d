//! Configuration module
//!
//! This module contains components for loading and saving the settings.

mod loader;
mod model;

pub use loader::{config_path_beside_executable, load, save};
pub use model::Settings;
