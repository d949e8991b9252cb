//! Infrastructure configuration modules.

pub mod generation;
pub mod llm;
pub mod logging;
pub mod settings;

pub use settings::{Config, DEFAULT_CONFIG_PATH};
