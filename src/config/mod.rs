//! Configuration module for VoiceCheckr

mod method;
mod settings;

pub use method::DetectionMethod;
pub use settings::{ClientConfig, ConfigError, DEFAULT_PLACEHOLDER};
