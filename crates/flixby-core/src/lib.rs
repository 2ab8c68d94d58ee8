//! Shared data model, configuration, and the pure stages of the quick-setup
//! pipeline: merging the website and place profiles, and rendering the merged
//! profile into assistant instructions.

pub mod app_config;
pub mod config;
pub mod merge;
pub mod profile;
pub mod prompt;

pub use app_config::{AppConfig, Environment, SearchMode};
pub use config::{load_app_config, load_app_config_from_env};
pub use merge::merge_profiles;
pub use profile::{BusinessProfile, BusinessSuggestion};
pub use prompt::synthesize_system_prompt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
