//! Shared domain types and pure logic for EuroLens.
//!
//! Holds the server-authoritative analysis result model, the closed
//! classification set with its presentation styles, the re-engagement
//! policy, and environment-driven application configuration. Everything
//! here is I/O-free apart from config loading.

pub mod analysis;
pub mod app_config;
pub mod classification;
pub mod config;
pub mod engagement;

pub use analysis::{AnalysisResult, EuropeanAlternative};
pub use app_config::AppConfig;
pub use classification::{Classification, ClassificationStyle};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use engagement::should_prompt;
