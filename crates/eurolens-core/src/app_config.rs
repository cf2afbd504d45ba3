use std::path::PathBuf;

/// Application configuration, sourced from `EUROLENS_*` environment
/// variables. See [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote classification service.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Path of the single-blob history file.
    pub history_path: PathBuf,
    /// Path of the CLI state file (last open, submitted feedback ids).
    pub state_path: PathBuf,
    /// Longest side of a normalized image, in pixels.
    pub image_max_dimension: u32,
    /// JPEG quality in `0..=1`.
    pub image_jpeg_quality: f32,
    pub log_level: String,
    /// Static location enrichment values; both must be set for requests to
    /// carry a `userLocation` block.
    pub location_city: Option<String>,
    pub location_country: Option<String>,
}
