use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Page content file (TOML or JSON). Defaults to `<data_dir>/content.toml`
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            content_path: None,
            log_level: default_log_level(),
        }
    }
}

/// Active-section tracking parameters, in layout units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Quiet time after the last scroll event before the active section is recomputed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Distance kept above a section when navigating to it
    #[serde(default = "default_nav_offset")]
    pub nav_offset: f64,
    /// Viewports narrower than this show the compact tab bar
    #[serde(default = "default_nav_breakpoint")]
    pub nav_breakpoint: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            nav_offset: default_nav_offset(),
            nav_breakpoint: default_nav_breakpoint(),
        }
    }
}

impl TrackerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Horizontal drag distance that turns a gesture into next/prev
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    /// Viewports narrower than this use compact card offsets
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            compact_breakpoint: default_compact_breakpoint(),
        }
    }
}

/// Contact form validation and delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Email delivery endpoint (EmailJS-compatible)
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    /// Public key sent as `user_id`
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,
    #[serde(default = "default_min_message_len")]
    pub min_message_len: usize,
    /// How long a toast notification stays visible
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_ms: u64,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            service_id: None,
            template_id: None,
            public_key: None,
            min_name_len: default_min_name_len(),
            min_message_len: default_min_message_len(),
            toast_ttl_ms: default_toast_ttl(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl ContactConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    /// Delivery is possible only when every EmailJS identifier is set
    pub fn is_delivery_configured(&self) -> bool {
        self.service_id.is_some() && self.template_id.is_some() && self.public_key.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Rows kept above a section when jumping to it from the navbar
    #[serde(default = "default_nav_offset_rows")]
    pub nav_offset_rows: u16,
    /// Mouse drag distance (columns) that counts as a swipe
    #[serde(default = "default_swipe_threshold_cols")]
    pub swipe_threshold_cols: u16,
    /// Terminals narrower than this show the bottom tab bar
    #[serde(default = "default_nav_breakpoint_cols")]
    pub nav_breakpoint_cols: u16,
    /// Terminals narrower than this use compact carousel offsets
    #[serde(default = "default_carousel_breakpoint_cols")]
    pub carousel_breakpoint_cols: u16,
    /// Layout units represented by one terminal column
    #[serde(default = "default_px_per_col")]
    pub px_per_col: f64,
    /// Draw the decorative background grid
    #[serde(default = "default_true")]
    pub grid_overlay: bool,
    #[serde(default = "default_grid_cell_cols")]
    pub grid_cell_cols: u16,
    #[serde(default = "default_grid_cell_rows")]
    pub grid_cell_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
            nav_offset_rows: default_nav_offset_rows(),
            swipe_threshold_cols: default_swipe_threshold_cols(),
            nav_breakpoint_cols: default_nav_breakpoint_cols(),
            carousel_breakpoint_cols: default_carousel_breakpoint_cols(),
            px_per_col: default_px_per_col(),
            grid_overlay: default_true(),
            grid_cell_cols: default_grid_cell_cols(),
            grid_cell_rows: default_grid_cell_rows(),
        }
    }
}

/// Easing curve for animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    /// 1 - (1-t)^3
    #[default]
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
    /// Sinusoidal ease in and out
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    50
}

fn default_nav_offset() -> f64 {
    100.0
}

fn default_nav_breakpoint() -> f64 {
    1024.0
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn default_compact_breakpoint() -> f64 {
    768.0
}

fn default_contact_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_min_name_len() -> usize {
    2
}

fn default_min_message_len() -> usize {
    10
}

fn default_toast_ttl() -> u64 {
    4000
}

fn default_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    100
}

fn default_nav_offset_rows() -> u16 {
    2
}

fn default_swipe_threshold_cols() -> u16 {
    6
}

fn default_nav_breakpoint_cols() -> u16 {
    100
}

fn default_carousel_breakpoint_cols() -> u16 {
    80
}

fn default_px_per_col() -> f64 {
    8.0
}

fn default_grid_cell_cols() -> u16 {
    25
}

fn default_grid_cell_rows() -> u16 {
    9
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the page content file path
    pub fn content_path(&self) -> PathBuf {
        match &self.general.content_path {
            Some(path) => expand_tilde(path),
            None => self.data_dir().join("content.toml"),
        }
    }

    /// Get the log file used while the terminal preview owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_constants() {
        let config = AppConfig::default();
        assert_eq!(config.tracker.debounce(), Duration::from_millis(50));
        assert_eq!(config.tracker.nav_offset, 100.0);
        assert_eq!(config.tracker.nav_breakpoint, 1024.0);
        assert_eq!(config.carousel.swipe_threshold, 50.0);
        assert_eq!(config.carousel.compact_breakpoint, 768.0);
        assert!(!config.contact.is_delivery_configured());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [tracker]
            debounce_ms = 80

            [ui.scroll]
            easing = "ease_in_out"
            "#,
        )
        .unwrap();

        assert_eq!(config.tracker.debounce_ms, 80);
        assert_eq!(config.tracker.nav_offset, 100.0);
        assert_eq!(config.ui.scroll.easing, EasingType::EaseInOut);
        assert!(config.ui.scroll.smooth_enabled);
        assert_eq!(config.contact.min_message_len, 10);
    }

    #[test]
    fn test_content_path_defaults_to_data_dir() {
        let mut config = AppConfig::default();
        config.general.data_dir = PathBuf::from("/tmp/folio-test");
        assert_eq!(
            config.content_path(),
            PathBuf::from("/tmp/folio-test/content.toml")
        );

        config.general.content_path = Some(PathBuf::from("/srv/site.json"));
        assert_eq!(config.content_path(), PathBuf::from("/srv/site.json"));
    }

    #[test]
    fn test_serialized_config_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.contact.service_id = Some("service_x".into());
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.contact.service_id.as_deref(), Some("service_x"));
        assert_eq!(parsed.ui.grid_cell_cols, config.ui.grid_cell_cols);
    }
}
