use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resource: ResourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The remote resource to fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Absolute http(s) URL of the resource.
    #[serde(default = "default_url")]
    pub url: String,
    /// Connection timeout in seconds (default: 5).
    ///
    /// Only bounds connection setup; a response that never arrives keeps
    /// the screen loading.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// How the screen behaves when it first appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Wait for the user to trigger the fetch.
    #[default]
    Manual,
    /// Start fetching as soon as the screen is mounted.
    Auto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub launch_mode: LaunchMode,
    /// Redraw / spinner tick in milliseconds (default: 120).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The TUI logs nowhere without one.
    #[serde(default)]
    pub file: Option<String>,
}

pub const DEFAULT_RESOURCE_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

fn default_url() -> String {
    DEFAULT_RESOURCE_URL.to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            launch_mode: LaunchMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
