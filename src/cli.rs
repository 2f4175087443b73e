use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, LaunchMode};

/// Fetch a post from a REST endpoint and show its fields.
#[derive(Debug, Parser)]
#[command(name = "postview", version, about)]
pub struct Cli {
    /// Override the resource URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start fetching as soon as the screen opens
    #[arg(long)]
    pub auto: bool,

    /// Fetch once, print the result and exit (no TUI)
    #[arg(long)]
    pub once: bool,

    /// Write logs to PATH
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.resource.url = url.clone();
        }
        if self.auto {
            config.ui.launch_mode = LaunchMode::Auto;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_what_was_given() {
        let cli = Cli::parse_from(["postview", "--url", "http://localhost:9/posts/7"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.resource.url, "http://localhost:9/posts/7");
        assert_eq!(config.ui.launch_mode, LaunchMode::Manual);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn auto_flag_switches_launch_mode() {
        let cli = Cli::parse_from(["postview", "--auto", "--log-file", "/tmp/pv.log"]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.ui.launch_mode, LaunchMode::Auto);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/pv.log"));
    }

    #[test]
    fn once_is_off_by_default() {
        let cli = Cli::parse_from(["postview"]);
        assert!(!cli.once);
        assert!(cli.config.is_none());
    }
}
