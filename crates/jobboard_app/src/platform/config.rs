use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use jobboard_engine::FetchSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

const DEFAULT_CONFIG_FILE: &str = "jobboard.ron";
const DEFAULT_ENDPOINT: &str = "https://dev-ucf-creol.pantheonsite.io/ia/wp-json/affiliates/v1/jobs";
const DEFAULT_PER_PAGE: u32 = 5;
const DEFAULT_LOG_FILE: &str = "jobboard.log";

/// Browse job postings served by the Affiliates Portal REST route.
#[derive(Debug, Parser)]
#[command(name = "jobboard", version)]
pub struct Cli {
    /// RON config file. Defaults to ./jobboard.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Jobs collection URL, e.g. https://example.org/wp-json/affiliates/v1/jobs
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Jobs per page.
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    /// Log level: error, warn, info, debug or trace.
    #[arg(long)]
    pub log_level: Option<String>,
    /// Log file used by the file and both destinations.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub per_page: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            log_level: "info".to_string(),
            log_destination: LogDestination::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        ron::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    AppConfig::load(fallback)?
                } else {
                    AppConfig::default()
                }
            }
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(per_page) = self.per_page {
            config.per_page = per_page;
        }
        if let Some(log) = self.log {
            config.log_destination = log;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::{AppConfig, Cli, DEFAULT_PER_PAGE};
    use crate::platform::logging::LogDestination;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(r#"(endpoint: "https://example.org/jobs", per_page: 10)"#);
        let config = AppConfig::load(file.path()).expect("load");

        assert_eq!(config.endpoint, "https://example.org/jobs");
        assert_eq!(config.per_page, 10);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.log_file, std::path::PathBuf::from("jobboard.log"));
    }

    #[test]
    fn flags_override_file() {
        let file = write_config(
            r#"(endpoint: "https://example.org/jobs", log_destination: both, log_file: "a.log")"#,
        );
        let path = file.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from([
            "jobboard",
            "--config",
            path.as_str(),
            "--per-page",
            "3",
            "--log",
            "terminal",
            "--log-file",
            "b.log",
        ]);
        let config = cli.resolve().expect("resolve");

        assert_eq!(config.endpoint, "https://example.org/jobs");
        assert_eq!(config.per_page, 3);
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_file, std::path::PathBuf::from("b.log"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.ron");
        let cli = Cli::parse_from(["jobboard", "--config", missing.to_str().unwrap()]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("(per_page: \"five\")");
        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn fetch_settings_follow_timeouts() {
        let config = AppConfig {
            request_timeout_secs: 4,
            connect_timeout_secs: 2,
            ..AppConfig::default()
        };
        let settings = config.fetch_settings();
        assert_eq!(settings.request_timeout.as_secs(), 4);
        assert_eq!(settings.connect_timeout.as_secs(), 2);
        assert_eq!(AppConfig::default().per_page, DEFAULT_PER_PAGE);
    }
}
