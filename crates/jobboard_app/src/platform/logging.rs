//! Logger setup for the job board binary.
//!
//! Stdout carries the rendered regions, so terminal logging always goes to
//! stderr. The file sink path and level come from [`AppConfig`].

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use super::config::AppConfig;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogDestination {
    #[default]
    File,
    Terminal,
    Both,
}

/// Resolved sinks and level, before any logger is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPlan {
    pub level: LevelFilter,
    pub stderr: bool,
    pub file: Option<PathBuf>,
}

impl LogPlan {
    /// Unknown level names fall back to `info` with a warning on stderr.
    pub fn from_config(config: &AppConfig) -> Self {
        let level = jobboard_logging::level_from_name(&config.log_level).unwrap_or_else(|| {
            eprintln!("Warning: unknown log level {:?}, using info", config.log_level);
            LevelFilter::Info
        });
        let (stderr, file) = match config.log_destination {
            LogDestination::File => (false, Some(config.log_file.clone())),
            LogDestination::Terminal => (true, None),
            LogDestination::Both => (true, Some(config.log_file.clone())),
        };
        Self {
            level,
            stderr,
            file,
        }
    }
}

pub fn initialize(plan: &LogPlan) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if plan.stderr {
        loggers.push(TermLogger::new(
            plan.level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if let Some(path) = &plan.file {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(plan.level, config, file)),
            Err(err) => eprintln!("Warning: could not create log file {}: {}", path.display(), err),
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}
