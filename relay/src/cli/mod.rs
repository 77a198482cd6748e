//! CLI module for yoed
//!
//! Provides command-line interface for the relay server.

use clap::Parser;
use std::path::PathBuf;
use yoed_common::config::DEFAULT_CONFIG_PATH;

/// yoed - Push notification relay that fans pings out to subscribed callbacks
#[derive(Parser, Debug)]
#[command(name = "yoed")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    YOED_CONFIG             Config file path (default: ./config.json)
    YOED_LOG_LEVEL          Log level (default: info)
"#)]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, env = "YOED_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
