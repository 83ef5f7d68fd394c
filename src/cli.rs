use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "typed-fetch")]
#[command(
    author,
    version,
    about = "Send one HTTP request and report classified failures"
)]
pub struct Cli {
    /// Target URL
    pub url: String,

    /// HTTP method
    #[clap(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Request header as "Name: value" (repeatable)
    #[clap(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body
    #[clap(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Client configuration file (TOML)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds, overriding the configuration
    #[clap(short, long)]
    pub timeout: Option<u64>,

    /// Enable verbose output with debug logging
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}
