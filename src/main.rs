mod cli;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;
use tokio::runtime::Runtime;
use typed_fetch::{ClientConfig, Method, RequestError, RequestOptions, ReqwestTransport, TypedFetch};

const EXIT_HTTP_ERROR: i32 = 2;
const EXIT_NETWORK_ERROR: i32 = 3;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".bold().red(), err);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(timeout) = cli.timeout {
        config.timeout_seconds = Some(timeout);
    }

    let options = build_options(&cli)?;
    let fetcher = TypedFetch::new(ReqwestTransport::new(config)?);

    let rt = Runtime::new().context("Failed to create async runtime")?;
    let result = rt.block_on(fetcher.execute::<serde_json::Value>(&cli.url, options));

    match result {
        Ok(mut response) => {
            ui::status_line(response.status(), response.status_text());
            if !response.ok() {
                ui::warning_message("Unsuccessful status without a classified error");
            }
            ui::body(&response.text()?);
            Ok(0)
        }
        Err(RequestError::Http(mut error)) => {
            let class = if error.is_client_error() {
                "client error"
            } else {
                "server error"
            };
            ui::error_message(&format!("{} ({})", error, class));
            ui::body(&error.text()?);
            Ok(EXIT_HTTP_ERROR)
        }
        Err(RequestError::Network(error)) => {
            ui::error_message(&format!("Network error: {}", error));
            Ok(EXIT_NETWORK_ERROR)
        }
    }
}

fn build_options(cli: &Cli) -> anyhow::Result<RequestOptions> {
    let method = Method::from_bytes(cli.method.to_uppercase().as_bytes())
        .map_err(|_| anyhow!("Invalid HTTP method: {}", cli.method))?;

    let mut options = RequestOptions::new().method(method);

    for header in &cli.headers {
        let (name, value) = header
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid header '{}', expected \"Name: value\"", header))?;
        options = options.header(name.trim(), value.trim());
    }

    if let Some(data) = &cli.data {
        options = options.body(data.clone());
    }

    Ok(options)
}
