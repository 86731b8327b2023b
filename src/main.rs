use std::time::Duration;

use anyhow::{bail, Context};
use ars_common::analysis::failure_message;
use ars_common::export::{EXPORT_EMPTY_WARNING, EXPORT_SUCCESS_MESSAGE};
use ars_common::records::FETCH_FAILED_MESSAGE;
use ars_common::{analyze_address, export_records, fetch_records_page, run_probe, ExportOutcome, PageRequest, Probe};
use ars_console::{cli, client, config, output};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn connect(config: &Config, base_url: Option<&str>) -> ars_console::error::Result<client::CliClient> {
    let api_config = config.api_config(base_url);
    tracing::debug!(base_url = api_config.base_url(), "backend");
    client::build_client(api_config, config.timeout_seconds)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let base_url = cli.base_url.clone();
    let mut config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command {
        Commands::Analyze { address } => {
            let client = connect(&config, base_url.as_deref())?;
            let progress = spinner("正在解析地址，請稍候...");
            let outcome = analyze_address(&client, &address).await;
            progress.finish_and_clear();

            match outcome {
                Ok(result) => println!("{}", output::render_analysis(&result)),
                Err(e) => {
                    tracing::error!("address analysis error: {:?}", e);
                    bail!(failure_message(&e));
                }
            }
        }

        Commands::Records { page, size } => {
            let client = connect(&config, base_url.as_deref())?;
            let request = PageRequest {
                page_no: page,
                page_size: size,
            };
            let progress = spinner("載入中...");
            let outcome = fetch_records_page(&client, request).await;
            progress.finish_and_clear();

            match outcome {
                Ok(listing) => println!("{}", output::render_records(&listing)),
                Err(e) => {
                    tracing::error!("records fetch error: {:?}", e);
                    bail!(FETCH_FAILED_MESSAGE);
                }
            }
        }

        Commands::Export { page, size, output: out_dir } => {
            let client = connect(&config, base_url.as_deref())?;
            let request = PageRequest {
                page_no: page,
                page_size: size,
            };
            let listing = match fetch_records_page(&client, request).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::error!("records fetch error: {:?}", e);
                    bail!(FETCH_FAILED_MESSAGE);
                }
            };

            let today = chrono::Utc::now().date_naive();
            match export_records(&listing.rows, today) {
                ExportOutcome::Empty => println!("⚠ {}", EXPORT_EMPTY_WARNING),
                ExportOutcome::Ready(export) => {
                    let dir = out_dir.unwrap_or_else(|| std::path::PathBuf::from("."));
                    let path = output::write_export(&export, &dir)?;
                    println!("✔ {}: {}", EXPORT_SUCCESS_MESSAGE, path.display());
                }
            }
        }

        Commands::Probe { target } => {
            let client = connect(&config, base_url.as_deref())?;
            let report = run_probe(&client, Probe::from(target)).await;
            if !report.success {
                bail!(report.text);
            }
            println!("✔ {}", report.text);
        }

        Commands::Config { set_base_url, show } => {
            if let Some(url) = set_base_url.as_deref() {
                config.set_base_url(url)?;
                config.save()?;
                println!("✔ ベースURLを設定しました: {}", url.trim().trim_end_matches('/'));
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.resolve_base_url(base_url.as_deref()));
                println!(
                    "  保存値: {}",
                    config.base_url.as_deref().unwrap_or("未設定")
                );
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
