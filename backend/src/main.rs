#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::library::{DirectoryCatalog, MediaCatalog, TitleListCatalog};
use crate::model::Config;
use crate::processing::processor::TitleProcessor;
use crate::utils::{init_logger, resolve_env_var};
use clap::Parser;
use log::{debug, error, info, warn};
use shared::model::CleanReport;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "cleartitle")]
#[command(version)]
#[command(about = "Turns release style movie file names into readable titles", long_about = None)]
struct Args {
    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,

    /// Scan the library directories from the config file
    #[arg(short = 's', long, default_value_t = false, default_missing_value = "true")]
    scan: bool,

    /// Scan these directories instead of the configured ones
    #[arg(short = 'd', long = "dir")]
    dirs: Option<Vec<String>>,

    /// Rename the scanned files, without it nothing is changed
    #[arg(long, default_value_t = false, default_missing_value = "true")]
    apply: bool,

    /// Append the release year as " (YYYY)" instead of removing it
    #[arg(long = "keep-year", default_value_t = false, default_missing_value = "true")]
    keep_year: bool,

    /// Print the report as json
    #[arg(long, default_value_t = false, default_missing_value = "true")]
    json: bool,

    /// Titles to clean, read from stdin when empty
    titles: Vec<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config_file = get_config_file_path(&args);
    init_logger(args.log_level.as_ref(), &config_file);

    debug!("Version: {VERSION}");
    if let Some(bts) = BUILD_TIMESTAMP {
        debug!("Build time: {bts}");
    }
    debug!("Config file: {config_file}");

    let mut config = utils::read_config(&config_file).unwrap_or_else(|err| exit!("{}", err));
    if args.keep_year {
        config.title_cleaner.remove_year = false;
    }

    let cancel = CancellationToken::new();
    spawn_cancel_on_ctrl_c(cancel.clone());

    let scan_directories = args.scan || args.dirs.is_some();
    if args.apply && !scan_directories {
        warn!("--apply only has an effect together with --scan or --dir");
    }

    let report = if scan_directories {
        let library = match args.dirs.as_ref() {
            Some(dirs) => config.library.clone().with_directories(dirs),
            None => config.library.clone(),
        };
        if library.scan_directories.is_empty() {
            exit!("No library scan directories configured");
        }
        let catalog = DirectoryCatalog::new(library);
        run(&config, &catalog, !args.apply, &cancel).await
    } else {
        let titles = if args.titles.is_empty() { read_stdin_titles().await } else { args.titles.clone() };
        let catalog = TitleListCatalog::new(titles);
        run(&config, &catalog, true, &cancel).await
    };

    print_report(&report, args.json);
    if !report.success {
        std::process::exit(1);
    }
}

fn get_config_file_path(args: &Args) -> String {
    resolve_env_var(&args.config_file.as_ref().map_or_else(
        || utils::get_default_config_file_path(&utils::get_default_config_path()),
        ToString::to_string,
    ))
}

fn spawn_cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C, stopping after the current item");
            cancel.cancel();
        }
    });
}

async fn read_stdin_titles() -> Vec<String> {
    let mut titles = vec![];
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if !line.trim().is_empty() {
                    titles.push(line);
                }
            }
            Ok(None) => break,
            Err(err) => {
                error!("Failed to read titles from stdin: {err}");
                break;
            }
        }
    }
    titles
}

async fn run<C: MediaCatalog>(config: &Config, catalog: &C, dry_run: bool, cancel: &CancellationToken) -> CleanReport {
    let processor = TitleProcessor::new(Arc::new(config.title_cleaner.clone()), dry_run);
    processor
        .process(catalog, cancel, |percent| debug!("Progress {percent:.0}%"))
        .await
        .unwrap_or_else(|err| exit!("Failed to list titles: {err}"))
}

fn print_report(report: &CleanReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{text}"),
            Err(err) => error!("Failed to serialize report: {err}"),
        }
    } else {
        for change in &report.changes {
            println!("{} -> {}", change.before, change.after);
        }
        println!("{}", report.message);
    }
}
