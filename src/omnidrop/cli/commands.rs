//! # CLI Layer
//!
//! The only place in the codebase that knows about stdout/stderr, exit codes and
//! log output. Handlers call the API and print what comes back.
//!
//! - `run()`: parse arguments, set up logging, dispatch
//! - `init_context()`: pick the config directory and open the API
//! - `handle_*()`: per-command handlers

use super::print::{print_config, print_messages, print_summary};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use omnidrop::api::{ConfigAction, OmnidropApi};
use omnidrop::commands::export::NOTHING_TO_EXPORT;
use omnidrop::error::Result;
use std::path::PathBuf;
use tracing::{debug, info};

const PROJECT_CONFIG_DIR: &str = ".omnidrop";

struct AppContext {
    api: OmnidropApi,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    debug!(?cli, "CLI arguments parsed");

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Convert {
            paths,
            output,
            stdout,
            link,
        } => handle_convert(&ctx, paths, output, stdout, link),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

/// Priority: RUST_LOG > --quiet > --verbose > default (warn). Logs go to stderr so
/// `--stdout` output stays clean.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir(),
    };
    debug!(config_dir = %config_dir.display(), "using config directory");

    let api = OmnidropApi::open(&config_dir)?;
    Ok(AppContext { api })
}

fn default_config_dir() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(PROJECT_CONFIG_DIR);
    if project_dir.is_dir() {
        return project_dir;
    }

    match ProjectDirs::from("com", "omnidrop", "omnidrop") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => project_dir,
    }
}

fn handle_convert(
    ctx: &AppContext,
    paths: Vec<PathBuf>,
    output: Option<PathBuf>,
    stdout: bool,
    link: bool,
) -> Result<()> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let result = ctx.api.convert_paths(&paths)?;
    if let Some(stats) = &result.stats {
        info!(
            files = stats.files_processed,
            failed = stats.failed.len(),
            articles = stats.articles_converted,
            "conversion finished"
        );
    }

    if stdout {
        for message in &result.messages {
            eprintln!("{}", message.content);
        }
        if let Some(stats) = &result.stats {
            print_summary(stats, true);
        }
        match (&result.document, &result.stats) {
            (Some(document), Some(stats)) if !stats.is_empty() => println!("{}", document),
            _ => eprintln!("{}", NOTHING_TO_EXPORT),
        }
        return Ok(());
    }

    print_messages(&result.messages);
    if let Some(stats) = &result.stats {
        print_summary(stats, false);
    }
    println!();

    let delivered = if link {
        ctx.api.download_link(&result)?
    } else {
        ctx.api.export(&result, output)?
    };
    if let Some(link) = &delivered.link {
        println!("{}", link);
    }
    print_messages(&delivered.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
