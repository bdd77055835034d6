//! CLI frontend for daily zodiac fortunes.

mod clipboard;
mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use horo_app::AppConfig;

use commands::Context;
use commands::share::ShareTarget;

#[derive(Parser)]
#[command(
    name = "horo",
    about = "Horo: today's fortune for your zodiac sign",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Preference file holding the last selected sign
    #[arg(long, global = true, env = "HORO_STORE")]
    store: Option<PathBuf>,

    /// Page URL included in share text
    #[arg(long, global = true, env = "HORO_PAGE_URL")]
    url: Option<String>,

    /// Host of the QQ share widget
    #[arg(long, global = true, env = "HORO_QQ_ENDPOINT")]
    qq_endpoint: Option<String>,

    /// Day to read fortunes for, as YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    date: Option<String>,

    /// Write copied text to this file instead of the system clipboard
    #[arg(long, global = true, env = "HORO_CLIPBOARD_FILE")]
    clipboard_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the twelve signs
    Signs,

    /// Show today's fortune and remember the sign
    Show {
        /// Sign identifier or name (default: the remembered sign)
        sign: Option<String>,

        /// Print the fortune as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the remembered sign
    Current,

    /// Share today's fortune
    Share {
        /// Share target
        #[arg(value_enum)]
        target: ShareTarget,

        /// Sign identifier or name (default: the remembered sign)
        sign: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::default();
    if let Some(url) = cli.url {
        config = config.with_page_url(url);
    }
    if let Some(endpoint) = cli.qq_endpoint.as_deref() {
        config = config.with_qq_endpoint(endpoint);
    }

    let ctx = Context {
        config,
        store_path: cli.store.unwrap_or_else(commands::default_store_path),
        date: cli.date,
        clipboard_file: cli.clipboard_file,
    };

    let result = match cli.command {
        Commands::Signs => commands::signs::run(),
        Commands::Show { sign, json } => commands::show::run(&ctx, sign.as_deref(), json),
        Commands::Current => commands::current::run(&ctx),
        Commands::Share { target, sign } => commands::share::run(&ctx, target, sign.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
