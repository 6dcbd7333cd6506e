// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugdex - browse, search, and publish a plugin registry.
//!
//! This is the binary entry point.

mod browse;
mod build;
mod data;
mod list;
mod show;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use plugdex_config::PlugdexConfig;
use plugdex_core::{PlugdexError, SortKey};
use plugdex_fetch::HttpFetcher;

/// Plugdex - browse, search, and publish a plugin registry.
#[derive(Parser, Debug)]
#[command(name = "plugdex", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print plugins as cards or JSON.
    List {
        #[command(flatten)]
        view: ViewArgs,
        /// Output JSON for scripting.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// Print the details of one plugin.
    Show {
        /// Plugin id.
        id: String,
        /// Output JSON for scripting.
        #[arg(long)]
        json: bool,
    },
    /// Write the catalog as a static HTML page.
    Build {
        #[command(flatten)]
        view: ViewArgs,
        /// Output directory (defaults to `display.site_dir`).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Interactive terminal browser.
    Browse,
}

/// Search and sort options shared by `list` and `build`.
#[derive(Args, Debug, Clone, Default)]
struct ViewArgs {
    /// Show only plugins matching this term.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
    /// Sort by `name`, `version`, or `author` (anything else keeps registry order).
    #[arg(long, value_name = "KEY")]
    sort: Option<String>,
}

impl ViewArgs {
    fn sort_key(&self) -> Option<SortKey> {
        self.sort.as_deref().map(SortKey::from_param)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => plugdex_config::load_and_validate_path(path),
        None => plugdex_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            plugdex_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    // The terminal browser owns the screen; keep log lines to warnings.
    let level = match cli.command {
        Some(Commands::Browse) => "warn",
        _ => config.log.level.as_str(),
    };
    init_tracing(level);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("plugdex: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Option<Commands>, config: &PlugdexConfig) -> Result<(), PlugdexError> {
    let Some(command) = command else {
        println!("plugdex: use --help for available commands");
        return Ok(());
    };

    let fetcher = HttpFetcher::new(Duration::from_secs(config.sources.timeout_secs))?;

    match command {
        Commands::List { view, json, plain } => {
            list::run_list(&fetcher, config, view.search.as_deref(), view.sort_key(), json, plain)
                .await
        }
        Commands::Show { id, json } => show::run_show(&fetcher, config, &id, json).await,
        Commands::Build { view, out } => {
            let out = out.unwrap_or_else(|| PathBuf::from(&config.display.site_dir));
            let path =
                build::run_build(&fetcher, config, &out, view.search.as_deref(), view.sort_key())
                    .await?;
            println!("wrote {}", path.display());
            Ok(())
        }
        Commands::Browse => {
            let loaded = data::load_catalog(&fetcher, config, None, None).await?;
            browse::run(loaded, config)
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence when set. Output goes to stderr so stdout
/// stays clean for `--json`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plugdex={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
