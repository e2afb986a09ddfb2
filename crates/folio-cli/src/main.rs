use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio site core with a terminal preview")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page content file (TOML or JSON), overriding the configured one
    #[arg(short = 'c', long = "content", global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal preview
    Run,
    /// Report the active nav target for a scroll position
    Probe {
        #[arg(long)]
        scroll_y: f64,
        #[arg(long)]
        viewport_height: f64,
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// Section as `tag:top:height`; repeat for each section.
        /// Defaults to the page's sections, one viewport tall each.
        #[arg(long = "section", value_name = "TAG:TOP:HEIGHT")]
        sections: Vec<String>,
    },
    /// Print card roles and poses for a carousel state
    Carousel {
        #[arg(long)]
        items: usize,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        active: i64,
        /// Use the narrow-screen offsets
        #[arg(long)]
        compact: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check a contact form without sending it
    Validate {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Validate and deliver a contact message
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Log the message instead of delivering it
        #[arg(long)]
        dry_run: bool,
    },
    /// Summarize the page content
    Content {
        /// Dump the parsed content as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the default config and the demo content
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Route logs to a file while the preview owns the terminal, stderr otherwise
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::options().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.content {
        config.general.content_path = Some(path);
    }
    let config = Arc::new(config);

    let interactive = matches!(cli.command, None | Some(Commands::Run));
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Probe {
            scroll_y,
            viewport_height,
            width,
            sections,
        }) => commands::probe::run(&config, scroll_y, viewport_height, width, &sections),
        Some(Commands::Carousel {
            items,
            active,
            compact,
            json,
        }) => commands::carousel::run(items, active, compact, json),
        Some(Commands::Validate {
            name,
            email,
            message,
        }) => commands::validate::run(&config, name, email, message),
        Some(Commands::Send {
            name,
            email,
            message,
            dry_run,
        }) => commands::send::run(&config, name, email, message, dry_run).await,
        Some(Commands::Content { json }) => commands::content::run(&config, json),
        Some(Commands::Init { force }) => commands::init::run(&config, force),
    }
}
