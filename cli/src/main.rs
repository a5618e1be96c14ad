//! desk-pager CLI
//!
//! Paginates a JSON dataset exported from the dashboard the same way the
//! list views do.
//!
//! ```sh
//! # Third page of orders, default page size from config
//! desk-pager page orders.json --page 3
//!
//! # Machine-readable output
//! desk-pager page customers.json --page-size 20 --json
//!
//! # Validate config without doing anything else
//! desk-pager check --config ./config.toml
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{error, info};

use desk_pager::config::{resolve_config_path, AppConfig};
use desk_pager::domain::pagination::{PageLink, PaginationConfig, Paginator};
use desk_pager::infrastructure::dataset::load_records;
use desk_pager::shared::init_tracing;

/// desk-pager: client-side pagination for dashboard datasets.
#[derive(Parser, Debug)]
#[command(
    name = "desk-pager",
    version,
    about = "Paginate dashboard datasets from the command line",
    long_about = "Renders one page of a JSON array with the same clamping and \
                  page-window rules as the dashboard list views.\n\n\
                  Default config: ~/.config/desk-pager/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "DESK_PAGER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of a JSON array.
    Page {
        /// JSON file containing an array of records.
        file: PathBuf,

        /// Page to show. Out-of-range values are clamped.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Items per page. Defaults to `pagination.default_page_size`.
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,

        /// Emit the page as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file and exit.
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = resolve_config_path(cli.config.clone());
    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) if e.is_not_found() && !matches!(cli.command, Command::Check) => {
            info!("No config at {}, using defaults", config_path.display());
        }
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if matches!(cli.command, Command::Check) {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    match cli.command {
        Command::Check => {
            println!("Configuration is valid");
            println!("   Config file       : {}", config_path.display());
            println!("   Default page size : {}", config.pagination.default_page_size);
            println!("   Page size options : {:?}", config.pagination.page_size_options);
            println!("   Sibling pages     : {}", config.pagination.sibling_count);
            println!("   Features          : {:?}", config.features.enabled());
            println!("   Log level         : {}", config.logging.level);
            Ok(())
        }
        Command::Page {
            file,
            page,
            page_size,
            json,
        } => {
            let records: Vec<Value> = load_records(&file)?;
            let settings = &config.pagination;
            let pager_config = match page_size {
                Some(size) => PaginationConfig::new(size),
                None => settings.paginator_config(),
            };

            let mut pager = Paginator::new(pager_config.with_initial_page(page));
            let view = pager.paginate(&records);
            let links = view.page_links(settings.sibling_count as usize);

            if json {
                let out = json!({ "page": view.snapshot(), "links": links });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            for (offset, item) in view.items().iter().enumerate() {
                println!("{:>6}  {}", view.start_item() + offset, item);
            }
            println!();
            println!("{}", render_links(&links, view.current_page()));
            println!("{}", view.summary());
            Ok(())
        }
    }
}

/// `1 … 4 [5] 6 … 10`
fn render_links(links: &[PageLink], current: usize) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page(n) if *n == current => format!("[{n}]"),
            PageLink::Page(n) => n.to_string(),
            PageLink::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
