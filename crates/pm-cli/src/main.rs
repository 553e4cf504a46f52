//! CLI entry point for prodman, the product catalog manager.
//!
//! This binary opens the interactive catalog browser, prints pages of the
//! catalog for scripts, and exposes the page window calculator directly.
//!
//! # Usage
//!
//! ```bash
//! prodman [OPTIONS] [COMMAND]
//!
//! # Interactive TUI (the default when no command is given)
//! prodman browse --data data/products.json
//!
//! # Second page of products whose name contains "lamp", as CSV
//! prodman list --search lamp --page 2 --format csv
//!
//! # Page controls for page 5 of 10
//! prodman pages 5 10
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::fs::File;
use std::io::Write;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{WrapErr, eyre};
use pm_core::format::{format_date, format_inr, status_label, truncate};
use pm_core::pagination::{clamp_page, page_range};
use pm_core::{Catalog, Config, PageToken, PageWindow, Product, compute_window, total_pages};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Catalog file used when neither `--data` nor `PRODMAN_DATA` is set.
const DEFAULT_DATA_PATH: &str = "data/products.json";

/// Log file name, created in the temp dir while the TUI owns the screen.
const LOG_FILE_NAME: &str = "prodman.log";

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Product catalog manager.
///
/// Browse, search and edit a product catalog in the terminal, or print pages
/// of it for scripts.
#[derive(Parser)]
#[command(name = "prodman", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute. Defaults to `browse`.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "PRODMAN_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Path to the JSON product catalog.
    ///
    /// Defaults to `./data/products.json` if not specified.
    #[arg(short, long, global = true, env = "PRODMAN_DATA")]
    data: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse and edit the catalog in an interactive TUI.
    Browse,

    /// Print one page of the catalog.
    List {
        /// Only show products whose name contains this text.
        #[arg(short, long)]
        search: Option<String>,

        /// Page to print (1-based).
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the page controls for a position in a paged list.
    Pages {
        /// Current page (1-based).
        current: usize,

        /// Total number of pages.
        total: usize,
    },
}

/// Output format for `list`.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Aligned columns.
    Table,
    /// JSON format.
    Json,
    /// CSV format.
    Csv,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
///
/// Logs go to stderr, or to `log_file` when given so they stay off the TUI.
fn init_tracing(verbose: bool, no_color: bool, log_file: Option<File>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},mio=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Opens the TUI log file in the temp dir, truncating earlier runs.
fn open_log_file() -> color_eyre::Result<File> {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    File::create(&path).wrap_err_with(|| format!("Failed to open log file {}", path.display()))
}

/// Loads the configuration file, or the defaults when none is given.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed, or out of range.
fn load_config(path: Option<&Utf8Path>) -> color_eyre::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    Config::from_json_file(path).wrap_err_with(|| format!("Invalid configuration in {path}"))
}

/// Loads the product catalog.
///
/// # Errors
///
/// Returns an error if the file does not exist or is not a product array.
fn load_catalog(path: Option<&Utf8Path>) -> color_eyre::Result<Catalog> {
    let path = path.unwrap_or_else(|| Utf8Path::new(DEFAULT_DATA_PATH));

    if !path.exists() {
        return Err(eyre!("Catalog file does not exist: {}", path));
    }
    if !path.is_file() {
        return Err(eyre!("Catalog path is not a file: {}", path));
    }

    Catalog::from_json_file(path).wrap_err_with(|| format!("Failed to load catalog {path}"))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive TUI.
///
/// # Errors
///
/// Returns an error if the TUI fails.
async fn run_browse(config: Config, catalog: Catalog, no_color: bool) -> color_eyre::Result<()> {
    info!(products = catalog.len(), "Starting TUI");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = pm_tui::run(config, catalog, no_color) => {
                result.map_err(|e| eyre!("TUI error: {}", e))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        pm_tui::run(config, catalog, no_color)
            .await
            .map_err(|e| eyre!("TUI error: {}", e))?;
    }

    Ok(())
}

/// Prints one page of the filtered catalog.
///
/// # Errors
///
/// Returns an error if the page is zero or writing fails.
fn run_list(
    config: &Config,
    catalog: &Catalog,
    search: Option<&str>,
    page: usize,
    format: OutputFormat,
) -> color_eyre::Result<()> {
    if page == 0 {
        return Err(eyre!("--page must be at least 1"));
    }

    let listing = Listing::new(
        catalog,
        search.unwrap_or_default(),
        page,
        config.catalog.items_per_page,
    );
    if listing.page != page && listing.total_pages > 0 {
        warn!(
            requested = page,
            shown = listing.page,
            "Page out of range, showing nearest page"
        );
    }

    let content = match format {
        OutputFormat::Table => render_table(&listing),
        OutputFormat::Json => render_json(&listing)?,
        OutputFormat::Csv => render_csv(&listing),
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{content}")?;
    Ok(())
}

/// Prints the page window for `current` of `total`.
///
/// # Errors
///
/// Returns an error if `current` is zero or writing fails.
fn run_pages(current: usize, total: usize) -> color_eyre::Result<()> {
    if current == 0 {
        return Err(eyre!("CURRENT must be at least 1"));
    }

    let window = compute_window(current, total);
    if window.is_empty() {
        info!(total, "Fewer than two pages, no controls to show");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", window_line(&window, None))?;
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// One page of the filtered catalog, ready to print.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Listing<'a> {
    /// Page shown, after clamping.
    page: usize,
    total_pages: usize,
    /// Products matching the search, across all pages.
    total_items: usize,
    window: PageWindow,
    #[serde(skip)]
    first_index: usize,
    products: Vec<&'a Product>,
}

impl<'a> Listing<'a> {
    fn new(catalog: &'a Catalog, query: &str, page: usize, per_page: usize) -> Self {
        let matches = catalog.matching_indices(query);
        let total = total_pages(matches.len(), per_page);
        let page = clamp_page(page, total);
        let range = page_range(page, per_page, matches.len());
        let first_index = range.start;

        let all = catalog.products();
        let products = matches[range]
            .iter()
            .filter_map(|&idx| all.get(idx))
            .collect();

        Self {
            page,
            total_pages: total,
            total_items: matches.len(),
            window: compute_window(page, total),
            first_index,
            products,
        }
    }
}

/// Joins window tokens with spaces, bracketing `current` if given.
fn window_line(window: &[PageToken], current: Option<usize>) -> String {
    window
        .iter()
        .map(|token| match *token {
            PageToken::Page(page) if Some(page) == current => format!("[{page}]"),
            PageToken::Page(page) => page.to_string(),
            PageToken::Ellipsis => "…".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a listing as aligned columns followed by a page summary.
fn render_table(listing: &Listing<'_>) -> String {
    use std::fmt::Write;

    if listing.products.is_empty() {
        return String::from("No products found\n");
    }

    let mut output = format!(
        "{:<5}{:<28}{:<13}{:<12}{:<7}{:<10}{}\n",
        "ID", "NAME", "CATEGORY", "PRICE", "STOCK", "STATUS", "CREATED"
    );

    for product in &listing.products {
        let _ = writeln!(
            output,
            "{:<5}{:<28}{:<13}{:<12}{:<7}{:<10}{}",
            product.id.to_string(),
            truncate(&product.name, 26),
            product.category.label(),
            format_inr(product.price),
            product.stock,
            status_label(product.is_active),
            format_date(&product.created_at)
        );
    }

    let _ = write!(
        output,
        "\nShowing {}-{} of {} │ Page {} of {}",
        listing.first_index + 1,
        listing.first_index + listing.products.len(),
        listing.total_items,
        listing.page,
        listing.total_pages
    );
    if !listing.window.is_empty() {
        let _ = write!(output, ": {}", window_line(&listing.window, Some(listing.page)));
    }
    output.push('\n');
    output
}

/// Renders a listing as pretty-printed JSON.
fn render_json(listing: &Listing<'_>) -> color_eyre::Result<String> {
    let mut json = serde_json::to_string_pretty(listing)
        .map_err(|e| eyre!("Failed to serialize JSON: {}", e))?;
    json.push('\n');
    Ok(json)
}

/// Renders a listing as CSV with a header row.
fn render_csv(listing: &Listing<'_>) -> String {
    use std::fmt::Write;

    let mut output = String::from("id,name,category,price,stock,status,created_at,tags\n");

    for product in &listing.products {
        let name = escape_csv(&product.name);
        let tags = escape_csv(&product.tags.join(";"));

        // Use write! to avoid extra allocation from format!
        let _ = writeln!(
            output,
            "{},{name},{},{},{},{},{},{tags}",
            product.id,
            product.category.label(),
            product.price,
            product.stock,
            status_label(product.is_active),
            product.created_at.to_rfc3339(),
        );
    }

    output
}

/// Escapes a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_owned()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);

    // 3. Initialize tracing; the TUI owns the terminal, so log to a file
    let log_file = match command {
        Commands::Browse => Some(open_log_file()?),
        Commands::List { .. } | Commands::Pages { .. } => None,
    };
    init_tracing(cli.verbose, cli.no_color, log_file);

    // 4. Route to appropriate command
    match command {
        Commands::Browse => {
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(cli.data.as_deref())?;
            run_browse(config, catalog, cli.no_color).await
        }
        Commands::List {
            search,
            page,
            format,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let catalog = load_catalog(cli.data.as_deref())?;
            run_list(&config, &catalog, search.as_deref(), page, format)
        }
        Commands::Pages { current, total } => run_pages(current, total),
    }
}
