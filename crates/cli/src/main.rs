//! Recipe Costing CLI - cost sheets, shopping lists and journal summaries.
//!
//! # Usage
//!
//! ```bash
//! # Convert between units
//! rc-cli convert 2 Kg Gram
//!
//! # Cost sheet for every recipe in the catalog
//! rc-cli cost --catalog bakery.yaml
//!
//! # Shopping list for a production plan
//! rc-cli shop --plan weekend.yaml
//!
//! # Income/expense summary for March
//! rc-cli ledger --journal journal.yaml --from 2024-03-01 --to 2024-03-31
//!
//! # Check a catalog for broken references
//! rc-cli validate
//! ```
//!
//! # Commands
//!
//! - `convert` - Convert a quantity between units
//! - `cost` - Recipe cost and pricing sheet
//! - `shop` - Consolidated shopping list for a production plan
//! - `ledger` - Income/expense journal summary
//! - `validate` - Validate a catalog
//!
//! Results go to stdout; logs go to stderr (`RUST_LOG` controls the level).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use recipe_costing_core::{DateWindow, PlanLine, generate_shopping_list, ledger, resolve_plan};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod loader;
mod output;

use config::CliConfig;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(author, version, about = "Recipe costing tools")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quantity between units
    Convert {
        /// Quantity to convert
        quantity: Decimal,
        /// Unit to convert from (e.g. Kg, Sdm, Pcs)
        from: String,
        /// Unit to convert to
        to: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Show recipe cost sheets
    Cost {
        /// Catalog file (defaults to `RECIPE_CATALOG`)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Recipe ID or name (all recipes when omitted)
        #[arg(short, long)]
        recipe: Option<String>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Build a shopping list for a production plan
    Shop {
        /// Production plan file
        #[arg(short, long)]
        plan: PathBuf,

        /// Catalog file (defaults to `RECIPE_CATALOG`)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Summarize an income/expense journal
    Ledger {
        /// Journal file
        #[arg(short, long)]
        journal: PathBuf,

        /// First day included (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day included (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Validate a catalog
    Validate {
        /// Catalog file (defaults to `RECIPE_CATALOG`)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before the log filter reads RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.log_json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let currency = config.currency;

    let rendered = match cli.command {
        Commands::Convert {
            quantity,
            from,
            to,
            format,
        } => {
            let conversion = commands::convert::convert(quantity, &from, &to)?;
            commands::convert::render(&conversion, format)?
        }
        Commands::Cost {
            catalog,
            recipe,
            format,
        } => {
            let catalog = loader::load_catalog(&config.catalog_or(catalog)).await?;
            let sheets = commands::cost::build_sheets(&catalog, recipe.as_deref())?;
            match format {
                OutputFormat::Text => commands::cost::render_text(&sheets, currency)?,
                OutputFormat::Json => output::to_json(&sheets)?,
            }
        }
        Commands::Shop {
            plan,
            catalog,
            format,
        } => {
            let catalog = loader::load_catalog(&config.catalog_or(catalog)).await?;
            let lines: Vec<PlanLine> = loader::read_yaml(&plan).await?;
            let entries = resolve_plan(&catalog, &lines)?;
            tracing::info!(entries = entries.len(), "Generating shopping list");

            let list = generate_shopping_list(&entries, &catalog);
            match format {
                OutputFormat::Text => commands::shop::render_text(&list, currency)?,
                OutputFormat::Json => output::to_json(&list)?,
            }
        }
        Commands::Ledger {
            journal,
            from,
            to,
            format,
        } => {
            let window = DateWindow::new(from, to)?;
            let journal = loader::load_journal(&journal).await?;
            let summary = ledger::summarize(&journal, Some(window));
            match format {
                OutputFormat::Text => commands::ledger::render_text(&summary, &window, currency)?,
                OutputFormat::Json => output::to_json(&summary)?,
            }
        }
        Commands::Validate { catalog } => {
            let catalog = loader::load_catalog(&config.catalog_or(catalog)).await?;
            commands::validate::summary(&catalog)
        }
    };

    output::write_stdout(&rendered)?;
    Ok(())
}
