use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tool_rental::config::{CatalogLoader, ToolCatalog};
use tool_rental::models::{RentalAgreement, RentalRequest};
use tool_rental::report::{format_currency, render_report};

/// Price a tool rental and print the rental agreement
#[derive(Parser, Debug)]
#[command(name = "tool-rental")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tool code (e.g. LADW, CHNS, JAKD, JAKR)
    #[arg(short, long, required_unless_present = "list_tools")]
    tool: Option<String>,

    /// Number of rental days
    #[arg(
        short,
        long,
        required_unless_present = "list_tools",
        allow_negative_numbers = true
    )]
    days: Option<i32>,

    /// Discount percent, 0 through 100
    #[arg(short = 'p', long, default_value_t = 0, allow_negative_numbers = true)]
    discount: i32,

    /// Checkout date as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    checkout: Option<NaiveDate>,

    /// Load the tool catalog from a YAML file instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List the tools in the catalog and exit
    #[arg(long)]
    list_tools: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<ToolCatalog, String> {
    match path {
        Some(path) => CatalogLoader::load(path).map_err(|e| e.to_string()),
        None => Ok(ToolCatalog::standard().clone()),
    }
}

fn print_tools(catalog: &ToolCatalog, format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Json => {
            let tools: Vec<_> = catalog.tools().collect();
            let json = serde_json::to_string_pretty(&tools).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!(
                "{:<6}{:<12}{:<8}{:>9}{:>9}{:>9}",
                "Code", "Type", "Brand", "Weekday", "Weekend", "Holiday"
            );
            for tool in catalog.tools() {
                println!(
                    "{:<6}{:<12}{:<8}{:>9}{:>9}{:>9}",
                    tool.code,
                    tool.tool_type,
                    tool.brand,
                    format_currency(tool.weekday_rate),
                    format_currency(tool.weekend_rate),
                    format_currency(tool.holiday_rate)
                );
            }
        }
    }
    Ok(())
}

fn print_agreement(agreement: &RentalAgreement, format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(agreement).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_report(agreement)),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), String> {
    let catalog = load_catalog(cli.catalog.as_ref())
        .map_err(|e| format!("Error loading catalog: {}", e))?;

    if cli.list_tools {
        return print_tools(&catalog, cli.format);
    }

    let (Some(tool), Some(days)) = (cli.tool.as_deref(), cli.days) else {
        return Err("Both --tool and --days are required".to_string());
    };
    let checkout = cli.checkout.unwrap_or_else(|| Local::now().date_naive());
    debug!(
        tool_code = tool,
        rental_days = days,
        discount_percent = cli.discount,
        checkout_date = %checkout,
        "Checking out"
    );

    let request = RentalRequest::new(tool, days, cli.discount, checkout);
    let agreement = RentalAgreement::build_with_catalog(&request, &catalog)
        .map_err(|e| format!("Error during checkout: {}", e))?;

    print_agreement(&agreement, cli.format)
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
