//! # letras CLI
//!
//! Thin command-line shell over letras-core.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  argv ──► clap ──► ConversionRequest ──► NumberFormatter ──► stdout    │
//! │             │                                   ▲                       │
//! │             └── env (LETRAS_*) ──► FormatterConfig                      │
//! │                                                                         │
//! │  errors ──► "error: <message>" on stderr, exit status 1                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! letras words 1234.56
//! letras --apocope words 21
//! letras money 10.50 --currency soles --cents centimos
//! letras invoice 121.34 --currency SOLES
//! letras --json invoice 100
//! letras demo
//! ```

mod demo;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use letras_core::{
    parse_amount, ConversionRequest, FormatterConfig, NumberFormatter, OutputMode,
    DEFAULT_DECIMALS,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "letras")]
#[command(version)]
#[command(about = "Convert numbers to Spanish words (RAE)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Shorten trailing UNO to UN (not applied to invoices)
    #[arg(long, global = true)]
    apocope: bool,

    /// Word joining integer and fractional parts
    #[arg(long, global = true)]
    connector: Option<String>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plain words: 1234.56 → MIL DOSCIENTOS TREINTA Y CUATRO CON CINCUENTA Y SEIS
    Words {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Fractional digits to keep (0-10)
        #[arg(short, long, default_value_t = DEFAULT_DECIMALS)]
        decimals: u32,
    },

    /// Currency phrasing: 10.50 → DIEZ SOLES CON CINCUENTA CENTIMOS
    Money {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Fractional digits to keep (0-10)
        #[arg(short, long, default_value_t = DEFAULT_DECIMALS)]
        decimals: u32,

        /// Currency name
        #[arg(long, env = "LETRAS_CURRENCY", default_value = "SOLES")]
        currency: String,

        /// Cents unit name
        #[arg(long, env = "LETRAS_CENTS", default_value = "CENTIMOS")]
        cents: String,
    },

    /// Invoice phrasing: 121.34 → CIENTO VEINTIUNO Y 34/100 SOLES
    Invoice {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Fractional digits to keep (0-10)
        #[arg(short, long, default_value_t = DEFAULT_DECIMALS)]
        decimals: u32,

        /// Currency name
        #[arg(long, env = "LETRAS_CURRENCY", default_value = "SOLES")]
        currency: String,
    },

    /// Print a table of sample conversions
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(FormatterConfig::from_env()?, &cli);
    debug!(connector = %config.connector, apocope = config.apocope, "Configuration loaded");

    let formatter = NumberFormatter::with_config(config);

    let Some(request) = build_request(&cli.command)? else {
        demo::print(&formatter)?;
        return Ok(());
    };

    let response = formatter.convert(&request)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.text);
    }

    Ok(())
}

/// Command-line flags take precedence over the environment.
fn resolve_config(mut config: FormatterConfig, cli: &Cli) -> FormatterConfig {
    if cli.apocope {
        config.apocope = true;
    }
    if let Some(connector) = &cli.connector {
        config.connector = connector.clone();
    }
    config
}

/// Turns a subcommand into a request. `None` for `demo`.
fn build_request(command: &Commands) -> letras_core::ConversionResult<Option<ConversionRequest>> {
    let request = match command {
        Commands::Words { value, decimals } => {
            ConversionRequest::new(parse_amount(value)?, OutputMode::Words).with_decimals(*decimals)
        }
        Commands::Money {
            value,
            decimals,
            currency,
            cents,
        } => ConversionRequest::new(parse_amount(value)?, OutputMode::Money)
            .with_decimals(*decimals)
            .with_currency(currency.as_str())
            .with_cents(cents.as_str()),
        Commands::Invoice {
            value,
            decimals,
            currency,
        } => ConversionRequest::new(parse_amount(value)?, OutputMode::Invoice)
            .with_decimals(*decimals)
            .with_currency(currency.as_str()),
        Commands::Demo => return Ok(None),
    };

    Ok(Some(request))
}

// =============================================================================
// Unit Tests
// =============================================================================
