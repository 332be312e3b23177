mod args;
mod config;
mod global;
mod handlers;
mod logging;

use clap::{Parser, Subcommand};
use convkit::ConvertError;
use std::process::ExitCode;

use args::{
    BinaryArgs, BitsArgs, ConfigAction, HexArgs, IntArgs, LinesArgs, SizeArgs, SpanArgs, TextArgs,
};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "convkit")]
#[command(version)]
#[command(about = "Convert between bytes, bits, hex, fixed-width integers and charset text", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert bytes to a bit string (or back with --decode)
    Bits(BitsArgs),

    /// Convert bytes to uppercase hex (or back with --decode)
    Hex(HexArgs),

    /// Pack or unpack fixed-width integers
    Int(IntArgs),

    /// Convert decimal integers of any size to binary (or back with --decode)
    Binary(BinaryArgs),

    /// Transcode text between charsets
    Text(TextArgs),

    /// Split input into lines
    Lines(LinesArgs),

    /// Format or convert memory sizes
    Size(SizeArgs),

    /// Format or convert time spans
    Span(SpanArgs),

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Runs the CLI and reports any error on stderr.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let use_color = cli.global.use_color();

    logging::init(cli.global.log_level(), use_color);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Conversion errors render their own header and hint
            match e.downcast_ref::<ConvertError>() {
                Some(err) => eprintln!("{}", err.render(use_color)),
                None => eprintln!("Error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.global)?;
    tracing::debug!(settings = ?config.settings, "configuration loaded");

    match cli.command {
        Commands::Bits(args) => handlers::bits::handle(args, &cli.global),
        Commands::Hex(args) => handlers::hex::handle(args, &cli.global),
        Commands::Int(args) => handlers::int::handle(args, &config),
        Commands::Binary(args) => handlers::binary::handle(args),
        Commands::Text(args) => handlers::text::handle(args, &cli.global, &config),
        Commands::Lines(args) => handlers::lines::handle(args, &cli.global, &config),
        Commands::Size(args) => handlers::size::handle(args),
        Commands::Span(args) => handlers::span::handle(args, &config),
        Commands::Config { action } => handlers::config::handle(action, &config),
    }
}
