//! gridrange - normalize, convert and measure spreadsheet references

mod config;
mod error;
mod report;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use gridrange_core::Worksheet;
use gridrange_engine::{Coordinate, NotationKind};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: gridrange [OPTIONS] <REFERENCE>...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <REFERENCE>...            A1 (B2:D10, C:D, 3:5) or R1C1 (R2C2:R10C4, R[-1]C) references");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --r1c1                    Print references in R1C1 notation");
    eprintln!("  --a1                      Print references in A1 notation (default)");
    eprintln!("  --absolute                Mark rows and columns absolute ($B$2, R2C2)");
    eprintln!("  --origin <CELL>           Current cell for relative R1C1 references");
    eprintln!("  --config <FILE>           Read settings from FILE instead of the user config");
    eprintln!("  --no-config               Ignore the user config");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Set GRIDRANGE_LOG (e.g. GRIDRANGE_LOG=debug) to enable logging on stderr.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("GRIDRANGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let mut references: Vec<String> = Vec::new();
    let mut notation: Option<NotationKind> = None;
    let mut absolute = false;
    let mut origin: Option<String> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut no_config = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--r1c1" => notation = Some(NotationKind::R1C1),
            "--a1" => notation = Some(NotationKind::A1),
            "--absolute" => absolute = true,
            "--no-config" => no_config = true,
            "--origin" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --origin requires a cell reference");
                    std::process::exit(1);
                }
                origin = Some(args[i].to_string());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => references.push(args[i].to_string()),
        }
        i += 1;
    }

    if references.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let options = match build_options(config_file, no_config, notation, absolute, origin.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for reference in &references {
        match report::describe(&options.sheet, reference, &options.report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}: {}", reference, e);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

struct RunOptions {
    sheet: Worksheet,
    report: report::Options,
}

fn build_options(
    config_file: Option<PathBuf>,
    no_config: bool,
    notation: Option<NotationKind>,
    absolute: bool,
    origin: Option<&str>,
) -> anyhow::Result<RunOptions> {
    let config = if no_config {
        config::Config::default()
    } else {
        config::load_config(config_file.as_deref()).context("failed to load config")?
    };

    let mut output = config.output;
    if let Some(kind) = notation {
        output.notation = kind;
    }
    output.absolute |= absolute;

    let origin = origin
        .map(|text| text.parse::<Coordinate>())
        .transpose()
        .context("invalid --origin")?;
    let sheet = Worksheet::with_config("cli", config.grid).context("invalid grid settings")?;
    if let Some(origin) = origin {
        sheet.get_cell(origin.row(), origin.col()).context("--origin is outside the grid")?;
    }

    Ok(RunOptions {
        sheet,
        report: report::Options {
            notation: output.notation(),
            origin,
        },
    })
}
