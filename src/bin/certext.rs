//! certext - X.509 Certificate Extension Inspection CLI Tool

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::{Parser, Subcommand};
use colored::Colorize;

use certext::ext::{render, BasicConstraints, ExtendedKeyUsage, Extension};
use certext::Error;

use std::fs;

#[derive(Parser)]
#[command(name = "certext")]
#[command(about = "X.509 certificate extension inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a DER-encoded extension envelope
    Inspect {
        /// Path to a file containing the DER bytes
        file: Option<String>,

        /// Base64-encoded DER, instead of a file
        #[arg(long)]
        base64: Option<String>,
    },

    /// Decode a raw Basic Constraints extension value
    BasicConstraints {
        /// Path to a file containing the DER bytes
        file: Option<String>,

        /// Base64-encoded DER, instead of a file
        #[arg(long)]
        base64: Option<String>,
    },

    /// Decode a raw Extended Key Usage extension value
    Eku {
        /// Path to a file containing the DER bytes
        file: Option<String>,

        /// Base64-encoded DER, instead of a file
        #[arg(long)]
        base64: Option<String>,
    },

    /// Show version information
    Version,
}

fn read_input(file: Option<String>, b64: Option<String>) -> Result<Vec<u8>, Error> {
    match (file, b64) {
        (Some(path), None) => {
            fs::read(&path).map_err(|e| Error::Io(format!("{path}: {e}")))
        }
        (None, Some(b64)) => BASE64
            .decode(b64.as_bytes())
            .map_err(|e| Error::InvalidInput(format!("bad base64: {e}"))),
        _ => Err(Error::InvalidInput(
            "provide exactly one of <file> or --base64".to_string(),
        )),
    }
}

fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Inspect { file, base64 } => {
            let der = read_input(file, base64)?;
            let ext = Extension::from_der(&der)?;

            println!("{} {}", "OID:".cyan().bold(), ext.oid());
            println!("{} {}", "Critical:".cyan().bold(), ext.is_critical());
            println!("{} {}", "Value:".cyan().bold(), render(&ext)?);
        }

        Commands::BasicConstraints { file, base64 } => {
            let der = read_input(file, base64)?;
            let bc = BasicConstraints::from_der(&der)?;

            println!("{bc}");
        }

        Commands::Eku { file, base64 } => {
            let der = read_input(file, base64)?;
            let eku = ExtendedKeyUsage::from_der(&der)?;

            println!("{eku}");
        }

        Commands::Version => {
            println!("certext v{}", env!("CARGO_PKG_VERSION"));
            println!("X.509 Certificate Extension Toolkit");
            println!("\nSupported extensions:");
            println!("  • Basic Constraints (2.5.29.19)");
            println!("  • Extended Key Usage (2.5.29.37)");
            println!("  • Generic OID/value envelopes");
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
