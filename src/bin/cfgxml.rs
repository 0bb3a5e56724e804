//! Command-line converter from the constant/dictionary config language to XML
//!
//! Usage:
//!   cfgxml <file>                      - write pretty XML to output.xml
//!   cfgxml <file> -o out.xml --compact - write compact XML to out.xml
//!   cfgxml <file> --format json --stdout

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use cfgxml::export::{self, ExportFormat, XmlStyle};
use cfgxml::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Xml,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cfgxml", version, about = "Transform a custom config language to XML.")]
struct Args {
    /// Path to the input file.
    file: PathBuf,

    /// Where to write the result
    #[arg(short, long, default_value = "output.xml")]
    output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Xml)]
    format: Format,

    /// Skip the XML declaration and indentation
    #[arg(long)]
    compact: bool,

    /// Print to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let format = match args.format {
        Format::Json => ExportFormat::Json,
        Format::Xml if args.compact => ExportFormat::Xml(XmlStyle::Compact),
        Format::Xml => ExportFormat::Xml(XmlStyle::Pretty),
    };
    debug!(file = %args.file.display(), ?format, "converting");

    let rendered = export::export_file(&args.file, format)?;

    if args.stdout {
        println!("{}", rendered);
        return Ok(());
    }

    fs::write(&args.output, rendered).map_err(|e| ConfigError::FileError {
        message: format!("Failed to write output: {}", e),
        path: args.output.to_string_lossy().to_string(),
        hint: None,
        code: Some(302),
    })?;

    let label = match args.format {
        Format::Xml => "XML",
        Format::Json => "JSON",
    };
    info!(output = %args.output.display(), "output written");
    println!("{} has been written to {}", label, args.output.display());
    Ok(())
}
