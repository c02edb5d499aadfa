use anyhow::{Context, Result};
use bank_ocr::{
    render, DecodedEntry, EntryDecoder, OcrConfig, OutputFormat, DIGIT_GLYPHS, VERSION,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bank-ocr")]
#[command(about = "Read account numbers from scanned pipe-and-underscore entries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one entry (3 lines of 27 characters)
    Decode {
        /// File holding the entry, or "-" for stdin
        input: String,

        /// Output format (text, json, csv)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<String>,

        /// Reject rows that are not exactly 27 characters
        #[arg(long)]
        strict: bool,

        /// Character printed for unreadable digits (overrides config)
        #[arg(long)]
        placeholder: Option<char>,
    },

    /// Print the canonical digit glyphs
    Glyphs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Decode {
            input,
            format,
            config,
            strict,
            placeholder,
        } => run_decode(&input, &format, config.as_deref(), strict, placeholder),
        Commands::Glyphs => {
            run_glyphs();
            Ok(())
        }
    }
}

fn run_decode(
    input: &str,
    format: &str,
    config_path: Option<&str>,
    strict: bool,
    placeholder: Option<char>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let mut config = match config_path {
        Some(path) => OcrConfig::from_file(path)?,
        None => OcrConfig::default(),
    };
    if strict {
        config.strict_width = true;
    }
    if let Some(p) = placeholder {
        config.placeholder = p;
        config.validate()?;
    }

    info!(bank_ocr = VERSION, input, "decoding entry");

    let text = read_input(input)?;
    let decoder = EntryDecoder::new(config);
    let account = decoder
        .decode_text(&text)
        .with_context(|| format!("Failed to decode entry from {}", input))?;

    let entry = DecodedEntry::new(input, &account, decoder.config().placeholder);
    println!("{}", render(&entry, format)?);

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read entry from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to open file: {}", input))
    }
}

fn run_glyphs() {
    for (digit, glyph) in DIGIT_GLYPHS.iter().enumerate() {
        println!("{}:", digit);
        println!("{}", glyph);
        println!();
    }
}
