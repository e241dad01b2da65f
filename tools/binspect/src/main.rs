//! binspect - Binary File Inspector
//!
//! Decodes a little-endian binary file field by field, using a layout from a
//! file, the environment and/or `--field` flags.

mod config;
mod decode;

use std::path::PathBuf;

use anyhow::{Context, Result};
use binstream::BinaryReader;
use clap::Parser;
use colored::*;
use tracing::{debug, info};

use crate::config::{FieldSpec, Layout};
use crate::decode::{decode_fields, DecodedField};

#[derive(Parser)]
#[command(name = "binspect")]
#[command(about = "Decode little-endian binary files with a field layout")]
#[command(long_about = "Decode little-endian binary files with a field layout

Field specs:
  name:TYPE            one scalar (i8 u8 i16 u16 i32 u32 f32 f64 i64 u64)
  name:TYPE[COUNT]     array of COUNT scalars
  name:string[LEN]     LEN bytes of NUL-terminated UTF-8
  name:bytes[LEN]      LEN raw bytes, printed as hex
  name:skip[LEN]       skip LEN bytes

Layout files may be YAML, TOML or JSON. BINSPECT_OFFSET overrides the
file's offset; --offset overrides both. --field entries are appended after
the file's fields.")]
struct Cli {
    /// Binary file to decode
    file: PathBuf,

    /// Layout file (.yaml, .yml, .toml or .json)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Start offset in bytes
    #[arg(short, long)]
    offset: Option<usize>,

    /// Field spec, repeatable (see above)
    #[arg(short, long = "field", value_name = "SPEC")]
    fields: Vec<FieldSpec>,

    /// Print a JSON array instead of one line per field
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    // Initialize logging (RUST_LOG wins over --verbose)
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut layout = Layout::load(cli.layout.as_deref()).context("Failed to load layout")?;
    layout.apply_overrides(cli.offset, cli.fields);
    debug!(
        offset = layout.offset,
        fields = layout.fields.len(),
        "Layout resolved"
    );

    let data = std::fs::read(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    info!("Loaded {} ({} bytes)", cli.file.display(), data.len());

    let mut reader = BinaryReader::with_offset(&data, layout.offset)
        .with_context(|| format!("Start offset {} is outside the file", layout.offset))?;
    let decoded = decode_fields(&mut reader, &layout.fields)?;

    if cli.json {
        print_json(&decoded)?;
    } else {
        print_fields(&decoded);
    }

    info!(
        "Decoded {} fields, {} bytes remaining",
        decoded.len(),
        reader.remaining()
    );
    Ok(())
}

fn print_fields(decoded: &[DecodedField]) {
    let width = decoded.iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in decoded {
        println!(
            "{} {} {} = {}",
            format!("@{:#06x}", field.offset).bright_black(),
            format!("{:<width$}", field.name, width = width).bright_cyan(),
            field.kind.yellow(),
            field.value
        );
    }
}

fn print_json(decoded: &[DecodedField]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(decoded)?);
    Ok(())
}
