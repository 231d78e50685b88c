//! Shared plumbing for the `accvm-asm` and `accvm-run` binaries
//!
//! The core crates hand back plain data (a trace, a memory slice); this
//! crate turns it into files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use num_bigint::BigUint;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Number, Value};
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Write `value` as JSON with four-space indentation
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut ser)
        .with_context(|| format!("writing JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Memory cells as a JSON array of exact integers
pub fn memory_to_json(cells: &[BigUint]) -> Result<Value> {
    let numbers = cells
        .iter()
        .map(|cell| {
            Number::from_str(&cell.to_string())
                .map(Value::Number)
                .with_context(|| format!("encoding {} as JSON", cell))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(numbers))
}
