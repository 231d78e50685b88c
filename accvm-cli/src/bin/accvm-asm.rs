use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use accvm_assembler::assemble;
use accvm_cli::{init_tracing, write_json_pretty};

/// Assemble ACCVM source into a flat binary and a JSON trace.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Assembly source file (`MNEMONIC OPERAND` per line)
    source: PathBuf,
    /// Destination for the binary program
    binary: PathBuf,
    /// Destination for the JSON log of assembled instructions
    log: PathBuf,
    /// Log every encoded instruction
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let source = fs::read_to_string(&args.source)
        .with_context(|| format!("reading {}", args.source.display()))?;

    // Nothing is written unless the whole source assembles
    let assembly = assemble(&source)
        .with_context(|| format!("assembling {}", args.source.display()))?;

    fs::write(&args.binary, assembly.to_bytes())
        .with_context(|| format!("writing {}", args.binary.display()))?;
    write_json_pretty(&args.log, &assembly.log)?;
    info!(
        words = assembly.len(),
        binary = %args.binary.display(),
        log = %args.log.display(),
        "assembly written"
    );

    println!(
        "Assembly completed. Binary saved to '{}'. Log saved to '{}'.",
        args.binary.display(),
        args.log.display()
    );
    Ok(())
}
