use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use accvm_cli::{init_tracing, memory_to_json, write_json_pretty};
use accvm_runtime::VM;
use accvm_spec::{MachineConfig, DEFAULT_MEMORY_SIZE};

/// Execute an ACCVM binary and dump a slice of the final memory as JSON.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Binary program produced by `accvm-asm`
    binary: PathBuf,
    /// Destination for the JSON memory dump
    result: PathBuf,
    /// First memory cell to dump; negative values count from the end
    #[arg(allow_negative_numbers = true)]
    mem_start: i64,
    /// One past the last memory cell to dump; negative values count from the end
    #[arg(allow_negative_numbers = true)]
    mem_end: i64,
    /// Number of memory cells
    #[arg(long, default_value_t = DEFAULT_MEMORY_SIZE)]
    memory_size: usize,
    /// Reject POW results longer than this many bits
    #[arg(long)]
    max_pow_bits: Option<u64>,
    /// Log every executed instruction
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
    let config = MachineConfig::new(args.memory_size, args.max_pow_bits)
        .map_err(|e| anyhow::anyhow!("invalid machine configuration: {}", e))?;

    let bytes = fs::read(&args.binary)
        .with_context(|| format!("reading {}", args.binary.display()))?;

    let mut vm = VM::new(config)?;
    // No dump is written for a failed run
    let result = vm
        .run_bytes(&bytes)
        .with_context(|| format!("executing {}", args.binary.display()))?;

    let cells = vm.memory_slice(args.mem_start, args.mem_end);
    write_json_pretty(&args.result, &memory_to_json(cells)?)?;
    info!(
        steps = result.steps,
        cells = cells.len(),
        path = %args.result.display(),
        "memory dump written"
    );

    println!(
        "Execution completed. Memory range saved to '{}'.",
        args.result.display()
    );
    Ok(())
}
