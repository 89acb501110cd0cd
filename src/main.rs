use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert a JSON file into block-style YAML, printed to standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JSON file to convert.
    path: PathBuf,
}

/// Install a subscriber which logs to stderr, so that stdout only ever
/// carries YAML. Verbosity is controlled through `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Write the converted document followed by a trailing newline.
fn write_output(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    writeln!(stdout)?;
    stdout.flush()
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let output = json2yaml::convert_path(&cli.path)?;

    write_output(&output).context("failed to write to stdout")?;
    Ok(())
}
