//! Write the sorted distinct integers in [-1023, 1023] found in a file
//!
//! ```text
//! cargo run --example unique_ints -- input.txt output.txt
//! ```

use std::path::PathBuf;

use clap::Parser;
use sparsemat::process_file;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Extract sorted unique integers from a file, one per line")]
struct Cli {
    /// File with one integer per line
    input: PathBuf,

    /// Destination for the sorted unique values
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stats = process_file(&cli.input, &cli.output)?;
    println!(
        "Wrote {} unique integers to {}",
        stats.unique,
        cli.output.display()
    );

    Ok(())
}
