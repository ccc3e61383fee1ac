//! Combine two matrix files and print the result
//!
//! ```text
//! cargo run --example matrix_cli -- add a.txt b.txt
//! cargo run --example matrix_cli -- multiply a.txt b.txt --json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sparsemat::{DokMatrix, LoadConfig, MatrixFile, MatrixSnapshot, Operation};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply two sparse matrix files")]
struct Cli {
    /// Operation to perform
    #[arg(value_enum)]
    operation: CliOperation,

    /// Left operand file
    left: PathBuf,

    /// Right operand file
    right: PathBuf,

    /// Reject entries outside the declared rows/cols
    #[arg(long)]
    strict_bounds: bool,

    /// Print the result as JSON instead of the debug representation
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliOperation {
    Add,
    Subtract,
    Multiply,
}

impl From<CliOperation> for Operation {
    fn from(op: CliOperation) -> Self {
        match op {
            CliOperation::Add => Operation::Add,
            CliOperation::Subtract => Operation::Subtract,
            CliOperation::Multiply => Operation::Multiply,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = LoadConfig::default().with_strict_bounds(cli.strict_bounds);
    let left: DokMatrix<i64> = MatrixFile::load_with_config(&cli.left, config)?;
    let right: DokMatrix<i64> = MatrixFile::load_with_config(&cli.right, config)?;

    let operation = Operation::from(cli.operation);
    let result = match operation {
        Operation::Add => left.add(&right)?,
        Operation::Subtract => left.subtract(&right)?,
        Operation::Multiply => left.multiply(&right)?,
    };
    debug!(%operation, nnz = result.nnz(), "operation complete");

    if cli.json {
        let snapshot = MatrixSnapshot::from(&result);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{result}");
    }

    Ok(())
}
