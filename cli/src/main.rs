//! Refvec CLI
//!
//! Emits reference test vectors for one primitive family to stdout.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{emit, Primitive};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "refvec")]
#[command(about = "Reference test-vector generator for embedded crypto test suites", long_about = None)]
#[command(version)]
struct Cli {
    /// Primitive family to generate vectors for
    #[arg(value_enum)]
    primitive: Primitive,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    emit(cli.primitive)
}
