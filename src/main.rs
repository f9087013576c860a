//! Circuitpad - Circuit Description Viewer
//!
//! Entry point for the terminal viewer. Launching it initializes the
//! application exactly once; given a circuit file it parses the document
//! and prints every registered panel.
//!
//! # Usage
//!
//! ```bash
//! circuitpad my_circuit.cpd
//! ```

use std::path::PathBuf;

use circuitpad_core::{dsl, error::Result, App};
use clap::Parser;

/// Circuit description viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // One-time application startup
    let app = App::init();

    // Launched without a document, startup is all there is to do
    let Some(path) = args.circuit_file else {
        return Ok(());
    };

    let doc = dsl::parse_file(&path)?;
    print!("{}", app.render(&doc));

    Ok(())
}
