//! # Circuitpad Core
//!
//! Parser and terminal viewer for a small line-oriented circuit
//! description language.
//!
//! This library provides:
//! - A line-oriented DSL for describing circuits as named nets and
//!   components with `key=value` attributes
//! - A document model ([`dsl::CircuitDoc`]) produced by parsing
//! - A panel-based viewer application behind an explicit facade
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the circuit description language
//! - [`app`] - Viewer application facade and panels
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use circuitpad_core::dsl;
//!
//! let doc = dsl::parse("circuit: divider\nresistor: name=R1 value=10k node1=VCC node2=OUT\n")?;
//! assert_eq!(doc.name, "divider");
//! # Ok::<(), circuitpad_core::CircuitPadError>(())
//! ```
//!
//! ### Viewer CLI
//!
//! ```bash
//! circuitpad my_circuit.cpd
//! ```
//!
//! Launched without a file, the viewer initializes and exits quietly;
//! with a file, it parses the document and prints every panel.

pub mod app;
pub mod dsl;
pub mod error;

// Re-export main types for convenience
pub use app::{App, Panel};
pub use dsl::CircuitDoc;
pub use error::{CircuitPadError, Result};

/// Default supply voltage in volts, used when a document declares none.
pub const DEFAULT_SUPPLY_VOLTS: f64 = 5.0;
