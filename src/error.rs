//! Error types for the Circuitpad parser and viewer.
//!
//! This module provides a unified error type [`CircuitPadError`] that covers
//! all error conditions that can occur during DSL scanning, parsing,
//! and document loading.

use thiserror::Error;

/// Result type alias using [`CircuitPadError`].
pub type Result<T> = std::result::Result<T, CircuitPadError>;

/// Unified error type for all Circuitpad operations.
#[derive(Error, Debug)]
pub enum CircuitPadError {
    // ============ Scanning Errors ============
    /// Error during lexical analysis
    #[error("Scan error at line {line}, column {column}: {message}")]
    ScanError {
        line: usize,
        column: usize,
        message: String,
    },

    // ============ Parsing Errors ============
    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Document does not start with a circuit header
    #[error("Missing circuit header (the first line must be 'circuit: <name>')")]
    MissingHeader,

    /// More than one circuit header
    #[error("Duplicate circuit header at line {line}")]
    DuplicateHeader { line: usize },

    /// More than one supply-voltage declaration
    #[error("Duplicate supply declaration at line {line}")]
    DuplicateSupply { line: usize },

    /// Unknown component kind
    #[error("Unknown component kind '{kind}' at line {line}")]
    UnknownComponentKind { kind: String, line: usize },

    /// Invalid component declaration
    #[error("Invalid component '{name}' at line {line}: {message}")]
    InvalidComponent {
        name: String,
        line: usize,
        message: String,
    },

    /// Invalid attribute value
    #[error("Invalid attribute '{attr}' for component '{component}': {message}")]
    InvalidAttribute {
        component: String,
        attr: String,
        message: String,
    },

    /// Duplicate component name
    #[error("Duplicate component name '{name}'")]
    DuplicateComponent { name: String },

    // ============ I/O Errors ============
    /// Error reading a circuit description file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CircuitPadError {
    /// Create a scan error
    pub fn scan(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::ScanError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid component error
    pub fn invalid_component(name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::InvalidComponent {
            name: name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid attribute error
    pub fn invalid_attribute(
        component: impl Into<String>,
        attr: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            component: component.into(),
            attr: attr.into(),
            message: message.into(),
        }
    }
}
