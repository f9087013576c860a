//! Parser for the circuit description language.
//!
//! This module provides a line-oriented, human-editable text language for
//! describing small circuits as named nets and components with `key=value`
//! attributes.
//!
//! # Grammar Overview
//!
//! ```text
//! document    = header { line }
//! header      = "circuit" ':' identifier
//! line        = supply | net | component | comment | empty
//! supply      = "vcc" ':' value
//! net         = "net" ':' identifier
//! component   = kind ':' attr { attr }
//! comment     = '#' { any_char }
//!
//! kind        = "resistor" | "capacitor" | "inductor" | "diode" | "source"
//! attr        = key '=' (identifier | value)
//! key         = "name" | "value" | "node1" | "node2" | identifier
//!
//! value       = ['-'] digit+ ['.' digit+] [('e'|'E') ['-'|'+'] digit+]
//!               [si_prefix] [unit_letter]
//! si_prefix   = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! unit_letter = 'V' | 'F' | 'H' | 'A'
//! identifier  = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! # Line Kinds
//!
//! | Keyword | Description | Syntax |
//! |---------|-------------|--------|
//! | circuit | Header naming the circuit (must come first) | `circuit: <name>` |
//! | vcc | Supply-voltage declaration | `vcc: <value>` |
//! | net | Declare a named net | `net: <name>` |
//! | resistor, capacitor, inductor, diode, source | Component declaration | `<kind>: name=<n> value=<v> node1=<net> node2=<net>` |
//!
//! The ground net is spelled `GND` or `0` and is never listed among a
//! document's nets.
//!
//! # Example
//!
//! ```text
//! circuit: simple_rc
//! vcc: 5V
//! net: OUT
//! resistor: name=R1 value=10k node1=VCC node2=OUT
//! capacitor: name=C1 value=1uF node1=OUT node2=GND
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::{is_ground, Parser};

use crate::error::Result;

/// Parse a circuit description string into a document.
pub fn parse(input: &str) -> Result<CircuitDoc> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a circuit description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<CircuitDoc> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::error::CircuitPadError::FileReadError {
            path: path.display().to_string(),
            source: e,
        }
    })?;
    parse(&content)
}
