//! Parser for the circuit description language.

use std::collections::HashMap;

use super::ast::*;
use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::error::{CircuitPadError, Result};

/// Parser for circuit description documents.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token().unwrap_or(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            line: 1,
            column: 1,
        });
        Self { lexer, current }
    }

    /// Parse the entire circuit description.
    pub fn parse(&mut self) -> Result<CircuitDoc> {
        let mut doc: Option<CircuitDoc> = None;

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let keyword = self.expect(TokenKind::Identifier)?;
            let line = keyword.line;
            self.expect(TokenKind::Colon)?;

            match keyword.text.to_ascii_lowercase().as_str() {
                "circuit" => {
                    if doc.is_some() {
                        return Err(CircuitPadError::DuplicateHeader { line });
                    }
                    let name = self.expect(TokenKind::Identifier)?;
                    doc = Some(CircuitDoc::new(name.text));
                }
                "vcc" => {
                    let doc = doc.as_mut().ok_or(CircuitPadError::MissingHeader)?;
                    if doc.vcc.is_some() {
                        return Err(CircuitPadError::DuplicateSupply { line });
                    }
                    let tok = self.expect(TokenKind::Number)?;
                    let volts = parse_value(&tok.text).ok_or_else(|| {
                        CircuitPadError::parse(
                            line,
                            format!("invalid supply voltage: {}", tok.text),
                        )
                    })?;
                    doc.vcc = Some(volts);
                }
                "net" => {
                    let doc = doc.as_mut().ok_or(CircuitPadError::MissingHeader)?;
                    let name = self.expect(TokenKind::Identifier)?;
                    if !doc.nets.contains(&name.text) {
                        doc.nets.push(name.text);
                    }
                }
                kind_keyword => {
                    let doc = doc.as_mut().ok_or(CircuitPadError::MissingHeader)?;
                    let kind = ComponentKind::from_keyword(kind_keyword).ok_or_else(|| {
                        CircuitPadError::UnknownComponentKind {
                            kind: keyword.text.clone(),
                            line,
                        }
                    })?;
                    let component = self.parse_component(kind, line)?;
                    if doc.components.iter().any(|c| c.name == component.name) {
                        return Err(CircuitPadError::DuplicateComponent {
                            name: component.name,
                        });
                    }
                    doc.components.push(component);
                }
            }

            // Consume newline or EOF
            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => {}
                _ => {
                    return Err(CircuitPadError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }
        }

        let mut doc = doc.ok_or(CircuitPadError::MissingHeader)?;

        // Collect nets referenced by components but never declared
        for comp in &doc.components {
            for node in &comp.nodes {
                if is_ground(node) {
                    continue;
                }
                if !doc.nets.contains(node) {
                    doc.nets.push(node.clone());
                }
            }
        }

        Ok(doc)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(CircuitPadError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    /// Parse the `key=value` attributes of a component line.
    fn parse_component(&mut self, kind: ComponentKind, line: usize) -> Result<ComponentDef> {
        let mut name: Option<String> = None;
        let mut value: Option<f64> = None;
        let mut node1: Option<String> = None;
        let mut node2: Option<String> = None;
        let mut params = HashMap::new();

        while self.current.kind != TokenKind::Newline && self.current.kind != TokenKind::Eof {
            let key = self.expect(TokenKind::Identifier)?;
            self.expect(TokenKind::Equals)?;

            if self.current.kind != TokenKind::Identifier
                && self.current.kind != TokenKind::Number
            {
                return Err(CircuitPadError::parse(
                    line,
                    format!("expected a value for attribute '{}'", key.text),
                ));
            }
            let val = self.current.clone();
            self.advance()?;

            let display_name = name.clone().unwrap_or_else(|| kind.to_string());
            match key.text.to_ascii_lowercase().as_str() {
                "name" => {
                    if val.kind != TokenKind::Identifier {
                        return Err(CircuitPadError::invalid_attribute(
                            display_name,
                            "name",
                            format!("'{}' is not a valid component name", val.text),
                        ));
                    }
                    name = Some(val.text);
                }
                "value" => {
                    let v = parse_value(&val.text).ok_or_else(|| {
                        CircuitPadError::invalid_attribute(
                            display_name,
                            "value",
                            format!("'{}' is not a valid value", val.text),
                        )
                    })?;
                    value = Some(v);
                }
                "node1" => node1 = Some(val.text),
                "node2" => node2 = Some(val.text),
                other => {
                    let v = parse_value(&val.text).ok_or_else(|| {
                        CircuitPadError::invalid_attribute(
                            display_name,
                            other,
                            format!("'{}' is not a valid value", val.text),
                        )
                    })?;
                    params.insert(key.text.to_ascii_lowercase(), v);
                }
            }
        }

        let name = name.ok_or_else(|| {
            CircuitPadError::invalid_component(
                kind.to_string(),
                line,
                "missing required attribute 'name'",
            )
        })?;

        let nodes: Vec<String> = [node1, node2].into_iter().flatten().collect();
        let expected = kind.expected_node_count();
        if nodes.len() < expected {
            return Err(CircuitPadError::invalid_component(
                &name,
                line,
                format!("expected {} nodes, got {}", expected, nodes.len()),
            ));
        }

        if value.is_none() && kind.value_required() {
            return Err(CircuitPadError::invalid_component(
                &name,
                line,
                "missing required attribute 'value'",
            ));
        }

        Ok(ComponentDef {
            kind,
            name,
            nodes,
            value,
            params,
            line,
        })
    }
}

/// Check whether a node name is a ground alias.
pub fn is_ground(node: &str) -> bool {
    node == "0" || node.eq_ignore_ascii_case("gnd")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "circuit: simple_rc\n\
                          vcc: 5V\n\
                          net: OUT\n\
                          resistor: name=R1 value=10k node1=VCC node2=OUT\n\
                          capacitor: name=C1 value=1uF node1=OUT node2=GND\n";

    #[test]
    fn test_parse_sample_document() {
        let doc = super::super::parse(SAMPLE).unwrap();
        assert_eq!(doc.name, "simple_rc");
        assert_relative_eq!(doc.vcc.unwrap(), 5.0);
        assert_eq!(doc.components.len(), 2);

        let r1 = doc.component("R1").unwrap();
        assert_eq!(r1.kind, ComponentKind::Resistor);
        assert_eq!(r1.nodes, vec!["VCC", "OUT"]);
        assert_relative_eq!(r1.value.unwrap(), 10_000.0);

        let c1 = doc.component("C1").unwrap();
        assert_eq!(c1.kind, ComponentKind::Capacitor);
        assert_eq!(c1.nodes, vec!["OUT", "GND"]);
        assert_relative_eq!(c1.value.unwrap(), 1e-6);
    }

    #[test]
    fn test_sample_debug_representation_is_printable() {
        let doc = super::super::parse(SAMPLE).unwrap();
        let rendered = format!("{:?}", doc);
        assert!(rendered.contains("simple_rc"));
        assert!(rendered.contains("R1"));
    }

    #[test]
    fn test_nets_declared_then_referenced() {
        let doc = super::super::parse(SAMPLE).unwrap();
        // OUT was declared, VCC only referenced, ground aliases excluded
        assert_eq!(doc.nets, vec!["OUT", "VCC"]);
    }

    #[test]
    fn test_net_redeclaration_is_deduplicated() {
        let input = "circuit: c\nnet: OUT\nnet: OUT\n";
        let doc = super::super::parse(input).unwrap();
        assert_eq!(doc.nets, vec!["OUT"]);
    }

    #[test]
    fn test_missing_header() {
        let err = super::super::parse("net: OUT\n").unwrap_err();
        assert!(matches!(err, CircuitPadError::MissingHeader));

        let err = super::super::parse("").unwrap_err();
        assert!(matches!(err, CircuitPadError::MissingHeader));
    }

    #[test]
    fn test_duplicate_header() {
        let err = super::super::parse("circuit: a\ncircuit: b\n").unwrap_err();
        assert!(matches!(err, CircuitPadError::DuplicateHeader { line: 2 }));
    }

    #[test]
    fn test_duplicate_supply() {
        let err = super::super::parse("circuit: a\nvcc: 5V\nvcc: 9V\n").unwrap_err();
        assert!(matches!(err, CircuitPadError::DuplicateSupply { line: 3 }));
    }

    #[test]
    fn test_unknown_component_kind() {
        let err = super::super::parse("circuit: a\ntransistor: name=Q1\n").unwrap_err();
        assert!(matches!(
            err,
            CircuitPadError::UnknownComponentKind { line: 2, .. }
        ));
    }

    #[test]
    fn test_duplicate_component_name() {
        let input = "circuit: a\n\
                     resistor: name=R1 value=1k node1=A node2=B\n\
                     resistor: name=R1 value=2k node1=B node2=C\n";
        let err = super::super::parse(input).unwrap_err();
        assert!(matches!(err, CircuitPadError::DuplicateComponent { .. }));
    }

    #[test]
    fn test_component_missing_name() {
        let err =
            super::super::parse("circuit: a\nresistor: value=1k node1=A node2=B\n").unwrap_err();
        assert!(matches!(err, CircuitPadError::InvalidComponent { .. }));
    }

    #[test]
    fn test_component_missing_node() {
        let err =
            super::super::parse("circuit: a\nresistor: name=R1 value=1k node1=A\n").unwrap_err();
        assert!(matches!(err, CircuitPadError::InvalidComponent { .. }));
    }

    #[test]
    fn test_component_missing_value() {
        let err =
            super::super::parse("circuit: a\nresistor: name=R1 node1=A node2=B\n").unwrap_err();
        assert!(matches!(err, CircuitPadError::InvalidComponent { .. }));
    }

    #[test]
    fn test_diode_value_optional() {
        let doc =
            super::super::parse("circuit: a\ndiode: name=D1 node1=A node2=GND\n").unwrap();
        assert_eq!(doc.component("D1").unwrap().value, None);
    }

    #[test]
    fn test_extra_numeric_attribute_goes_to_params() {
        let input = "circuit: a\nsource: name=V1 value=9V node1=IN node2=GND freq=50\n";
        let doc = super::super::parse(input).unwrap();
        let v1 = doc.component("V1").unwrap();
        assert_relative_eq!(v1.params["freq"], 50.0);
    }

    #[test]
    fn test_extra_non_numeric_attribute_is_rejected() {
        let input = "circuit: a\nresistor: name=R1 value=1k node1=A node2=B color=red\n";
        let err = super::super::parse(input).unwrap_err();
        assert!(matches!(err, CircuitPadError::InvalidAttribute { .. }));
    }

    #[test]
    fn test_parse_with_comments() {
        let input = "# an RC divider\ncircuit: c\nresistor: name=R1 value=1k node1=A node2=B # load\n";
        let doc = super::super::parse(input).unwrap();
        assert_eq!(doc.components.len(), 1);
    }
}
