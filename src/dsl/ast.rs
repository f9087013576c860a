//! Document types for the circuit description language.

use std::collections::HashMap;
use std::fmt;

/// A parsed circuit description document.
#[derive(Debug, Clone)]
pub struct CircuitDoc {
    /// Circuit name from the header line
    pub name: String,
    /// Supply voltage in volts, if declared
    pub vcc: Option<f64>,
    /// All net names: declared ones first, then nets referenced by
    /// components. Ground aliases ('0', 'GND') are excluded.
    pub nets: Vec<String>,
    /// All component declarations, in source order
    pub components: Vec<ComponentDef>,
}

impl CircuitDoc {
    /// Create a new document with the given circuit name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vcc: None,
            nets: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.name == name)
    }
}

/// A component declaration from the DSL.
#[derive(Debug, Clone)]
pub struct ComponentDef {
    /// Component kind (resistor, capacitor, ...)
    pub kind: ComponentKind,
    /// Unique component name (the `name=` attribute)
    pub name: String,
    /// Connected net names (the `node1=` and `node2=` attributes)
    pub nodes: Vec<String>,
    /// Component value in base units (the `value=` attribute)
    pub value: Option<f64>,
    /// Additional numeric attributes
    pub params: HashMap<String, f64>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Component kinds supported by the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Resistor
    Resistor,
    /// Capacitor
    Capacitor,
    /// Inductor
    Inductor,
    /// Diode
    Diode,
    /// Voltage source
    Source,
}

impl ComponentKind {
    /// Parse a component kind from its line keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "resistor" => Some(Self::Resistor),
            "capacitor" => Some(Self::Capacitor),
            "inductor" => Some(Self::Inductor),
            "diode" => Some(Self::Diode),
            "source" => Some(Self::Source),
            _ => None,
        }
    }

    /// Get the expected number of node references for this kind.
    pub fn expected_node_count(&self) -> usize {
        match self {
            Self::Resistor | Self::Capacitor | Self::Inductor => 2,
            Self::Diode => 2, // anode, cathode
            Self::Source => 2,
        }
    }

    /// Whether a `value=` attribute is required for this kind.
    pub fn value_required(&self) -> bool {
        !matches!(self, Self::Diode)
    }

    /// The base unit for this kind's value.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Resistor => "ohm",
            Self::Capacitor => "F",
            Self::Inductor => "H",
            Self::Diode => "",
            Self::Source => "V",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Resistor => "resistor",
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
            Self::Diode => "diode",
            Self::Source => "source",
        };
        write!(f, "{}", keyword)
    }
}
