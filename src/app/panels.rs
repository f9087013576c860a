//! Viewer panels.
//!
//! Each panel renders one section of a circuit description document as
//! plain text. Panels are registered with the [`App`](super::App) handle
//! at initialization.

use crate::dsl::CircuitDoc;

/// A renderable section of the document viewer.
pub trait Panel: Send + Sync {
    /// Section title shown above the panel body.
    fn title(&self) -> &'static str;

    /// Render the panel body for the given document.
    fn render(&self, doc: &CircuitDoc) -> String;
}

/// Header panel: circuit name, supply voltage, and counts.
pub struct SummaryPanel;

impl Panel for SummaryPanel {
    fn title(&self) -> &'static str {
        "Summary"
    }

    fn render(&self, doc: &CircuitDoc) -> String {
        let mut out = format!("circuit: {}\n", doc.name);
        let (vcc, marker) = match doc.vcc {
            Some(v) => (v, ""),
            None => (crate::DEFAULT_SUPPLY_VOLTS, " (default)"),
        };
        out.push_str(&format!("supply:  {}{}\n", format_value(vcc, "V"), marker));
        out.push_str(&format!(
            "{} net(s), {} component(s)\n",
            doc.nets.len(),
            doc.components.len()
        ));
        out
    }
}

/// Net list panel.
pub struct NetsPanel;

impl Panel for NetsPanel {
    fn title(&self) -> &'static str {
        "Nets"
    }

    fn render(&self, doc: &CircuitDoc) -> String {
        if doc.nets.is_empty() {
            return "(none)\n".to_string();
        }
        let mut out = String::new();
        for net in &doc.nets {
            out.push_str(net);
            out.push('\n');
        }
        out
    }
}

/// Component table panel.
pub struct ComponentsPanel;

impl Panel for ComponentsPanel {
    fn title(&self) -> &'static str {
        "Components"
    }

    fn render(&self, doc: &CircuitDoc) -> String {
        if doc.components.is_empty() {
            return "(none)\n".to_string();
        }
        let mut out = String::new();
        for comp in &doc.components {
            let value = comp
                .value
                .map(|v| format_value(v, comp.kind.unit()))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "{:<8} {:<10} {:<10} {} -> {}\n",
                comp.name,
                comp.kind,
                value,
                comp.nodes[0],
                comp.nodes[1]
            ));
        }
        out
    }
}

/// Build the default panel registration set, in display order.
pub fn default_panels() -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(SummaryPanel),
        Box::new(NetsPanel),
        Box::new(ComponentsPanel),
    ]
}

/// Format a value with an engineering SI prefix and unit, e.g. `10 kohm`.
pub fn format_value(value: f64, unit: &str) -> String {
    let magnitude = value.abs();
    let (scale, prefix) = if magnitude == 0.0 {
        (1.0, "")
    } else if magnitude >= 1e9 {
        (1e9, "G")
    } else if magnitude >= 1e6 {
        (1e6, "M")
    } else if magnitude >= 1e3 {
        (1e3, "k")
    } else if magnitude >= 1.0 {
        (1.0, "")
    } else if magnitude >= 1e-3 {
        (1e-3, "m")
    } else if magnitude >= 1e-6 {
        (1e-6, "u")
    } else if magnitude >= 1e-9 {
        (1e-9, "n")
    } else {
        (1e-12, "p")
    };
    format!("{} {}{}", value / scale, prefix, unit)
}
