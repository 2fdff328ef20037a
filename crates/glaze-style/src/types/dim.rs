//! Dimension and gradient-stop value types.

use crate::parser::Node;
use std::fmt;

/// A numeric value with a CSS unit.
///
/// The unit is kept as text (`"px"`, `"%"`, `"deg"`, or empty for a
/// unitless number) because the codec round-trips units verbatim rather
/// than resolving them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dim {
    pub value: f32,
    pub unit: String,
}

impl Dim {
    /// Create a dimension with an explicit unit.
    pub fn new(value: f32, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Create a percentage dimension.
    pub fn percent(value: f32) -> Self {
        Self::new(value, "%")
    }

    /// Create a pixel dimension.
    pub fn px(value: f32) -> Self {
        Self::new(value, "px")
    }

    /// Extract a dimension from a dimension, percentage or unitless
    /// number node.
    pub fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Dimension { value, unit } => Some(Self::new(*value, unit.clone())),
            Node::Percentage(value) => Some(Self::percent(*value)),
            Node::Number(value) => Some(Self::new(*value, "")),
            _ => None,
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// One gradient color stop: a color plus an optional offset.
///
/// `dim` is `None` only between stop parsing and offset interpolation;
/// every materialized gradient carries fully resolved stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub color: String,
    pub dim: Option<Dim>,
}

impl Stop {
    /// Create a stop.
    pub fn new(color: impl Into<String>, dim: Option<Dim>) -> Self {
        Self {
            color: color.into(),
            dim,
        }
    }

    /// Serialize the stop as `<color> <offset>`.
    ///
    /// # Panics
    ///
    /// Panics if the offset was never interpolated. Reaching serialization
    /// with an unresolved offset is a programming error; emitting the stop
    /// anyway would produce syntactically broken CSS.
    pub fn to_css(&self) -> String {
        match &self.dim {
            Some(dim) => format!("{} {}", self.color, dim),
            None => panic!(
                "gradient stop '{}' serialized before its offset was interpolated",
                self.color
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim_display_uses_minimal_digits() {
        assert_eq!(Dim::percent(50.0).to_string(), "50%");
        assert_eq!(Dim::px(2.5).to_string(), "2.5px");
        assert_eq!(Dim::new(0.0, "").to_string(), "0");
    }

    #[test]
    fn stop_serializes_color_and_offset() {
        let stop = Stop::new("red", Some(Dim::percent(45.0)));
        assert_eq!(stop.to_css(), "red 45%");
    }

    #[test]
    #[should_panic(expected = "before its offset was interpolated")]
    fn unresolved_stop_panics_on_serialize() {
        let _ = Stop::new("red", None).to_css();
    }
}
