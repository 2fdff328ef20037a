//! The `box-shadow` property model.

use crate::parser::{Node, generate, is_color_node, parse_value, split_top_level_commas};
use crate::types::Dim;

/// One shadow: `[inset] x y blur spread color`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadow {
    pub inset: bool,
    pub x: Dim,
    pub y: Dim,
    pub blur: Dim,
    pub spread: Dim,
    pub color: String,
}

impl Default for BoxShadow {
    fn default() -> Self {
        Self {
            inset: false,
            x: Dim::px(0.0),
            y: Dim::px(0.0),
            blur: Dim::px(0.0),
            spread: Dim::px(0.0),
            color: "currentcolor".to_string(),
        }
    }
}

impl BoxShadow {
    /// Classify one comma-free shadow group in a single pass.
    ///
    /// The `inset` ident sets the flag, the first color-like token becomes
    /// the color, and dimensions fill x/y/blur/spread positionally. Extra
    /// dimensions are ignored; missing trailing ones stay at `0px`.
    fn from_nodes(nodes: &[Node]) -> BoxShadow {
        let mut shadow = BoxShadow::default();
        let mut has_color = false;
        let mut dims = vec![];

        for node in nodes {
            if let Node::Ident(name) = node
                && name.eq_ignore_ascii_case("inset")
            {
                shadow.inset = true;
                continue;
            }
            if !has_color && is_color_node(node) {
                shadow.color = generate(node);
                has_color = true;
                continue;
            }
            if dims.len() < 4
                && let Some(dim) = Dim::from_node(node)
            {
                dims.push(dim);
            }
        }

        let mut dims = dims.into_iter();
        if let Some(d) = dims.next() {
            shadow.x = d;
        }
        if let Some(d) = dims.next() {
            shadow.y = d;
        }
        if let Some(d) = dims.next() {
            shadow.blur = d;
        }
        if let Some(d) = dims.next() {
            shadow.spread = d;
        }
        shadow
    }

    /// Serialize as `[inset ]x y blur spread color`.
    pub fn to_css(&self) -> String {
        let mut parts = vec![];
        if self.inset {
            parts.push("inset".to_string());
        }
        parts.push(self.x.to_string());
        parts.push(self.y.to_string());
        parts.push(self.blur.to_string());
        parts.push(self.spread.to_string());
        parts.push(self.color.clone());
        parts.join(" ")
    }
}

/// An ordered list of shadows, first shadow painted on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxShadows {
    pub shadows: Vec<BoxShadow>,
}

impl BoxShadows {
    /// Parse a full `box-shadow` property value.
    ///
    /// Blank input and the literal `none` yield an empty list, never an
    /// error. Groups that cannot be tokenized are dropped with a warning.
    pub fn from_css(css: &str) -> BoxShadows {
        let trimmed = css.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return BoxShadows::default();
        }

        let mut shadows = vec![];
        for segment in split_top_level_commas(trimmed) {
            let Ok(parsed) = parse_value(&segment) else {
                tracing::warn!("dropping unparsable box-shadow: {:?}", segment);
                continue;
            };
            let Node::Value(children) = &parsed.root else {
                continue;
            };
            shadows.push(BoxShadow::from_nodes(children));
        }
        BoxShadows { shadows }
    }

    /// Serialize all shadows, comma-joined. An empty list serializes to an
    /// empty string.
    pub fn to_css(&self) -> String {
        self.shadows
            .iter()
            .map(|s| s.to_css())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.shadows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shadows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_empty_list() {
        assert!(BoxShadows::from_css("").is_empty());
        assert!(BoxShadows::from_css("   ").is_empty());
        assert!(BoxShadows::from_css("none").is_empty());
    }

    #[test]
    fn two_shadows_with_defaults() {
        let shadows = BoxShadows::from_css("2px 4px #fff, inset 0px 3px red");
        assert_eq!(shadows.len(), 2);

        let first = &shadows.shadows[0];
        assert!(!first.inset);
        assert_eq!(first.x, Dim::px(2.0));
        assert_eq!(first.y, Dim::px(4.0));
        assert_eq!(first.blur, Dim::px(0.0));
        assert_eq!(first.spread, Dim::px(0.0));
        assert_eq!(first.color, "#fff");

        let second = &shadows.shadows[1];
        assert!(second.inset);
        assert_eq!(second.y, Dim::px(3.0));
        assert_eq!(second.color, "red");
    }

    #[test]
    fn missing_color_defaults_to_currentcolor() {
        let shadows = BoxShadows::from_css("1px 1px 2px");
        assert_eq!(shadows.shadows[0].color, "currentcolor");
    }

    #[test]
    fn color_position_is_flexible() {
        let shadows = BoxShadows::from_css("rgb(0, 0, 0) 1px 2px 3px 4px");
        let shadow = &shadows.shadows[0];
        assert_eq!(shadow.color, "rgb(0, 0, 0)");
        assert_eq!(shadow.spread, Dim::px(4.0));
    }

    #[test]
    fn extra_dimensions_are_ignored() {
        let shadows = BoxShadows::from_css("1px 2px 3px 4px 5px 6px red");
        let shadow = &shadows.shadows[0];
        assert_eq!(shadow.spread, Dim::px(4.0));
    }

    #[test]
    fn serialization_round_trips() {
        let css = "inset 2px 4px 6px 8px #112233, 0px 1px 0px 0px rgba(0, 0, 0, 0.5)";
        let shadows = BoxShadows::from_css(css);
        assert_eq!(shadows.to_css(), css);
        assert_eq!(BoxShadows::from_css(&shadows.to_css()), shadows);
    }
}
