//! The `background` shorthand model: an ordered stack of layers.

mod fill;
mod layer;
mod stops;

pub use fill::Fill;
pub use layer::BackgroundLayer;
pub use stops::interpolate_stops;

use crate::parser::split_top_level_commas;

/// An ordered list of background layers, first layer painted on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Background {
    pub layers: Vec<BackgroundLayer>,
}

impl Background {
    /// Parse a full `background` property value.
    ///
    /// The literal `none` yields a single [`Fill::None`] layer. Anything
    /// else is split at top-level commas (commas inside gradient argument
    /// lists do not separate layers) and parsed layer by layer; segments
    /// that cannot be tokenized are dropped with a warning. Never fails:
    /// thoroughly malformed input yields a background with no layers.
    pub fn from_css(css: &str) -> Background {
        let trimmed = css.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Background {
                layers: vec![BackgroundLayer::default()],
            };
        }

        let mut layers = vec![];
        for segment in split_top_level_commas(trimmed) {
            match BackgroundLayer::from_css(&segment) {
                Some(layer) => layers.push(layer),
                None => tracing::warn!("dropping unparsable background layer: {:?}", segment),
            }
        }
        Background { layers }
    }

    /// Serialize the stack as a comma-joined `background` value.
    ///
    /// # Panics
    ///
    /// Panics when the layer list is empty. An empty stack has no valid
    /// CSS form; callers decide between `none` and omitting the property.
    pub fn to_css(&self) -> String {
        assert!(
            !self.layers.is_empty(),
            "serializing a background with no layers"
        );
        self.layers
            .iter()
            .map(|l| l.to_css())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Drop layers that paint nothing.
    ///
    /// Repeated GUI edits leave `none` tail layers behind; this strips
    /// them before the value is persisted.
    pub fn filter_none_layers(&mut self) {
        self.layers.retain(|l| !l.is_none_layer());
    }

    /// Whether any layer uses the `clip: text` mechanism.
    pub fn has_text_clip(&self) -> bool {
        self.layers.iter().any(|l| l.clip.as_deref() == Some("text"))
    }
}
