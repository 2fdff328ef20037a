//! One layer of a `background` stack.

use super::fill::Fill;
use crate::parser::{
    Node, generate, is_attachment_keyword, is_box_keyword, is_position_keyword, is_repeat_keyword,
    is_size_keyword, parse_value,
};

/// The marker smuggling `background-clip: text` through the shorthand.
///
/// The native `background` grammar has no slot for `text`, so the codec
/// emits this comment at the end of the layer; a later post-processing
/// pass promotes it into a standalone `background-clip: text` declaration.
pub(crate) const CLIP_TEXT_MARKER: &str = "/* clip: text **/";

pub(crate) fn is_clip_text_comment(text: &str) -> bool {
    text.trim().trim_end_matches('*').trim() == "clip: text"
}

/// One background layer: a [`Fill`] plus the optional longhand components
/// of the `background` shorthand, each kept as verbatim keyword/value text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackgroundLayer {
    pub fill: Fill,
    pub position: Option<String>,
    pub size: Option<String>,
    pub repeat: Option<String>,
    pub origin: Option<String>,
    pub clip: Option<String>,
    pub attachment: Option<String>,
    /// When set on the last layer of a stack, a solid fill serializes as a
    /// bare color (the `background-color` form) instead of a degenerate
    /// gradient. Only the serializer's chosen last layer carries this.
    pub prefer_color_over_fill: bool,
}

impl BackgroundLayer {
    /// Create a layer with the given fill and all other components unset.
    pub fn with_fill(fill: Fill) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }

    /// Parse one comma-free `background` layer segment.
    ///
    /// Returns `None` when the segment cannot be tokenized at all. A
    /// well-formed segment with no recognizable image always yields a
    /// layer; its fill is [`Fill::None`].
    ///
    /// Children are classified in formal-grammar priority order. The `/`
    /// operator flips dimension and keyword capture from the position slot
    /// to the size slot, and the two shared box keywords are claimed in
    /// order: first origin, then clip. The clip marker comment and the
    /// ident `text` both resolve to `clip: text`.
    pub fn from_css(css: &str) -> Option<Self> {
        let parsed = parse_value(css).ok()?;
        let Node::Value(children) = &parsed.root else {
            return None;
        };

        let mut layer = BackgroundLayer::default();
        let mut matched_fill = false;
        let mut found_slash = false;
        let mut position: Vec<String> = vec![];
        let mut size: Vec<String> = vec![];

        for node in children {
            if !matched_fill
                && let Some(fill) = Fill::from_node(node)
            {
                layer.fill = fill;
                matched_fill = true;
                continue;
            }

            match node {
                Node::Operator('/') => found_slash = true,
                Node::Dimension { .. } | Node::Percentage(_) | Node::Number(_) => {
                    let slot = if found_slash { &mut size } else { &mut position };
                    slot.push(generate(node));
                }
                Node::Function { name, .. } if name.eq_ignore_ascii_case("var") => {
                    let slot = if found_slash { &mut size } else { &mut position };
                    slot.push(generate(node));
                }
                Node::Ident(name) => {
                    let word = name.to_ascii_lowercase();
                    if is_position_keyword(&word) || is_size_keyword(&word) {
                        let slot = if found_slash { &mut size } else { &mut position };
                        slot.push(word);
                    } else if is_repeat_keyword(&word) {
                        if layer.repeat.is_none() {
                            layer.repeat = Some(word);
                        }
                    } else if is_attachment_keyword(&word) {
                        if layer.attachment.is_none() {
                            layer.attachment = Some(word);
                        }
                    } else if is_box_keyword(&word) {
                        // Origin and clip share the box vocabulary; per the
                        // <visual-box> <visual-box> grammar the first
                        // unclaimed keyword is origin, the second clip.
                        if layer.origin.is_none() {
                            layer.origin = Some(word);
                        } else if layer.clip.is_none() {
                            layer.clip = Some(word);
                        }
                    } else if word == "text" {
                        layer.clip = Some(word);
                    } else {
                        tracing::debug!("unclassified background token: {}", name);
                    }
                }
                _ => {}
            }
        }

        if !position.is_empty() {
            layer.position = Some(position.join(" "));
        }
        if !size.is_empty() {
            layer.size = Some(size.join(" "));
        }
        if parsed.comments.iter().any(|c| is_clip_text_comment(c)) {
            layer.clip = Some("text".to_string());
        }

        Some(layer)
    }

    /// Whether this layer paints nothing.
    pub fn is_none_layer(&self) -> bool {
        match &self.fill {
            Fill::None => true,
            Fill::Image { .. } | Fill::Solid { .. } | Fill::Linear { .. } | Fill::Radial { .. } => {
                false
            }
        }
    }

    /// Serialize the layer as one `background` shorthand segment.
    ///
    /// A `None` fill serializes as `none` and ignores every other
    /// component. Two forcing rules keep the output unambiguous: size
    /// requires a preceding position token, so a missing position becomes
    /// the CSS initial `0% 0%`; and whenever origin or clip is present the
    /// other is emitted too, since a single box keyword would otherwise
    /// set both longhands on re-parse.
    pub fn to_css(&self) -> String {
        if self.is_none_layer() {
            return "none".to_string();
        }
        if self.prefer_color_over_fill
            && let Fill::Solid { color } = &self.fill
        {
            return color.clone();
        }

        let mut parts = vec![self.fill.to_css()];

        let mut position = self.position.clone();
        if self.size.is_some() && position.is_none() {
            position = Some("0% 0%".to_string());
        }
        if let Some(position) = position {
            parts.push(position);
        }
        if let Some(size) = &self.size {
            parts.push(format!("/ {}", size));
        }
        if let Some(repeat) = &self.repeat {
            parts.push(repeat.clone());
        }

        let text_clip = self.clip.as_deref() == Some("text");
        let mut origin = self.origin.clone();
        let mut clip = if text_clip { None } else { self.clip.clone() };
        if clip.is_some() && origin.is_none() {
            origin = Some("padding-box".to_string());
        }
        if origin.is_some() && clip.is_none() && !text_clip {
            clip = Some("border-box".to_string());
        }
        if let Some(origin) = origin {
            parts.push(origin);
        }
        if let Some(clip) = clip {
            parts.push(clip);
        }

        if let Some(attachment) = &self.attachment {
            parts.push(attachment.clone());
        }
        if text_clip {
            parts.push(CLIP_TEXT_MARKER.to_string());
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dim;

    #[test]
    fn full_shorthand_parses_every_component() {
        let layer = BackgroundLayer::from_css(
            "url(a.png) left top / cover no-repeat padding-box content-box fixed",
        )
        .unwrap();
        assert_eq!(
            layer.fill,
            Fill::Image {
                url: "url(a.png)".to_string()
            }
        );
        assert_eq!(layer.position.as_deref(), Some("left top"));
        assert_eq!(layer.size.as_deref(), Some("cover"));
        assert_eq!(layer.repeat.as_deref(), Some("no-repeat"));
        assert_eq!(layer.origin.as_deref(), Some("padding-box"));
        assert_eq!(layer.clip.as_deref(), Some("content-box"));
        assert_eq!(layer.attachment.as_deref(), Some("fixed"));
    }

    #[test]
    fn dimensions_split_on_slash() {
        let layer = BackgroundLayer::from_css("url(a.png) 10px 20% / 30px 40px").unwrap();
        assert_eq!(layer.position.as_deref(), Some("10px 20%"));
        assert_eq!(layer.size.as_deref(), Some("30px 40px"));
    }

    #[test]
    fn missing_image_defaults_to_none_fill() {
        let layer = BackgroundLayer::from_css("center / contain repeat-y").unwrap();
        assert_eq!(layer.fill, Fill::None);
        assert_eq!(layer.position.as_deref(), Some("center"));
        assert_eq!(layer.size.as_deref(), Some("contain"));
    }

    #[test]
    fn none_fill_serializes_bare() {
        let mut layer = BackgroundLayer::default();
        layer.position = Some("center".to_string());
        layer.repeat = Some("repeat".to_string());
        assert_eq!(layer.to_css(), "none");
    }

    #[test]
    fn single_box_keyword_claims_origin() {
        let layer = BackgroundLayer::from_css("url(a.png) content-box").unwrap();
        assert_eq!(layer.origin.as_deref(), Some("content-box"));
        assert_eq!(layer.clip, None);
    }

    #[test]
    fn size_forces_initial_position() {
        let mut layer = BackgroundLayer::with_fill(Fill::Image {
            url: "url(a.png)".to_string(),
        });
        layer.size = Some("cover".to_string());
        assert_eq!(layer.to_css(), "url(a.png) 0% 0% / cover");
    }

    #[test]
    fn origin_and_clip_force_each_other() {
        let mut layer = BackgroundLayer::with_fill(Fill::Image {
            url: "url(a.png)".to_string(),
        });
        layer.origin = Some("content-box".to_string());
        assert_eq!(layer.to_css(), "url(a.png) content-box border-box");

        layer.origin = None;
        layer.clip = Some("content-box".to_string());
        assert_eq!(layer.to_css(), "url(a.png) padding-box content-box");
    }

    #[test]
    fn prefer_color_emits_bare_color() {
        let mut layer = BackgroundLayer::with_fill(Fill::Solid {
            color: "#ff0000".to_string(),
        });
        assert_eq!(layer.to_css(), "linear-gradient(#ff0000, #ff0000)");
        layer.prefer_color_over_fill = true;
        assert_eq!(layer.to_css(), "#ff0000");
    }

    #[test]
    fn clip_text_round_trips_through_the_marker() {
        let mut layer = BackgroundLayer::with_fill(Fill::Solid {
            color: "#222222".to_string(),
        });
        layer.clip = Some("text".to_string());

        let css = layer.to_css();
        assert!(css.contains(CLIP_TEXT_MARKER), "got: {}", css);

        let reparsed = BackgroundLayer::from_css(&css).unwrap();
        assert_eq!(reparsed.clip.as_deref(), Some("text"));
    }

    #[test]
    fn marker_comment_variants_are_recognized() {
        assert!(is_clip_text_comment(" clip: text *"));
        assert!(is_clip_text_comment(" clip: text "));
        assert!(!is_clip_text_comment(" clip: border-box "));
    }

    #[test]
    fn shorthand_round_trip_is_stable() {
        let css = "linear-gradient(45deg, red 0%, blue 100%) 50% 50% / contain no-repeat padding-box content-box scroll";
        let layer = BackgroundLayer::from_css(css).unwrap();
        assert_eq!(layer.to_css(), css);
        assert_eq!(BackgroundLayer::from_css(&layer.to_css()).unwrap(), layer);
    }

    #[test]
    fn gradient_offsets_are_materialized() {
        let layer =
            BackgroundLayer::from_css("linear-gradient(90deg, red, yellow, blue)").unwrap();
        let Fill::Linear { stops, .. } = &layer.fill else {
            panic!("expected a linear fill");
        };
        assert_eq!(stops[1].dim, Some(Dim::percent(50.0)));
    }
}
