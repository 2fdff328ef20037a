//! The fill of one background layer.

use super::stops::parse_stop;
use crate::background::interpolate_stops;
use crate::parser::{
    Node, generate, is_color_node, is_position_keyword, is_radial_extent_keyword,
    split_comma_groups,
};
use crate::types::{Dim, Stop};

/// What a background layer paints.
///
/// CSS has no flat "background color" layer, so the design tool models a
/// solid fill as its own variant and synthesizes the degenerate
/// `linear-gradient(c, c)` on the way out. Consumers must match all
/// variants; a new fill kind should fail to compile at every call site
/// rather than fall through silently.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fill {
    /// No image and no color.
    #[default]
    None,
    /// An image reference, kept as verbatim CSS text (`url(...)`, a quoted
    /// string, or the tool's `var(--image-*)` asset convention).
    Image { url: String },
    /// A flat color.
    Solid { color: String },
    /// A linear gradient.
    Linear {
        repeating: bool,
        /// Gradient line angle in degrees.
        angle: f32,
        stops: Vec<Stop>,
    },
    /// A radial gradient.
    Radial {
        repeating: bool,
        cx: Dim,
        cy: Dim,
        rx: Dim,
        ry: Dim,
        /// A verbatim extent keyword (`closest-side` etc.), which takes the
        /// place of explicit radii when present.
        size_keyword: Option<String>,
        stops: Vec<Stop>,
    },
}

impl Fill {
    /// Try to classify a node as a background image candidate.
    ///
    /// Candidates are tried in a fixed order: `none` → image → solid →
    /// linear → radial. The order is load-bearing: the solid check must
    /// see a `linear-gradient` function before the generic linear parser
    /// consumes it, and a bare color must not reach the keyword
    /// classifiers.
    pub(crate) fn from_node(node: &Node) -> Option<Fill> {
        if let Node::Ident(name) = node
            && name.eq_ignore_ascii_case("none")
        {
            return Some(Fill::None);
        }

        if let Some(fill) = Self::image_from_node(node) {
            return Some(fill);
        }
        if let Some(fill) = Self::solid_from_node(node) {
            return Some(fill);
        }

        let Node::Function { name, args } = node else {
            return None;
        };
        if name.eq_ignore_ascii_case("linear-gradient") {
            Self::linear_from_args(args, false)
        } else if name.eq_ignore_ascii_case("repeating-linear-gradient") {
            Self::linear_from_args(args, true)
        } else if name.eq_ignore_ascii_case("radial-gradient") {
            Self::radial_from_args(args, false)
        } else if name.eq_ignore_ascii_case("repeating-radial-gradient") {
            Self::radial_from_args(args, true)
        } else {
            None
        }
    }

    fn image_from_node(node: &Node) -> Option<Fill> {
        match node {
            Node::Url(_) | Node::QuotedString(_) | Node::Raw(_) => Some(Fill::Image {
                url: generate(node),
            }),
            Node::Function { name, .. } if name.eq_ignore_ascii_case("url") => Some(Fill::Image {
                url: generate(node),
            }),
            Node::Function { name, args } if name.eq_ignore_ascii_case("var") => {
                // The tool references uploaded assets as var(--image-<id>).
                match args.first() {
                    Some(Node::Ident(prop)) if prop.starts_with("--image-") => Some(Fill::Image {
                        url: generate(node),
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// A solid fill is either a bare color token (the `background-color`
    /// form) or a two-stop `linear-gradient` whose stops carry equal
    /// colors and no explicit offsets - the shape this codec itself emits
    /// for solid fills.
    fn solid_from_node(node: &Node) -> Option<Fill> {
        if is_color_node(node) {
            return Some(Fill::Solid {
                color: generate(node),
            });
        }

        let Node::Function { name, args } = node else {
            return None;
        };
        if !name.eq_ignore_ascii_case("linear-gradient") {
            return None;
        }
        let groups = split_comma_groups(args);
        if groups.len() != 2 {
            return None;
        }
        let mut colors = vec![];
        for group in &groups {
            match group.as_slice() {
                [node] if is_color_node(node) => colors.push(generate(node)),
                _ => return None,
            }
        }
        (colors[0] == colors[1]).then(|| Fill::Solid {
            color: colors[0].clone(),
        })
    }

    fn linear_from_args(args: &[Node], repeating: bool) -> Option<Fill> {
        let groups = split_comma_groups(args);
        let mut angle = None;
        let mut stops = vec![];

        for group in &groups {
            if angle.is_none() {
                let deg = group.iter().find_map(|n| match n {
                    Node::Dimension { value, unit } if unit.eq_ignore_ascii_case("deg") => {
                        Some(*value)
                    }
                    _ => None,
                });
                if let Some(deg) = deg {
                    angle = Some(deg);
                    continue;
                }
            }
            if let Some(stop) = parse_stop(group) {
                stops.push(stop);
            }
        }

        if stops.is_empty() {
            return None;
        }
        interpolate_stops(&mut stops);

        Some(Fill::Linear {
            repeating,
            // 180deg is "to bottom", the CSS default direction.
            angle: angle.unwrap_or(180.0),
            stops,
        })
    }

    fn radial_from_args(args: &[Node], repeating: bool) -> Option<Fill> {
        let groups = split_comma_groups(args);
        if groups.is_empty() {
            return None;
        }

        let mut cx = Dim::percent(50.0);
        let mut cy = Dim::percent(50.0);
        let mut rx = Dim::percent(50.0);
        let mut ry = Dim::percent(50.0);
        let mut size_keyword = None;

        // If the first group already holds a color, there is no prelude and
        // every group is a stop.
        let first_is_color = groups[0].iter().any(|n| is_color_node(n));
        let stop_groups = if first_is_color {
            &groups[..]
        } else {
            let (shape, position) = split_at_ident(&groups[0], "at");

            let mut radii = vec![];
            for node in shape {
                if let Some(dim) = Dim::from_node(node) {
                    radii.push(dim);
                } else if let Node::Ident(name) = node
                    && is_radial_extent_keyword(name)
                {
                    size_keyword = Some(name.to_ascii_lowercase());
                }
                // circle / ellipse shape idents carry no extra state.
            }
            let mut radii = radii.into_iter();
            if let Some(r) = radii.next() {
                rx = r;
            }
            if let Some(r) = radii.next() {
                ry = r;
            }

            let mut center = vec![];
            for node in position {
                if let Some(dim) = Dim::from_node(node) {
                    center.push(dim);
                } else if let Node::Ident(name) = node
                    && is_position_keyword(name)
                {
                    center.push(position_keyword_dim(name));
                }
            }
            let mut center = center.into_iter();
            if let Some(c) = center.next() {
                cx = c;
            }
            if let Some(c) = center.next() {
                cy = c;
            }

            &groups[1..]
        };

        let mut stops: Vec<Stop> = stop_groups.iter().filter_map(|g| parse_stop(g)).collect();
        if stops.is_empty() {
            return None;
        }
        interpolate_stops(&mut stops);

        Some(Fill::Radial {
            repeating,
            cx,
            cy,
            rx,
            ry,
            size_keyword,
            stops,
        })
    }

    /// Serialize the fill to CSS text.
    pub fn to_css(&self) -> String {
        match self {
            Fill::None => "none".to_string(),
            Fill::Image { url } => url.clone(),
            Fill::Solid { color } => format!("linear-gradient({}, {})", color, color),
            Fill::Linear {
                repeating,
                angle,
                stops,
            } => {
                format!(
                    "{}linear-gradient({}deg, {})",
                    repeating_prefix(*repeating),
                    angle,
                    join_stops(stops)
                )
            }
            Fill::Radial {
                repeating,
                cx,
                cy,
                rx,
                ry,
                size_keyword,
                stops,
            } => {
                let extent = match size_keyword {
                    Some(kw) => kw.clone(),
                    None => format!("{} {}", rx, ry),
                };
                format!(
                    "{}radial-gradient({} at {} {}, {})",
                    repeating_prefix(*repeating),
                    extent,
                    cx,
                    cy,
                    join_stops(stops)
                )
            }
        }
    }
}

fn repeating_prefix(repeating: bool) -> &'static str {
    if repeating { "repeating-" } else { "" }
}

fn join_stops(stops: &[Stop]) -> String {
    stops
        .iter()
        .map(|s| s.to_css())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-axis keyword positions: left/top are 0%, center 50%, right/bottom 100%.
fn position_keyword_dim(keyword: &str) -> Dim {
    if keyword.eq_ignore_ascii_case("left") || keyword.eq_ignore_ascii_case("top") {
        Dim::percent(0.0)
    } else if keyword.eq_ignore_ascii_case("center") {
        Dim::percent(50.0)
    } else {
        Dim::percent(100.0)
    }
}

fn split_at_ident<'a>(group: &'a [&'a Node], ident: &str) -> (&'a [&'a Node], &'a [&'a Node]) {
    match group
        .iter()
        .position(|n| matches!(n, Node::Ident(name) if name.eq_ignore_ascii_case(ident)))
    {
        Some(i) => (&group[..i], &group[i + 1..]),
        None => (group, &[]),
    }
}
