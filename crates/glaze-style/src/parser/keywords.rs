//! Keyword vocabularies for the background and box-shadow grammars.
//!
//! The `background` shorthand reuses lexical tokens across value kinds
//! (box keywords serve both origin and clip, dimensions serve both
//! position and size), so classification is done with these pure
//! predicates rather than inside the parsers themselves.

use super::value_ast::Node;

const POSITION_KEYWORDS: &[&str] = &["left", "right", "top", "bottom", "center"];

const SIZE_KEYWORDS: &[&str] = &["cover", "contain"];

const REPEAT_KEYWORDS: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "space",
    "round",
];

const BOX_KEYWORDS: &[&str] = &["border-box", "padding-box", "content-box"];

const ATTACHMENT_KEYWORDS: &[&str] = &["scroll", "fixed", "local"];

const RADIAL_EXTENT_KEYWORDS: &[&str] = &[
    "closest-side",
    "closest-corner",
    "farthest-side",
    "farthest-corner",
];

/// Color function notations recognized as color tokens.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// The CSS named colors, plus `transparent` and `currentcolor`.
const NAMED_COLORS: &[&str] = &[
    "aliceblue",
    "antiquewhite",
    "aqua",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "black",
    "blanchedalmond",
    "blue",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "currentcolor",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
    "darkgray",
    "darkgreen",
    "darkgrey",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkslategrey",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dimgrey",
    "dodgerblue",
    "firebrick",
    "floralwhite",
    "forestgreen",
    "fuchsia",
    "gainsboro",
    "ghostwhite",
    "gold",
    "goldenrod",
    "gray",
    "green",
    "greenyellow",
    "grey",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lavenderblush",
    "lawngreen",
    "lemonchiffon",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrodyellow",
    "lightgray",
    "lightgreen",
    "lightgrey",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightslategray",
    "lightslategrey",
    "lightsteelblue",
    "lightyellow",
    "lime",
    "limegreen",
    "linen",
    "magenta",
    "maroon",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumslateblue",
    "mediumspringgreen",
    "mediumturquoise",
    "mediumvioletred",
    "midnightblue",
    "mintcream",
    "mistyrose",
    "moccasin",
    "navajowhite",
    "navy",
    "oldlace",
    "olive",
    "olivedrab",
    "orange",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred",
    "papayawhip",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "purple",
    "rebeccapurple",
    "red",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "silver",
    "skyblue",
    "slateblue",
    "slategray",
    "slategrey",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "teal",
    "thistle",
    "tomato",
    "transparent",
    "turquoise",
    "violet",
    "wheat",
    "white",
    "whitesmoke",
    "yellow",
    "yellowgreen",
];

fn contains_keyword(table: &[&str], word: &str) -> bool {
    table.iter().any(|k| word.eq_ignore_ascii_case(k))
}

/// `left`, `right`, `top`, `bottom` or `center`.
pub fn is_position_keyword(word: &str) -> bool {
    contains_keyword(POSITION_KEYWORDS, word)
}

/// `cover` or `contain`.
pub fn is_size_keyword(word: &str) -> bool {
    contains_keyword(SIZE_KEYWORDS, word)
}

/// One of the `background-repeat` keywords.
pub fn is_repeat_keyword(word: &str) -> bool {
    contains_keyword(REPEAT_KEYWORDS, word)
}

/// One of the `<visual-box>` keywords shared by origin and clip.
pub fn is_box_keyword(word: &str) -> bool {
    contains_keyword(BOX_KEYWORDS, word)
}

/// One of the `background-attachment` keywords.
pub fn is_attachment_keyword(word: &str) -> bool {
    contains_keyword(ATTACHMENT_KEYWORDS, word)
}

/// One of the radial gradient extent keywords (`closest-side` etc.).
pub fn is_radial_extent_keyword(word: &str) -> bool {
    contains_keyword(RADIAL_EXTENT_KEYWORDS, word)
}

/// A CSS named color, `transparent` or `currentcolor`.
pub fn is_named_color(word: &str) -> bool {
    NAMED_COLORS
        .binary_search(&word.to_ascii_lowercase().as_str())
        .is_ok()
}

/// Whether a node is a recognizable color token: a hex literal, a named
/// color identifier, or a color function notation.
pub fn is_color_node(node: &Node) -> bool {
    match node {
        Node::Hash(_) => true,
        Node::Ident(name) => is_named_color(name),
        Node::Function { name, .. } => contains_keyword(COLOR_FUNCTIONS, name),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_color_table_is_sorted() {
        let mut sorted = NAMED_COLORS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, NAMED_COLORS);
    }

    #[test]
    fn keyword_predicates() {
        assert!(is_position_keyword("center"));
        assert!(is_position_keyword("LEFT"));
        assert!(!is_position_keyword("cover"));

        assert!(is_size_keyword("contain"));
        assert!(is_repeat_keyword("repeat-x"));
        assert!(is_box_keyword("padding-box"));
        assert!(is_attachment_keyword("fixed"));
        assert!(is_radial_extent_keyword("farthest-corner"));
    }

    #[test]
    fn color_recognition() {
        assert!(is_named_color("rebeccapurple"));
        assert!(is_named_color("CurrentColor"));
        assert!(!is_named_color("inset"));
        assert!(!is_named_color("circle"));

        assert!(is_color_node(&Node::Hash("#fff".to_string())));
        assert!(is_color_node(&Node::Function {
            name: "rgb".to_string(),
            args: vec![],
        }));
        assert!(!is_color_node(&Node::Ident("ellipse".to_string())));
    }
}
