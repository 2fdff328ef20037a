//! Generic CSS value AST built on the `cssparser` tokenizer.
//!
//! The codec never pattern-matches raw tokens. Instead a property value is
//! parsed once into a small [`Node`] tree, and the model types classify
//! nodes against the background / box-shadow grammars. [`generate`] turns
//! any subtree back into CSS text, which lets values the codec does not
//! model (asset `var()` references, exotic color notations) survive a
//! round trip verbatim.

use crate::{Error, Result};
use cssparser::{ParseError as CssParseError, Parser, ParserInput, ToCss, Token};

/// One node of a parsed CSS property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The root of a parsed value: its top-level component nodes.
    Value(Vec<Node>),
    /// A function call such as `linear-gradient(...)` or `var(...)`.
    Function { name: String, args: Vec<Node> },
    /// A bare identifier.
    Ident(String),
    /// A number with a unit, e.g. `45deg` or `10px`.
    Dimension { value: f32, unit: String },
    /// A percentage. The value is in percent units (`50%` stores 50.0).
    Percentage(f32),
    /// A unitless number.
    Number(f32),
    /// A hex color literal, stored with its leading `#`.
    Hash(String),
    /// A single-character delimiter, e.g. the `/` separating position and size.
    Operator(char),
    /// A top-level comma inside a function argument list.
    Comma,
    /// An unquoted `url(...)` value; holds the bare URL text.
    Url(String),
    /// A quoted string.
    QuotedString(String),
    /// Any token the codec has no structured form for, kept as verbatim text.
    Raw(String),
}

/// The result of parsing one property value: the node tree plus every
/// inline `/* ... */` comment encountered, in source order.
///
/// Comments are first-class output rather than a side channel because the
/// `background` shorthand smuggles `background-clip: text` through a
/// structured comment marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    pub root: Node,
    pub comments: Vec<String>,
}

/// Parse a CSS property value string into a [`ParsedValue`].
///
/// Returns `Err` only when the token stream cannot be represented at all
/// (unterminated strings, bad URLs, block tokens that are invalid inside a
/// property value). Unrecognized but well-formed tokens become
/// [`Node::Raw`] so callers can decide what to do with them.
pub fn parse_value(css: &str) -> Result<ParsedValue> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut comments = vec![];

    let nodes = parse_nodes(&mut parser, &mut comments)
        .map_err(|e| Error::parse(format!("{:?}", e)))?;

    Ok(ParsedValue {
        root: Node::Value(nodes),
        comments,
    })
}

fn parse_nodes<'i>(
    parser: &mut Parser<'i, '_>,
    comments: &mut Vec<String>,
) -> std::result::Result<Vec<Node>, CssParseError<'i, ()>> {
    let mut nodes = vec![];

    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        let node = match token {
            Token::WhiteSpace(_) => continue,
            Token::Comment(text) => {
                comments.push(text.to_string());
                continue;
            }
            Token::Function(name) => {
                let name = name.to_string();
                let args = parser.parse_nested_block(|p| parse_nodes(p, comments))?;
                Node::Function { name, args }
            }
            Token::ParenthesisBlock => {
                let args = parser.parse_nested_block(|p| parse_nodes(p, comments))?;
                Node::Function {
                    name: String::new(),
                    args,
                }
            }
            Token::Ident(name) => Node::Ident(name.to_string()),
            Token::Dimension { value, unit, .. } => Node::Dimension {
                value,
                unit: unit.to_string(),
            },
            Token::Percentage { unit_value, .. } => Node::Percentage(unit_value * 100.0),
            Token::Number { value, .. } => Node::Number(value),
            Token::Hash(hash) | Token::IDHash(hash) => Node::Hash(format!("#{}", hash)),
            Token::UnquotedUrl(url) => Node::Url(url.to_string()),
            Token::QuotedString(s) => Node::QuotedString(s.to_string()),
            Token::Comma => Node::Comma,
            Token::Delim(c) => Node::Operator(c),
            Token::Colon => Node::Operator(':'),
            Token::Semicolon => Node::Operator(';'),
            Token::BadUrl(_)
            | Token::BadString(_)
            | Token::CurlyBracketBlock
            | Token::SquareBracketBlock
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket => {
                return Err(parser.new_custom_error(()));
            }
            other => Node::Raw(other.to_css_string()),
        };

        nodes.push(node);
    }

    Ok(nodes)
}

/// Re-serialize a node subtree to CSS text.
pub fn generate(node: &Node) -> String {
    match node {
        Node::Value(children) => join_nodes(children),
        Node::Function { name, args } => format!("{}({})", name, join_nodes(args)),
        Node::Ident(name) => name.clone(),
        Node::Dimension { value, unit } => format!("{}{}", value, unit),
        Node::Percentage(value) => format!("{}%", value),
        Node::Number(value) => value.to_string(),
        Node::Hash(text) => text.clone(),
        Node::Operator(c) => c.to_string(),
        Node::Comma => ",".to_string(),
        Node::Url(url) => format!("url({})", url),
        Node::QuotedString(s) => format!("\"{}\"", s),
        Node::Raw(text) => text.clone(),
    }
}

fn join_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        if matches!(node, Node::Comma) {
            out.push(',');
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&generate(node));
    }
    out
}

/// Split a node list at top-level [`Node::Comma`] separators.
///
/// Used for gradient argument lists, where each group is either a prelude
/// (angle, shape/size/position) or one color stop.
pub fn split_comma_groups(nodes: &[Node]) -> Vec<Vec<&Node>> {
    let mut groups = vec![];
    let mut current = vec![];
    for node in nodes {
        if matches!(node, Node::Comma) {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(node);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Split raw CSS text at top-level commas, honoring parentheses, quoted
/// strings and comments so that commas inside gradient argument lists (or
/// inside the clip marker comment) do not separate layers.
///
/// Empty segments are dropped.
pub fn split_top_level_commas(input: &str) -> Vec<String> {
    let bytes = input.as_bytes();
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' | b'\'' => {
                quote = Some(b);
                i += 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                // Skip the whole comment; an unterminated one runs to the end.
                i = match input[i + 2..].find("*/") {
                    Some(off) => i + 2 + off + 2,
                    None => bytes.len(),
                };
            }
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            b',' if depth == 0 => {
                let segment = input[start..i].trim();
                if !segment.is_empty() {
                    parts.push(segment.to_string());
                }
                start = i + 1;
                i += 1;
            }
            _ => i += 1,
        }
    }

    let tail = input[start..].trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_nodes(css: &str) -> Vec<Node> {
        match parse_value(css).unwrap().root {
            Node::Value(nodes) => nodes,
            other => panic!("expected a Value root, got {:?}", other),
        }
    }

    #[test]
    fn parse_simple_nodes() {
        let nodes = root_nodes("10px 50% center #fff");
        assert_eq!(
            nodes,
            vec![
                Node::Dimension {
                    value: 10.0,
                    unit: "px".to_string()
                },
                Node::Percentage(50.0),
                Node::Ident("center".to_string()),
                Node::Hash("#fff".to_string()),
            ]
        );
    }

    #[test]
    fn parse_function_with_args() {
        let nodes = root_nodes("linear-gradient(45deg, red)");
        assert_eq!(nodes.len(), 1);
        let Node::Function { name, args } = &nodes[0] else {
            panic!("expected a function node");
        };
        assert_eq!(name, "linear-gradient");
        assert_eq!(args.len(), 3); // 45deg , red
        assert!(matches!(args[1], Node::Comma));
    }

    #[test]
    fn comments_are_captured_in_order() {
        let parsed = parse_value("red /* first */ 10px /* second */").unwrap();
        assert_eq!(parsed.comments, vec![" first ", " second "]);
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse_value("url(bad url)").is_err());
        assert!(parse_value("{ nope }").is_err());
    }

    #[test]
    fn generate_round_trips_a_gradient() {
        let parsed = parse_value("repeating-linear-gradient(90deg, red 10px, blue 20px)").unwrap();
        assert_eq!(
            generate(&parsed.root),
            "repeating-linear-gradient(90deg, red 10px, blue 20px)"
        );
    }

    #[test]
    fn generate_preserves_var_references() {
        let parsed = parse_value("var(--image-logo)").unwrap();
        assert_eq!(generate(&parsed.root), "var(--image-logo)");
    }

    #[test]
    fn split_commas_ignores_function_args() {
        let parts = split_top_level_commas("url(a.png), linear-gradient(red, blue), none");
        assert_eq!(
            parts,
            vec!["url(a.png)", "linear-gradient(red, blue)", "none"]
        );
    }

    #[test]
    fn split_commas_ignores_comments_and_strings() {
        let parts = split_top_level_commas("red /* a, b */ fixed, url(\"x,y.png\")");
        assert_eq!(parts, vec!["red /* a, b */ fixed", "url(\"x,y.png\")"]);
    }

    #[test]
    fn split_comma_groups_drops_empty_groups() {
        let nodes = root_nodes("a , , b");
        let groups = split_comma_groups(&nodes);
        assert_eq!(groups.len(), 2);
    }
}
