//! Background / gradient / box-shadow codec for the Glaze design tool.
//!
//! This crate is the bidirectional transform between CSS shorthand text
//! (`background`, its sub-properties, and `box-shadow`) and the structured
//! layer model the GUI edits:
//!
//! - **Value AST**: property values are tokenized with `cssparser` into a
//!   small node tree; inline comments come back as part of the parse
//!   result because the shorthand smuggles `background-clip: text` through
//!   a comment marker
//! - **Fill model**: an exhaustive tagged union of
//!   none / image / solid / linear / radial, with solid fills synthesized
//!   as degenerate gradients on the wire
//! - **Stop interpolation**: missing gradient-stop offsets are resolved at
//!   parse time so the editor always sees concrete offsets
//! - **Shadows**: the analogous model for `box-shadow`
//!
//! Parsing never fails on malformed input: `from_css` entry points return
//! `None` or an empty instance and the caller moves on.
//!
//! # Example
//!
//! ```
//! use glaze_style::prelude::*;
//!
//! let bg = Background::from_css("url(a.png), linear-gradient(red, blue)");
//! assert_eq!(bg.layers.len(), 2);
//!
//! let shadows = BoxShadows::from_css("2px 4px #fff");
//! assert_eq!(shadows.len(), 1);
//! ```

pub mod background;
pub mod parser;
pub mod shadow;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::background::{Background, BackgroundLayer, Fill, interpolate_stops};
    pub use crate::parser::{Node, ParsedValue, generate, parse_value, split_top_level_commas};
    pub use crate::shadow::{BoxShadow, BoxShadows};
    pub use crate::types::{Dim, Stop};
}
