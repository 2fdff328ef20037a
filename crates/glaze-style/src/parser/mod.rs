//! CSS value parsing module.

mod keywords;
mod value_ast;

pub use keywords::{
    is_attachment_keyword, is_box_keyword, is_color_node, is_named_color, is_position_keyword,
    is_radial_extent_keyword, is_repeat_keyword, is_size_keyword,
};
pub use value_ast::{
    Node, ParsedValue, generate, parse_value, split_comma_groups, split_top_level_commas,
};
