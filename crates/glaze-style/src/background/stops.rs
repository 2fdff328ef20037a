//! Gradient stop parsing and offset interpolation.

use crate::parser::{Node, generate, is_color_node};
use crate::types::{Dim, Stop};

/// Parse one color-stop group.
///
/// The color token and the offset token are extracted independently, so
/// `red 50%` and `50% red` both parse. A group without an offset yields a
/// stop with `dim: None`, to be resolved by [`interpolate_stops`]; a group
/// without a color is not a stop at all.
pub(crate) fn parse_stop(group: &[&Node]) -> Option<Stop> {
    let color = group.iter().find(|n| is_color_node(n)).map(|n| generate(n))?;
    let dim = group.iter().find_map(|n| Dim::from_node(n));
    Some(Stop { color, dim })
}

/// Fill in missing gradient-stop offsets.
///
/// CSS allows stops without an explicit offset; browsers place them by
/// spreading each run of unresolved stops evenly between its surrounding
/// resolved neighbors. The GUI editor needs concrete offsets for every
/// stop, so the same placement is computed here at parse time:
///
/// 1. If no offset is missing, the stops are left unchanged.
/// 2. A missing first offset becomes 0%, a missing last offset 100%.
/// 3. Every stop with a resolved offset is an anchor; for each pair of
///    consecutive anchors, the stops strictly between them are placed by
///    uniform linear interpolation over the index gap.
///
/// Interpolated offsets take the unit shared by both anchors, or `%` when
/// the anchors disagree.
pub fn interpolate_stops(stops: &mut [Stop]) {
    if stops.is_empty() || stops.iter().all(|s| s.dim.is_some()) {
        return;
    }

    if stops[0].dim.is_none() {
        stops[0].dim = Some(Dim::percent(0.0));
    }
    let last = stops.len() - 1;
    if stops[last].dim.is_none() {
        stops[last].dim = Some(Dim::percent(100.0));
    }

    let anchors: Vec<(usize, f32, String)> = stops
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.dim.as_ref().map(|d| (i, d.value, d.unit.clone())))
        .collect();

    for pair in anchors.windows(2) {
        let (i1, p1, ref u1) = pair[0];
        let (i2, p2, ref u2) = pair[1];
        for i in i1 + 1..i2 {
            let t = (i - i1) as f32 / (i2 - i1) as f32;
            let unit = if u1 == u2 { u1.clone() } else { "%".to_string() };
            stops[i].dim = Some(Dim::new(p1 + (p2 - p1) * t, unit));
        }
    }
}
