//! Padding and alignment.
//!
//! Width is a minimum field width, never a truncation bound. Each padded
//! region tiles the fill sequence from its own first character; the two
//! regions do not share a cycle.

use crate::directive::{Alignment, ModifierSpec};

/// Pads `text` to the spec's width and appends it to `out`.
///
/// `numeric` marks values that honor zero-padding: when the width modifier
/// began with `0`, the left region is filled with `'0'` regardless of the
/// configured fill sequence.
pub(crate) fn pad_into(out: &mut String, text: &str, spec: &ModifierSpec, numeric: bool) {
    let len = text.chars().count();
    if spec.width <= len {
        out.push_str(text);
        return;
    }

    let pad = spec.width - len;
    let (left, right) = match spec.alignment {
        Alignment::Right => (pad, 0),
        Alignment::Left => (0, pad),
        // Odd leftover goes to the right side.
        Alignment::Center => (pad / 2, pad - pad / 2),
    };

    let left_fill = if numeric && spec.zero_pad {
        "0"
    } else {
        spec.fill.as_str()
    };
    tile(out, left_fill, left);
    out.push_str(text);
    tile(out, &spec.fill, right);
}

/// Appends `count` characters of `fill`, restarting the sequence from its
/// first character.
fn tile(out: &mut String, fill: &str, count: usize) {
    if count == 0 || fill.is_empty() {
        return;
    }
    out.extend(fill.chars().cycle().take(count));
}
