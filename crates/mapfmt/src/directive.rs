//! Directive grammar: the modifier prefix and key identifier.
//!
//! A directive is the text following the token character, e.g. the
//! `|AB10.3f` + `Planet` in `%|AB10.3fPlanet`. The grammar, every element
//! optional and in this order: alignment marker, fill sequence, width
//! (a leading `0` switches numeric rendering to zero-padding), `.`-precision,
//! `f` type hint, key identifier.
//!
//! Parsing is two-phase. The modifier interpretation is greedy: fill runs up
//! to the first digit or `.` and is only committed when a non-empty key
//! follows the modifiers. Otherwise the parser retries the same text as a
//! bare key, and if the identifier run is still empty the whole span is not
//! a directive at all (the scanner then falls back to literal text). This is
//! why `%AB10.3f` is fill + width + precision + key `f`, `%Number1` is the
//! bare key `Number1`, and `%1` never resolves a binding.

/// Horizontal alignment of a rendered value inside its field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pad on the left (`+` marker, also the default).
    #[default]
    Right,
    /// Pad on the right (`-` marker).
    Left,
    /// Split padding, odd leftover on the right (`|` marker).
    Center,
}

/// The parsed modifier prefix of a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierSpec {
    /// Field alignment. Defaults to [`Alignment::Right`].
    pub alignment: Alignment,
    /// Fill sequence tiled into each padded region. Defaults to one space.
    pub fill: String,
    /// Minimum field width in characters. Never truncates.
    pub width: usize,
    /// Precision: fractional digits for numeric values, element selector for
    /// sequences and multi-result callables. `.` with no digits is 0.
    pub precision: Option<usize>,
    /// Width began with `0`: numeric values zero-pad their left region.
    pub zero_pad: bool,
    /// Trailing type hint (`f` forces fixed-point rendering).
    pub type_hint: Option<char>,
}

impl Default for ModifierSpec {
    fn default() -> Self {
        Self {
            alignment: Alignment::Right,
            fill: " ".to_string(),
            width: 0,
            precision: None,
            zero_pad: false,
            type_hint: None,
        }
    }
}

impl ModifierSpec {
    /// Returns `true` if numeric values should be rendered fixed-point.
    pub fn wants_float(&self) -> bool {
        self.precision.is_some() || self.type_hint == Some('f')
    }
}

/// A parsed directive: raw prefix text, key, and the decoded modifiers.
///
/// The raw prefix is kept verbatim so the `KeepKey` strategy and custom
/// hooks can reproduce the original directive text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// The modifier text between the token and the key, verbatim.
    pub prefix: String,
    /// The key identifier.
    pub key: String,
    /// The decoded modifier prefix.
    pub spec: ModifierSpec,
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Maximal identifier run starting at `pos`; returns the end position.
fn ident_run(chars: &[char], pos: usize) -> usize {
    let mut end = pos;
    if end < chars.len() && is_ident_start(chars[end]) {
        end += 1;
        while end < chars.len() && is_ident_continue(chars[end]) {
            end += 1;
        }
    }
    end
}

/// Parses a directive from the characters following the token.
///
/// Returns the directive and the number of characters consumed, or `None`
/// when the text does not form a directive (the caller treats the token as
/// literal text or an escape).
pub(crate) fn parse(chars: &[char]) -> Option<(Directive, usize)> {
    let mut pos = 0;
    let mut alignment = Alignment::default();
    match chars.first() {
        Some('+') => {
            alignment = Alignment::Right;
            pos = 1;
        }
        Some('-') => {
            alignment = Alignment::Left;
            pos = 1;
        }
        Some('|') => {
            alignment = Alignment::Center;
            pos = 1;
        }
        _ => {}
    }

    if let Some(parsed) = parse_with_modifiers(chars, pos, alignment) {
        return Some(parsed);
    }

    // Bare key: no modifiers beyond the alignment marker.
    let key_end = ident_run(chars, pos);
    if key_end == pos {
        return None;
    }
    let spec = ModifierSpec {
        alignment,
        ..ModifierSpec::default()
    };
    let directive = Directive {
        prefix: chars[..pos].iter().collect(),
        key: chars[pos..key_end].iter().collect(),
        spec,
    };
    Some((directive, key_end))
}

/// The greedy modifier interpretation: fill, width, precision, type hint,
/// then a mandatory non-empty key.
fn parse_with_modifiers(
    chars: &[char],
    start: usize,
    alignment: Alignment,
) -> Option<(Directive, usize)> {
    let mut pos = start;

    // Fill runs to the first digit or '.'; whitespace or end of input means
    // there are no modifiers here.
    let fill_start = pos;
    while pos < chars.len() && !chars[pos].is_ascii_digit() && chars[pos] != '.' {
        if chars[pos].is_whitespace() {
            return None;
        }
        pos += 1;
    }
    if pos == chars.len() {
        return None;
    }
    let fill: String = chars[fill_start..pos].iter().collect();

    let width_start = pos;
    while pos < chars.len() && chars[pos].is_ascii_digit() {
        pos += 1;
    }
    let width_digits = &chars[width_start..pos];
    let width = if width_digits.is_empty() {
        0
    } else {
        width_digits.iter().collect::<String>().parse().ok()?
    };
    let zero_pad = width_digits.first() == Some(&'0');

    let mut precision = None;
    if chars.get(pos) == Some(&'.') {
        pos += 1;
        let digits_start = pos;
        while pos < chars.len() && chars[pos].is_ascii_digit() {
            pos += 1;
        }
        let digits = &chars[digits_start..pos];
        precision = if digits.is_empty() {
            Some(0)
        } else {
            Some(digits.iter().collect::<String>().parse().ok()?)
        };
    }

    let mut type_hint = None;
    if chars.get(pos) == Some(&'f') && chars.get(pos + 1).copied().is_some_and(is_ident_continue) {
        type_hint = Some('f');
        pos += 1;
    }

    let key_end = ident_run(chars, pos);
    if key_end == pos {
        return None;
    }

    let mut spec = ModifierSpec {
        alignment,
        width,
        precision,
        zero_pad,
        type_hint,
        ..ModifierSpec::default()
    };
    if !fill.is_empty() {
        spec.fill = fill;
    }
    let directive = Directive {
        prefix: chars[..pos].iter().collect(),
        key: chars[pos..key_end].iter().collect(),
        spec,
    };
    Some((directive, key_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(s: &str) -> Option<(Directive, usize)> {
        let chars: Vec<char> = s.chars().collect();
        parse(&chars)
    }

    #[test]
    fn test_bare_key() {
        let (d, consumed) = parse_str("Planet!").unwrap();
        assert_eq!(d.key, "Planet");
        assert_eq!(d.prefix, "");
        assert_eq!(d.spec, ModifierSpec::default());
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_key_with_trailing_digits_is_bare() {
        // Digits terminate the modifier attempt without a key, so the whole
        // run is the identifier.
        let (d, _) = parse_str("Number1 + ...").unwrap();
        assert_eq!(d.key, "Number1");
        assert_eq!(d.spec.width, 0);
    }

    #[test]
    fn test_width_only() {
        let (d, _) = parse_str("10Planet!").unwrap();
        assert_eq!(d.key, "Planet");
        assert_eq!(d.prefix, "10");
        assert_eq!(d.spec.width, 10);
        assert_eq!(d.spec.alignment, Alignment::Right);
        assert!(!d.spec.zero_pad);
    }

    #[test]
    fn test_alignment_markers() {
        let (d, _) = parse_str("+10Planet").unwrap();
        assert_eq!(d.spec.alignment, Alignment::Right);
        let (d, _) = parse_str("-10Planet").unwrap();
        assert_eq!(d.spec.alignment, Alignment::Left);
        let (d, _) = parse_str("|10Planet").unwrap();
        assert_eq!(d.spec.alignment, Alignment::Center);
    }

    #[test]
    fn test_fill_after_alignment() {
        let (d, _) = parse_str("|AB10Planet").unwrap();
        assert_eq!(d.spec.alignment, Alignment::Center);
        assert_eq!(d.spec.fill, "AB");
        assert_eq!(d.spec.width, 10);
        assert_eq!(d.key, "Planet");
        assert_eq!(d.prefix, "|AB10");
    }

    #[test]
    fn test_alignment_marker_as_fill() {
        let (d, _) = parse_str("--10Planet").unwrap();
        assert_eq!(d.spec.alignment, Alignment::Left);
        assert_eq!(d.spec.fill, "-");
        let (d, _) = parse_str("+-10Planet").unwrap();
        assert_eq!(d.spec.alignment, Alignment::Right);
        assert_eq!(d.spec.fill, "-");
    }

    #[test]
    fn test_token_char_can_be_fill() {
        let (d, _) = parse_str("%10Percent").unwrap();
        assert_eq!(d.spec.fill, "%");
        assert_eq!(d.spec.width, 10);
        assert_eq!(d.key, "Percent");
    }

    #[test]
    fn test_precision_without_width() {
        let (d, _) = parse_str(".2f").unwrap();
        assert_eq!(d.key, "f");
        assert_eq!(d.spec.precision, Some(2));
        assert_eq!(d.spec.width, 0);
        assert_eq!(d.prefix, ".2");
    }

    #[test]
    fn test_precision_dot_without_digits_is_zero() {
        let (d, _) = parse_str(".Planets!").unwrap();
        assert_eq!(d.spec.precision, Some(0));
        assert_eq!(d.key, "Planets");
    }

    #[test]
    fn test_width_and_precision() {
        let (d, _) = parse_str("2.3f").unwrap();
        assert_eq!(d.spec.width, 2);
        assert_eq!(d.spec.precision, Some(3));
        assert_eq!(d.key, "f");
    }

    #[test]
    fn test_zero_padded_width() {
        let (d, _) = parse_str("06.3f").unwrap();
        assert_eq!(d.spec.width, 6);
        assert!(d.spec.zero_pad);
    }

    #[test]
    fn test_fill_width_precision_key() {
        let (d, _) = parse_str("AB10.3f").unwrap();
        assert_eq!(d.spec.fill, "AB");
        assert_eq!(d.spec.width, 10);
        assert_eq!(d.spec.precision, Some(3));
        assert_eq!(d.key, "f");
        assert_eq!(d.prefix, "AB10.3");
    }

    #[test]
    fn test_type_hint_consumed_before_key() {
        let (d, _) = parse_str(".2fValue").unwrap();
        assert_eq!(d.spec.type_hint, Some('f'));
        assert_eq!(d.key, "Value");
    }

    #[test]
    fn test_digits_only_is_not_a_directive() {
        assert!(parse_str("1").is_none());
        assert!(parse_str("10 ").is_none());
    }

    #[test]
    fn test_whitespace_is_not_a_directive() {
        assert!(parse_str(" Bar").is_none());
        assert!(parse_str("").is_none());
    }

    #[test]
    fn test_key_stops_at_non_identifier() {
        let (d, consumed) = parse_str("Planet Bar").unwrap();
        assert_eq!(d.key, "Planet");
        assert_eq!(consumed, 6);
    }
}
