//! Template scanner.
//!
//! Splits a template into literal spans and directive spans bounded by the
//! token character. At each token the scanner first attempts a full
//! directive parse; only when that fails does it consider the escape rules.
//! The ordering matters: in `%%10Percent` the second token is consumed as
//! the directive's fill sequence, while in `%% Bar` the pair collapses to a
//! single literal token.

use crate::directive::{self, Directive};

/// A span produced by scanning a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text reproduced verbatim.
    Text(String),
    /// A parsed directive to be resolved and rendered.
    Directive(Directive),
}

/// Scans a template into an ordered sequence of [`Segment`]s.
///
/// A token character that does not introduce a valid directive is literal
/// text; two consecutive tokens collapse to one literal token.
pub fn scan(template: &str, token: char) -> Vec<Segment> {
    let chars: Vec<char> = template.chars().collect();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != token {
            literal.push(chars[i]);
            i += 1;
            continue;
        }

        if let Some((parsed, consumed)) = directive::parse(&chars[i + 1..]) {
            if !literal.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Directive(parsed));
            i += 1 + consumed;
        } else if chars.get(i + 1) == Some(&token) {
            // Escape: two tokens become one literal token.
            literal.push(token);
            i += 2;
        } else {
            literal.push(token);
            i += 1;
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }

    segments
}
