//! Type-directed value rendering.
//!
//! Turns a resolved [`Value`] into text under a directive's modifiers.
//! Padding is not applied here; the caller hands the result to the padding
//! engine, which needs to know whether the final scalar was numeric (for
//! zero-padding).

use mapfmt_core::PrintError;

use crate::directive::ModifierSpec;
use crate::value::Value;

/// Default fractional digits for fixed-point rendering.
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// A rendered value: its text and whether the final scalar was numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub text: String,
    pub numeric: bool,
}

impl Rendered {
    fn text(text: String) -> Self {
        Self {
            text,
            numeric: false,
        }
    }

    fn numeric(text: String) -> Self {
        Self {
            text,
            numeric: true,
        }
    }
}

/// Renders `value` under `spec`. `key` is carried for error context only.
///
/// Null, nil pointers, mappings and records are unrenderable; the error is
/// degraded to empty output by the printer when errors are suppressed.
pub(crate) fn render_value(
    value: &Value,
    spec: &ModifierSpec,
    key: &str,
) -> Result<Rendered, PrintError> {
    match value {
        Value::Text(s) => Ok(Rendered::text(s.clone())),
        Value::Int(i) => {
            if spec.wants_float() {
                #[allow(clippy::cast_precision_loss)]
                Ok(Rendered::numeric(fixed_point(*i as f64, spec)))
            } else {
                Ok(Rendered::numeric(i.to_string()))
            }
        }
        Value::Uint(u) => {
            if spec.wants_float() {
                #[allow(clippy::cast_precision_loss)]
                Ok(Rendered::numeric(fixed_point(*u as f64, spec)))
            } else {
                Ok(Rendered::numeric(u.to_string()))
            }
        }
        Value::Float(x) => Ok(Rendered::numeric(fixed_point(*x, spec))),
        Value::Bool(b) => Ok(Rendered::text(b.to_string())),
        Value::CodePoint(c) => Ok(Rendered::numeric(u32::from(*c).to_string())),
        Value::Pointer(Some(inner)) => render_value(inner, spec, key),
        Value::Seq(items) => render_items(items, spec, key),
        Value::Callable(f) => {
            let results = f();
            match results.len() {
                0 => Ok(Rendered::text(String::new())),
                1 => render_value(&results[0], spec, key),
                _ => render_items(&results, spec, key),
            }
        }
        Value::Null | Value::Pointer(None) | Value::Map(_) | Value::Record(_) => {
            Err(PrintError::UnresolvableValue {
                key: key.to_string(),
                kind: value.kind_name().to_string(),
            })
        }
    }
}

/// Renders an ordered collection: precision selects a single element,
/// otherwise the elements are joined with `", "` inside brackets.
fn render_items(items: &[Value], spec: &ModifierSpec, key: &str) -> Result<Rendered, PrintError> {
    if let Some(index) = spec.precision {
        let item = items.get(index).ok_or(PrintError::IndexOutOfRange {
            index,
            len: items.len(),
        })?;
        return render_value(item, &ModifierSpec::default(), key);
    }

    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        parts.push(render_value(item, &ModifierSpec::default(), key)?.text);
    }
    Ok(Rendered::text(format!("[{}]", parts.join(", "))))
}

fn fixed_point(x: f64, spec: &ModifierSpec) -> String {
    let precision = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
    format!("{x:.precision$}")
}
