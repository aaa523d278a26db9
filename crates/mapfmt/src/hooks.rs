//! Caller-replaceable rendering strategies.
//!
//! Two seams are exposed as one-method traits rather than nullable function
//! pointers: [`MissingKeyHandler`] decides what an unresolved directive
//! emits, and [`ValuePrinter`] can replace the entire built-in dispatch for
//! resolved values. Both are implemented for plain closures with the
//! matching signature.

use mapfmt_core::PrintError;

use crate::directive::ModifierSpec;
use crate::pad;
use crate::printer::Printer;
use crate::render;
use crate::value::Value;

/// A handle to the default rendering pipeline, handed to
/// [`MissingKeyHandler`] implementations so custom strategies can still
/// render a substitute value honoring the directive's modifiers.
pub struct FallbackRender<'a> {
    spec: &'a ModifierSpec,
    key: &'a str,
}

impl<'a> FallbackRender<'a> {
    pub(crate) fn new(spec: &'a ModifierSpec, key: &'a str) -> Self {
        Self { spec, key }
    }

    /// Renders `value` through the built-in dispatch and padding engine,
    /// exactly as if it had been the resolved binding.
    pub fn render(&self, out: &mut String, value: &Value) -> Result<(), PrintError> {
        let rendered = render::render_value(value, self.spec, self.key)?;
        pad::pad_into(out, &rendered.text, self.spec, rendered.numeric);
        Ok(())
    }
}

/// Strategy invoked when a directive's key resolves to no binding.
pub trait MissingKeyHandler: Send + Sync {
    /// Writes this strategy's output for the unresolved directive.
    ///
    /// `prefix` and `key` are the directive's raw modifier text and key;
    /// `fallback` renders substitute values default-style.
    fn handle(
        &self,
        out: &mut String,
        printer: &Printer,
        prefix: &str,
        key: &str,
        fallback: &FallbackRender<'_>,
    ) -> Result<(), PrintError>;
}

impl<F> MissingKeyHandler for F
where
    F: Fn(&mut String, &Printer, &str, &str, &FallbackRender<'_>) -> Result<(), PrintError>
        + Send
        + Sync,
{
    fn handle(
        &self,
        out: &mut String,
        printer: &Printer,
        prefix: &str,
        key: &str,
        fallback: &FallbackRender<'_>,
    ) -> Result<(), PrintError> {
        self(out, printer, prefix, key, fallback)
    }
}

/// Re-emits the original directive text unchanged. This is also the implicit
/// behavior when no strategy is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepKey;

impl MissingKeyHandler for KeepKey {
    fn handle(
        &self,
        out: &mut String,
        printer: &Printer,
        prefix: &str,
        key: &str,
        _fallback: &FallbackRender<'_>,
    ) -> Result<(), PrintError> {
        out.push(printer.token());
        out.push_str(prefix);
        out.push_str(key);
        Ok(())
    }
}

/// Emits nothing for unresolved directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearKey;

impl MissingKeyHandler for ClearKey {
    fn handle(
        &self,
        _out: &mut String,
        _printer: &Printer,
        _prefix: &str,
        _key: &str,
        _fallback: &FallbackRender<'_>,
    ) -> Result<(), PrintError> {
        Ok(())
    }
}

/// Renders a fixed substitute value through the normal pipeline, respecting
/// the directive's modifiers.
#[derive(Debug, Clone)]
pub struct DefaultValue(Value);

impl DefaultValue {
    /// Creates the strategy with the given substitute value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl MissingKeyHandler for DefaultValue {
    fn handle(
        &self,
        out: &mut String,
        _printer: &Printer,
        _prefix: &str,
        _key: &str,
        fallback: &FallbackRender<'_>,
    ) -> Result<(), PrintError> {
        fallback.render(out, &self.0)
    }
}

/// Strategy that replaces the built-in dispatch (and padding) for resolved
/// values. It receives the raw modifier prefix and is responsible for all
/// output of the directive.
pub trait ValuePrinter: Send + Sync {
    /// Writes the rendering of `value` for the directive `prefix`/`key`.
    fn print(
        &self,
        out: &mut String,
        printer: &Printer,
        prefix: &str,
        key: &str,
        value: &Value,
    ) -> Result<(), PrintError>;
}

impl<F> ValuePrinter for F
where
    F: Fn(&mut String, &Printer, &str, &str, &Value) -> Result<(), PrintError> + Send + Sync,
{
    fn print(
        &self,
        out: &mut String,
        printer: &Printer,
        prefix: &str,
        key: &str,
        value: &Value,
    ) -> Result<(), PrintError> {
        self(out, printer, prefix, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_key_reemits_directive() {
        let printer = Printer::new();
        let spec = ModifierSpec::default();
        let fallback = FallbackRender::new(&spec, "Planet");
        let mut out = String::new();
        KeepKey
            .handle(&mut out, &printer, "10", "Planet", &fallback)
            .unwrap();
        assert_eq!(out, "%10Planet");
    }

    #[test]
    fn test_clear_key_emits_nothing() {
        let printer = Printer::new();
        let spec = ModifierSpec::default();
        let fallback = FallbackRender::new(&spec, "Planet");
        let mut out = String::new();
        ClearKey
            .handle(&mut out, &printer, "", "Planet", &fallback)
            .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_default_value_honors_modifiers() {
        let printer = Printer::new();
        let spec = ModifierSpec {
            width: 10,
            ..ModifierSpec::default()
        };
        let fallback = FallbackRender::new(&spec, "Planet");
        let mut out = String::new();
        DefaultValue::new("Mars")
            .handle(&mut out, &printer, "10", "Planet", &fallback)
            .unwrap();
        assert_eq!(out, "      Mars");
    }
}
