//! The printer: configuration object and render entry points.
//!
//! A [`Printer`] holds the token character, a process/default binding
//! source, the two strategy hooks, and the error posture. It is read-only
//! during rendering, so a constructed printer can be shared freely across
//! threads.

use std::sync::Arc;

use once_cell::sync::Lazy;

use mapfmt_core::PrintError;

use crate::hooks::{FallbackRender, KeepKey, MissingKeyHandler, ValuePrinter};
use crate::pad;
use crate::resolver::Bindings;
use crate::scanner::{scan, Segment};
use crate::value::Value;

/// The default directive token.
const DEFAULT_TOKEN: char = '%';

/// A configured formatter.
///
/// The default configuration uses `%` as the token, no default bindings,
/// [`KeepKey`] semantics for unresolved keys, the built-in value dispatch,
/// and strict errors (`render` returns `Err` on the first failure). Use
/// [`Printer::set_suppress_errors`] to degrade every error to "render
/// nothing for this directive, continue".
///
/// # Examples
///
/// ```
/// use mapfmt::{Printer, Value};
///
/// let printer = Printer::new();
/// let out = printer
///     .render("Hello %Planet!", &[Value::map([("Planet", "World")])])
///     .unwrap();
/// assert_eq!(out, "Hello World!");
/// ```
pub struct Printer {
    token: char,
    default_bindings: Value,
    on_key_not_found: Option<Arc<dyn MissingKeyHandler>>,
    on_render_value: Option<Arc<dyn ValuePrinter>>,
    suppress_errors: bool,
}

impl Printer {
    /// Creates a printer with default settings.
    pub fn new() -> Self {
        Self {
            token: DEFAULT_TOKEN,
            default_bindings: Value::Null,
            on_key_not_found: None,
            on_render_value: None,
            suppress_errors: false,
        }
    }

    /// Returns the directive token character.
    pub fn token(&self) -> char {
        self.token
    }

    /// Sets the directive token character.
    pub fn set_token(&mut self, token: char) {
        self.token = token;
    }

    /// Sets the lowest-precedence binding source consulted on every call.
    pub fn set_default_bindings(&mut self, source: impl Into<Value>) {
        self.default_bindings = source.into();
    }

    /// Sets the strategy for unresolved keys. Without one, [`KeepKey`]
    /// semantics apply.
    pub fn set_on_key_not_found(&mut self, handler: impl MissingKeyHandler + 'static) {
        self.on_key_not_found = Some(Arc::new(handler));
    }

    /// Replaces the built-in value dispatch with a custom printer.
    pub fn set_on_render_value(&mut self, printer: impl ValuePrinter + 'static) {
        self.on_render_value = Some(Arc::new(printer));
    }

    /// Sets whether errors are suppressed (per-directive empty output)
    /// instead of aborting the call.
    pub fn set_suppress_errors(&mut self, suppress: bool) {
        self.suppress_errors = suppress;
    }

    /// Renders a template against the default bindings plus `sources`
    /// (later sources take precedence).
    ///
    /// # Errors
    ///
    /// With `suppress_errors` unset, the first failure aborts the call.
    /// With it set, every failure is logged at `warn` and degraded to empty
    /// output for the affected directive; the call then always succeeds.
    pub fn render(&self, template: &str, sources: &[Value]) -> Result<String, PrintError> {
        let mut out = String::with_capacity(template.len());
        self.render_to(&mut out, template, sources)?;
        Ok(out)
    }

    /// Renders a template, appending to an existing buffer.
    ///
    /// # Errors
    ///
    /// Same contract as [`Printer::render`]. On error the buffer keeps the
    /// output produced so far.
    pub fn render_to(
        &self,
        out: &mut String,
        template: &str,
        sources: &[Value],
    ) -> Result<(), PrintError> {
        let bindings = self.collect_bindings(sources)?;

        for segment in scan(template, self.token) {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Directive(directive) => {
                    // Render into a scratch buffer so a suppressed failure
                    // leaves no partial output behind.
                    let mut scratch = String::new();
                    match self.render_directive(&mut scratch, &directive, &bindings) {
                        Ok(()) => out.push_str(&scratch),
                        Err(err) if self.suppress_errors => {
                            tracing::warn!(key = %directive.key, error = %err, "directive suppressed");
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        }

        Ok(())
    }

    /// Renders a template, panicking on an unsuppressed error.
    ///
    /// This is the convenience wrapper over [`Printer::render`] for callers
    /// that treat formatting failures as programming errors.
    ///
    /// # Panics
    ///
    /// Panics if `render` returns an error (never with `suppress_errors`).
    pub fn sprintf(&self, template: &str, sources: &[Value]) -> String {
        match self.render(template, sources) {
            Ok(out) => out,
            Err(err) => panic!("mapfmt: {err}"),
        }
    }

    /// Merges the default source and call sources, last write wins. Invalid
    /// sources are skipped (suppressed) or abort the call (strict).
    fn collect_bindings(&self, sources: &[Value]) -> Result<Bindings, PrintError> {
        let mut bindings = Bindings::new();
        for source in std::iter::once(&self.default_bindings).chain(sources) {
            match bindings.merge(source) {
                Ok(()) => {}
                Err(err) if self.suppress_errors => {
                    tracing::warn!(error = %err, "binding source skipped");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(bindings)
    }

    fn render_directive(
        &self,
        out: &mut String,
        directive: &crate::directive::Directive,
        bindings: &Bindings,
    ) -> Result<(), PrintError> {
        if let Some(value) = bindings.get(&directive.key) {
            if let Some(custom) = &self.on_render_value {
                return custom.print(out, self, &directive.prefix, &directive.key, value);
            }
            let rendered = crate::render::render_value(value, &directive.spec, &directive.key)?;
            pad::pad_into(out, &rendered.text, &directive.spec, rendered.numeric);
            return Ok(());
        }

        let fallback = FallbackRender::new(&directive.spec, &directive.key);
        match &self.on_key_not_found {
            Some(handler) => handler.handle(out, self, &directive.prefix, &directive.key, &fallback),
            None => KeepKey.handle(out, self, &directive.prefix, &directive.key, &fallback),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide printer behind the free functions. It suppresses errors
/// so ad-hoc formatting degrades gracefully instead of failing.
static DEFAULT_PRINTER: Lazy<Printer> = Lazy::new(|| {
    let mut printer = Printer::new();
    printer.set_suppress_errors(true);
    printer
});

/// Formats a template with the process-wide lenient printer.
///
/// Errors are suppressed: an invalid source or unrenderable value produces
/// empty output for the affected directive. Use a [`Printer`] (or [`render`])
/// for strict error reporting.
pub fn sprintf(template: &str, sources: &[Value]) -> String {
    DEFAULT_PRINTER.sprintf(template, sources)
}

/// Formats a template with a default strict printer, returning the first
/// error encountered.
///
/// # Errors
///
/// Any [`PrintError`] raised by source merging or value rendering.
pub fn render(template: &str, sources: &[Value]) -> Result<String, PrintError> {
    Printer::new().render(template, sources)
}
