//! # mapfmt
//!
//! A printf-style string formatter with named keys instead of positional
//! arguments. Directives are introduced by a token character (default `%`)
//! and resolved against ordered binding sources; inline modifiers control
//! alignment, fill, width, and precision:
//!
//! ```
//! use mapfmt::{sprintf, Value};
//!
//! let out = sprintf(
//!     "Hello %10Planet!",
//!     &[Value::map([("Planet", "Earth")])],
//! );
//! assert_eq!(out, "Hello      Earth!");
//! ```
//!
//! Later sources override earlier ones, values can be scalars, sequences,
//! pointers, or zero-argument callables, and unresolved keys are handled by
//! a replaceable strategy ([`KeepKey`] by default):
//!
//! ```
//! use mapfmt::{DefaultValue, Printer, Value};
//!
//! let mut printer = Printer::new();
//! printer.set_on_key_not_found(DefaultValue::new("Mars"));
//! assert_eq!(printer.sprintf("Foo %Planet!", &[]), "Foo Mars!");
//! ```
//!
//! The strict API is [`Printer::render`], which returns a
//! [`Result`](PrintError); [`Printer::set_suppress_errors`] degrades every
//! failure to empty output for the affected directive instead.

pub mod directive;
pub mod hooks;
mod pad;
pub mod printer;
mod render;
pub mod resolver;
pub mod scanner;
pub mod value;

pub use directive::{Alignment, Directive, ModifierSpec};
pub use hooks::{ClearKey, DefaultValue, FallbackRender, KeepKey, MissingKeyHandler, ValuePrinter};
pub use mapfmt_core::PrintError;
pub use printer::{render, sprintf, Printer};
pub use resolver::Bindings;
pub use scanner::{scan, Segment};
pub use value::{CallableFn, Value};
