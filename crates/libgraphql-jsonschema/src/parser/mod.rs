//! The line-driven SDL parser.
//!
//! [`SchemaParser`] walks a [`LineCursor`](crate::LineCursor) one line at a
//! time, dispatching on each line's [`LineKind`](crate::line_classifier::LineKind)
//! and assembling a [`Schema`](crate::Schema) per fragment. Fragments parsed
//! together are merged in order, last write wins.

mod descriptions;
mod diagnostic;
mod parse_error;
mod schema_parser;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use schema_parser::SchemaParser;

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests;
