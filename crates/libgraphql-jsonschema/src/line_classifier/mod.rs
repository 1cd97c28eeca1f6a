//! Lexical classification of single SDL lines.
//!
//! The grammar is an explicit, ordered table of `(category, pattern)` pairs
//! ([`LINE_RULES`]); the first pattern that matches a line decides its
//! [`LineKind`]. A second, independent table ([`NULLABILITY_RULES`]) decides
//! where the `!` markers of a field declaration sit.

mod grammar;
mod line_kind;
mod nullability_shape;

pub use grammar::LINE_RULES;
pub use grammar::NULLABILITY_RULES;
pub use grammar::classify;
pub use grammar::classify_field;
pub use grammar::classify_nullability;
pub use grammar::is_field_deprecated;
pub use line_kind::FieldKind;
pub use line_kind::LineKind;
pub use nullability_shape::NullabilityShape;
