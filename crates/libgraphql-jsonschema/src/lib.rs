//! Parses GraphQL schema definition language (SDL) files with a line-oriented
//! grammar and projects the operations they declare into JSON Schema
//! documents.
//!
//! The pipeline is:
//!
//! 1. [`file_reader::discover_schema_files`] finds the schema fragments under
//!    a root path.
//! 2. Each fragment is loaded into a [`LineCursor`] and handed to a
//!    [`SchemaParser`], which classifies every line (see [`line_classifier`])
//!    and assembles a per-fragment [`Schema`].
//! 3. Fragments are merged (last write wins) into one aggregate [`Schema`].
//! 4. A [`SchemaProjector`] turns one named query, mutation or subscription
//!    into a [`serde_json::Value`] shaped like a draft-04 JSON Schema.
//!
//! ```no_run
//! use libgraphql_jsonschema::SchemaProjector;
//!
//! let schema = libgraphql_jsonschema::parse("schemas/")?;
//! let projector = SchemaProjector::new(&schema);
//! let json_schema = projector.convert_query("me")?;
//! println!("{json_schema}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod file_reader;
pub mod line_classifier;
mod line_cursor;
mod operation_kind;
pub mod parser;
pub mod projector;
mod schema;
pub mod types;

pub use line_cursor::LineCursor;
pub use operation_kind::OperationKind;
pub use parser::Diagnostic;
pub use parser::ParseError;
pub use parser::SchemaParser;
pub use projector::ProjectionError;
pub use projector::SchemaProjector;
pub use schema::Schema;

use std::path::Path;

/// Parses every schema fragment reachable from `root_file_or_dir` into one
/// aggregate [`Schema`].
///
/// When `root_file_or_dir` names a file, its parent directory is parsed so that
/// sibling fragments complete the schema. A path that does not exist yields an
/// empty [`Schema`].
///
/// Unmatched lines are logged and otherwise ignored. Use [`SchemaParser`]
/// directly to inspect them as [`Diagnostic`]s.
pub fn parse(root_file_or_dir: impl AsRef<Path>) -> parser::Result<Schema> {
    SchemaParser::new().parse_path(root_file_or_dir)
}
