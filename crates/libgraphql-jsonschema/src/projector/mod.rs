//! Projection of [`TypeModel`](crate::types::TypeModel) graphs into JSON
//! Schema (draft-04) shaped [`serde_json::Value`]s.

mod projection_error;
mod schema_projector;

pub use projection_error::ProjectionError;
pub use schema_projector::SchemaProjector;
pub use schema_projector::wrap_document;

pub type Result<T> = std::result::Result<T, ProjectionError>;
