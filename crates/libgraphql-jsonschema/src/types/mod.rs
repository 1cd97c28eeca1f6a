//! The closed set of type variants a parsed schema is built from.
//!
//! Every variant starts out [`Nullability::Nullable`]; the only transition is
//! [`TypeModel::mark_non_null`], which is applied when the declaration that
//! produced the node carries a trailing `!`.

mod declaration_error;
mod enum_type;
mod field_descriptor;
mod list_type;
mod nullability;
mod object_type;
mod reference_type;
mod scalar_kind;
mod scalar_type;
mod type_model;

pub use declaration_error::DeclarationError;
pub use enum_type::EnumType;
pub use field_descriptor::FieldDescriptor;
pub use list_type::Dimensionality;
pub use list_type::ListType;
pub use nullability::Nullability;
pub use object_type::ObjectType;
pub use reference_type::ReferenceType;
pub use scalar_kind::ScalarKind;
pub use scalar_type::ScalarType;
pub use type_model::TypeModel;

pub(crate) type Result<T> = std::result::Result<T, DeclarationError>;
