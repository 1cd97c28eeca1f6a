use crate::types::Nullability;

/// A by-name pointer to a type registered in the
/// [`Schema`](crate::Schema)'s type table.
///
/// References are never resolved while parsing, so they may point forward in
/// the same fragment or into a different fragment entirely.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReferenceType {
    nullability: Nullability,
    target_name: String,
}
impl ReferenceType {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            nullability: Nullability::default(),
            target_name: target_name.into(),
        }
    }

    pub fn mark_non_null(&mut self) {
        self.nullability = Nullability::NonNull;
    }

    pub fn nullability(&self) -> Nullability {
        self.nullability
    }

    pub fn target_name(&self) -> &str {
        self.target_name.as_str()
    }
}
