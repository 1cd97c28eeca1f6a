use crate::types::Nullability;
use crate::types::TypeModel;
use indexmap::IndexMap;

/// An object type: a mapping of field keys to their types.
///
/// Keys of fields that take arguments keep the raw argument list
/// (e.g. `picture(size: Int)`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    fields: IndexMap<String, TypeModel>,
    nullability: Nullability,
}
impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any earlier field with the same key.
    pub fn add_field(&mut self, key: impl Into<String>, value: TypeModel) {
        self.fields.insert(key.into(), value);
    }

    pub fn field(&self, key: &str) -> Option<&TypeModel> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &IndexMap<String, TypeModel> {
        &self.fields
    }

    pub fn mark_non_null(&mut self) {
        self.nullability = Nullability::NonNull;
    }

    pub fn nullability(&self) -> Nullability {
        self.nullability
    }
}
