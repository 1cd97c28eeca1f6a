use crate::types::Nullability;

/// An enum type. Values keep their declaration order and are never
/// duplicated.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    nullability: Nullability,
    values: Vec<String>,
}
impl EnumType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` unless it is already present. Returns whether it was
    /// added.
    pub fn add_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn mark_non_null(&mut self) {
        self.nullability = Nullability::NonNull;
    }

    pub fn nullability(&self) -> Nullability {
        self.nullability
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}
impl<S: Into<String>> std::iter::FromIterator<S> for EnumType {
    fn from_iter<I: IntoIterator<Item = S>>(values: I) -> Self {
        let mut enum_type = Self::new();
        for value in values {
            enum_type.add_value(value);
        }
        enum_type
    }
}
