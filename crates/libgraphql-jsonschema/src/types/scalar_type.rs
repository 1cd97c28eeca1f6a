use crate::types::Nullability;
use crate::types::ScalarKind;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    kind: ScalarKind,
    nullability: Nullability,
}
impl ScalarType {
    pub fn new(kind: ScalarKind) -> Self {
        Self {
            kind,
            nullability: Nullability::default(),
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn mark_non_null(&mut self) {
        self.nullability = Nullability::NonNull;
    }

    pub fn nullability(&self) -> Nullability {
        self.nullability
    }
}
