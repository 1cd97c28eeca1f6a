/// Whether a type accepts `null`.
///
/// Nullability only ever narrows: a node starts out
/// [`Nullability::Nullable`] and becomes [`Nullability::NonNull`] at most once,
/// via `mark_non_null()`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Nullability {
    #[default]
    Nullable,
    NonNull,
}
impl Nullability {
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable)
    }
}
impl std::convert::From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Self::Nullable
        } else {
            Self::NonNull
        }
    }
}
