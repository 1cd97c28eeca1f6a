use crate::types::DeclarationError;

/// The five built-in GraphQL scalars.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarKind {
    Boolean,
    Float,
    Id,
    Int,
    String,
}
impl ScalarKind {
    /// Matches `keyword` case-insensitively against the built-in scalar names.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Boolean, Self::Float, Self::Id, Self::Int, Self::String]
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(keyword))
    }

    /// The JSON Schema `type` keyword this scalar projects to.
    pub fn json_type_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Float => "number",
            Self::Id => "string",
            Self::Int => "integer",
            Self::String => "string",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl std::str::FromStr for ScalarKind {
    type Err = DeclarationError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(keyword.trim())
            .ok_or_else(|| DeclarationError::UnknownScalarKeyword(keyword.to_string()))
    }
}
