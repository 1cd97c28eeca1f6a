use crate::types::EnumType;
use crate::types::ListType;
use crate::types::Nullability;
use crate::types::ObjectType;
use crate::types::ReferenceType;
use crate::types::ScalarKind;
use crate::types::ScalarType;

/// One node of a parsed schema's type graph.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeModel {
    Enum(EnumType),
    List(ListType),
    Object(ObjectType),
    Reference(ReferenceType),
    Scalar(ScalarType),
}
impl TypeModel {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&ListType> {
        if let Self::List(list_type) = self {
            Some(list_type)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(object_type) = self {
            Some(object_type)
        } else {
            None
        }
    }

    pub fn as_reference(&self) -> Option<&ReferenceType> {
        if let Self::Reference(reference_type) = self {
            Some(reference_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    /// A built-in scalar when `type_name` is one of the five scalar keywords
    /// (matched case-insensitively), a [`ReferenceType`] otherwise.
    pub fn from_type_name(type_name: &str) -> Self {
        match ScalarKind::from_keyword(type_name) {
            Some(kind) => Self::scalar(kind),
            None => Self::reference(type_name),
        }
    }

    /// Narrows this node to [`Nullability::NonNull`]. There is no inverse.
    pub fn mark_non_null(&mut self) {
        match self {
            Self::Enum(enum_type) => enum_type.mark_non_null(),
            Self::List(list_type) => list_type.mark_non_null(),
            Self::Object(object_type) => object_type.mark_non_null(),
            Self::Reference(reference_type) => reference_type.mark_non_null(),
            Self::Scalar(scalar_type) => scalar_type.mark_non_null(),
        }
    }

    /// Convenience for `self.nullability().is_nullable()`.
    pub fn nullable(&self) -> bool {
        self.nullability().is_nullable()
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            Self::Enum(enum_type) => enum_type.nullability(),
            Self::List(list_type) => list_type.nullability(),
            Self::Object(object_type) => object_type.nullability(),
            Self::Reference(reference_type) => reference_type.nullability(),
            Self::Scalar(scalar_type) => scalar_type.nullability(),
        }
    }

    pub fn reference(target_name: impl Into<String>) -> Self {
        Self::Reference(ReferenceType::new(target_name))
    }

    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(ScalarType::new(kind))
    }
}
impl std::convert::From<EnumType> for TypeModel {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<ListType> for TypeModel {
    fn from(value: ListType) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<ObjectType> for TypeModel {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ReferenceType> for TypeModel {
    fn from(value: ReferenceType) -> Self {
        Self::Reference(value)
    }
}
impl std::convert::From<ScalarType> for TypeModel {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
