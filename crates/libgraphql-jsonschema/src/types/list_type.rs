use crate::types::DeclarationError;
use crate::types::Nullability;
use crate::types::Result;
use crate::types::TypeModel;
use regex::Regex;
use std::sync::OnceLock;

/// How many levels of brackets wrap a list's element type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Dimensionality {
    /// `[T]`
    Single,

    /// `[[T]]`
    Multi,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListType {
    dimensionality: Dimensionality,
    element: Box<TypeModel>,
    inner_dimension_nullability: Nullability,
    nullability: Nullability,
}
impl ListType {
    pub fn new(element: TypeModel, dimensionality: Dimensionality) -> Self {
        Self {
            dimensionality,
            element: Box::new(element),
            inner_dimension_nullability: Nullability::default(),
            nullability: Nullability::default(),
        }
    }

    /// Parses a bracketed type signature such as `[Int!]!` or `[[Photo]!]`.
    ///
    /// Three independent `!` markers are read off the signature:
    /// - the outer list's, when the signature ends with `!`;
    /// - the inner list's (two-dimensional signatures only), when the inner
    ///   closing bracket is followed by `!` (`]!]`);
    /// - the element's, when the innermost name is followed by `!`.
    ///
    /// The innermost name becomes a [`ScalarType`](crate::types::ScalarType)
    /// when it names a built-in scalar (case-insensitively) and a
    /// [`ReferenceType`](crate::types::ReferenceType) otherwise.
    pub fn parse(signature: &str) -> Result<Self> {
        let signature = signature.trim();
        let dimensionality =
            if multi_dimensional_signature().is_match(signature) {
                Dimensionality::Multi
            } else if single_dimensional_signature().is_match(signature) {
                Dimensionality::Single
            } else {
                return Err(DeclarationError::MalformedListSignature(
                    signature.to_string(),
                ));
            };

        let element_token = signature.trim_start_matches('[');
        let element_token = element_token
            .split(']')
            .next()
            .unwrap_or(element_token)
            .trim();
        let (element_name, element_non_null) = match element_token.strip_suffix('!') {
            Some(element_name) => (element_name.trim(), true),
            None => (element_token, false),
        };

        let mut element = TypeModel::from_type_name(element_name);
        if element_non_null {
            element.mark_non_null();
        }

        let mut list_type = Self::new(element, dimensionality);
        if dimensionality == Dimensionality::Multi
            && inner_dimension_non_null_signature().is_match(signature) {
            list_type.mark_inner_dimension_non_null();
        }
        if signature.ends_with('!') {
            list_type.mark_non_null();
        }

        Ok(list_type)
    }

    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    pub fn element(&self) -> &TypeModel {
        &self.element
    }

    /// The nullability of the inner array of a two-dimensional list, or `None`
    /// for a one-dimensional list.
    pub fn inner_dimension_nullability(&self) -> Option<Nullability> {
        match self.dimensionality {
            Dimensionality::Multi => Some(self.inner_dimension_nullability),
            Dimensionality::Single => None,
        }
    }

    pub fn mark_inner_dimension_non_null(&mut self) {
        self.inner_dimension_nullability = Nullability::NonNull;
    }

    pub fn mark_non_null(&mut self) {
        self.nullability = Nullability::NonNull;
    }

    pub fn nullability(&self) -> Nullability {
        self.nullability
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|err| panic!("invalid list signature pattern `{pattern}`: {err}"))
}

fn multi_dimensional_signature() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(
        r"^(\[{2})\s*([A-Za-z_])([A-Za-z0-9_]*)(!)?\s*(\]\]|\]!\])(!)?$",
    ))
}

fn single_dimensional_signature() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(
        r"^(\[{1})\s*([A-Za-z_])([A-Za-z0-9_]*)(!)?\s*(\]{1})(!)?$",
    ))
}

fn inner_dimension_non_null_signature() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"^.*(\]!\])(!)?$"))
}
