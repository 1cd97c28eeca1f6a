use crate::line_classifier::FieldKind;
use crate::line_classifier::classify_field;
use crate::line_classifier::classify_nullability;
use crate::line_classifier::is_field_deprecated;
use crate::types::DeclarationError;
use crate::types::ListType;
use crate::types::Result;
use crate::types::ScalarKind;
use crate::types::TypeModel;
use regex::Regex;
use std::sync::OnceLock;

/// A field key paired with its type, extracted from one logical declaration
/// such as `picture(size: Int): Url!`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    deprecated: bool,
    key: String,
    value: TypeModel,
}
impl FieldDescriptor {
    /// Parses a fully assembled declaration of the shape
    /// `name[(args)]: Type [@directive...]`.
    ///
    /// The key is everything before the type clause, raw argument list
    /// included. Directive suffixes are recognized but not modeled beyond the
    /// [`deprecated`](Self::deprecated) flag.
    pub fn parse(declaration: &str) -> Result<Self> {
        let deprecated = is_field_deprecated(declaration);
        let stripped = strip_directives(declaration).trim();
        let malformed = || DeclarationError::MalformedDeclaration(declaration.to_string());

        let field_kind = classify_field(stripped).ok_or_else(malformed)?;
        let captures = field_declaration().captures(stripped).ok_or_else(malformed)?;
        let key = captures.get(1).map_or("", |m| m.as_str()).trim();
        let type_clause = captures.get(2).map_or("", |m| m.as_str()).trim();
        if key.is_empty() || type_clause.is_empty() {
            return Err(malformed());
        }

        let mut value = match field_kind {
            FieldKind::Boolean
                | FieldKind::Float
                | FieldKind::Id
                | FieldKind::Int
                | FieldKind::String =>
                TypeModel::scalar(type_clause.trim_end_matches('!').parse::<ScalarKind>()?),

            FieldKind::List =>
                TypeModel::List(ListType::parse(type_clause)?),

            FieldKind::Reference =>
                TypeModel::reference(type_clause.trim_end_matches('!')),
        };

        if classify_nullability(type_clause).is_outer_non_null() {
            value.mark_non_null();
        }

        Ok(Self {
            deprecated,
            key: key.to_string(),
            value,
        })
    }

    /// Whether the declaration carried a `@deprecated` directive.
    pub fn deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn into_parts(self) -> (String, TypeModel) {
        (self.key, self.value)
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn value(&self) -> &TypeModel {
        &self.value
    }
}

/// `name[(args)]: Type` where `Type` is a (possibly bracketed, possibly
/// `!`-suffixed) type name.
fn field_declaration() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^\s*([A-Za-z_][A-Za-z0-9_]*(?:\(.*\))?)\s*:\s*(\[*(?:[A-Za-z_][A-Za-z0-9_!]*)?[\]!]*)\s*$",
        ).unwrap_or_else(|err| panic!("invalid field declaration pattern: {err}"))
    })
}

/// Cuts the declaration at the first `@` that follows the return-type colon,
/// ignoring anything inside the argument list.
fn strip_directives(declaration: &str) -> &str {
    let mut depth = 0usize;
    let mut seen_type_separator = false;
    for (idx, ch) in declaration.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => seen_type_separator = true,
            '@' if depth == 0 && seen_type_separator => return &declaration[..idx],
            _ => (),
        }
    }
    declaration
}
