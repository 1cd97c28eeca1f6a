use crate::line_classifier::FieldKind;
use crate::line_classifier::LineKind;
use crate::line_classifier::NullabilityShape;
use regex::Regex;
use std::sync::OnceLock;

/// The line grammar, in priority order. The first matching rule wins.
///
/// Ordering constraints:
/// - `MultiLineDescriptionInOneLine` precedes `MultiLineDescriptionOpenOrClose`
///   (every one-line form also contains `"""`).
/// - Both precede `SingleLineDescription` (`"""..."""` also starts and ends
///   with `"`).
/// - `Query`/`Mutation`/`Subscription` precede `ObjectDefinition`.
/// - The built-in scalar field rules precede `FieldReference`, which would
///   otherwise claim `foo: Int`.
/// - `FieldList` is told apart from the other field rules by its brackets.
/// - `Unmatched` is always last.
pub const LINE_RULES: &[(LineKind, &str)] = &[
    (LineKind::Comment, r"^\s*#.*\s*$"),
    (LineKind::MultiLineDescriptionInOneLine, r#"^\s*""".*"""\s*$"#),
    (LineKind::MultiLineDescriptionOpenOrClose, r#"^.*""".*\s*$"#),
    (LineKind::SingleLineDescription, r#"^\s*".*"\s*$"#),
    (LineKind::Schema, r"^\s*(extend\s)?schema\s*\{\s*$"),
    (LineKind::SchemaQuery, r"^\s*query\s*:.*$"),
    (LineKind::SchemaMutation, r"^\s*mutation\s*:.*$"),
    (LineKind::SchemaSubscription, r"^\s*subscription\s*:.*$"),
    (LineKind::Query, r"^\s*(extend\s)?type\sQuery\s*\{\s*$"),
    (LineKind::Mutation, r"^\s*(extend\s)?type\sMutation\s*\{\s*$"),
    (LineKind::Subscription, r"^\s*(extend\s)?type\sSubscription\s*\{\s*$"),
    (LineKind::FieldInt, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*Int!?\s*(@.*)?\s*$"),
    (LineKind::FieldFloat, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*Float!?\s*(@.*)?\s*$"),
    (LineKind::FieldString, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*String!?\s*(@.*)?\s*$"),
    (LineKind::FieldBoolean, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*Boolean!?\s*(@.*)?\s*$"),
    (LineKind::FieldId, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*ID!?\s*(@.*)?\s*$"),
    (LineKind::FieldReference, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*([A-Za-z0-9_]+)!?\s*(@.*)?\s*$"),
    (LineKind::ObjectDefinition, r"^\s*type\s+([A-Za-z_])([A-Za-z0-9_]*)\s*(implements.*)?\s*(@.*)?\{\s*$"),
    (LineKind::ScalarDefinition, r"^\s*scalar\s+([A-Za-z_])([A-Za-z0-9_]*)\s*(@.*)?\s*$"),
    (LineKind::UnionDefinition, r"^\s*union\s+([A-Za-z_])([A-Za-z0-9_]*)\s*=\s*(([A-Za-z_])([A-Za-z0-9_]*)\s?\|?\s?)*\s*$"),
    (LineKind::UnionMember, r"^(\s*\|\s*([A-Za-z_])([A-Za-z0-9_]*))+\s*$"),
    (LineKind::EnumDefinition, r"^\s*enum\s+([A-Za-z_])([A-Za-z0-9_]*)\s*\{\s*$"),
    (LineKind::FieldList, r"^\s*([A-Za-z_])([A-Za-z0-9_]*)(\(.*\))?\s*:\s*\[\[?.*!?\]?!?\]!?\s*(@.*)?\s*$"),
    // Closing braces are expected on their own line.
    (LineKind::ClosingBrace, r"^\s*\}\s*$"),
    (LineKind::Unmatched, r"(?s)^.*$"),
];

/// Nullability shapes, in priority order. Lines matching none of these are
/// [`NullabilityShape::Nullable`].
pub const NULLABILITY_RULES: &[(NullabilityShape, &str)] = &[
    (NullabilityShape::MultiListAllNonNull, r"^.*\[\[.*!\]!\]!\s*$"),
    (NullabilityShape::MultiListInnerAndElementNonNull, r"^.*\[\[.*!\]!\]\s*$"),
    (NullabilityShape::MultiListElementNonNull, r"^.*\[\[.*!\]\]\s*$"),
    (NullabilityShape::MultiListInnerNonNull, r"^.*\[\[.*\]!\]\s*$"),
    (NullabilityShape::MultiListOuterNonNull, r"^.*\[\[.*\]\]!\s*$"),
    (NullabilityShape::ListAndElementNonNull, r"^.*\[.*!\]!\s*$"),
    (NullabilityShape::ListElementNonNull, r"^.*\[.*!\]\s*$"),
    (NullabilityShape::ListNonNull, r"^.*\[.*\]!\s*$"),
    (NullabilityShape::ScalarOrObjectNonNull, r"^.*!\s*$"),
];

fn compile_rules<T: Copy>(rules: &[(T, &str)]) -> Vec<(T, Regex)> {
    rules.iter()
        .map(|(kind, pattern)| {
            let regex = Regex::new(pattern)
                .unwrap_or_else(|err| panic!("invalid grammar pattern `{pattern}`: {err}"));
            (*kind, regex)
        })
        .collect()
}

fn line_rules() -> &'static [(LineKind, Regex)] {
    static RULES: OnceLock<Vec<(LineKind, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| compile_rules(LINE_RULES))
}

fn nullability_rules() -> &'static [(NullabilityShape, Regex)] {
    static RULES: OnceLock<Vec<(NullabilityShape, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| compile_rules(NULLABILITY_RULES))
}

fn deprecated_directive() -> &'static Regex {
    static DEPRECATED: OnceLock<Regex> = OnceLock::new();
    DEPRECATED.get_or_init(|| {
        Regex::new(r"^.*\s@deprecated\s*.*$")
            .unwrap_or_else(|err| panic!("invalid deprecation pattern: {err}"))
    })
}

/// Classifies one line of SDL text. An absent line is [`LineKind::Unmatched`].
pub fn classify(line: Option<&str>) -> LineKind {
    let Some(line) = line else {
        return LineKind::Unmatched;
    };

    line_rules().iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|(kind, _)| *kind)
        .unwrap_or(LineKind::Unmatched)
}

/// Selects the [`FieldKind`] of a field declaration, consulting only the
/// typed field rules of the grammar (in grammar order).
///
/// Unlike [`classify`], this never lets a non-field rule claim the line, so a
/// field named `query` is still recognized as a field.
pub fn classify_field(declaration: &str) -> Option<FieldKind> {
    line_rules().iter()
        .filter_map(|(kind, regex)| kind.field_kind().map(|field_kind| (field_kind, regex)))
        .find(|(_, regex)| regex.is_match(declaration))
        .map(|(field_kind, _)| field_kind)
}

/// Determines the [`NullabilityShape`] of a field declaration's type clause.
pub fn classify_nullability(declaration: &str) -> NullabilityShape {
    nullability_rules().iter()
        .find(|(_, regex)| regex.is_match(declaration))
        .map(|(shape, _)| *shape)
        .unwrap_or(NullabilityShape::Nullable)
}

/// Whether the line carries a `@deprecated` directive.
pub fn is_field_deprecated(line: &str) -> bool {
    deprecated_directive().is_match(line)
}
