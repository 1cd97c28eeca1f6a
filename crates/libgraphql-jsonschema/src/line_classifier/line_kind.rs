/// The syntactic category of one physical line of SDL text.
///
/// Categories overlap, so a line is assigned the first category (in the order
/// of [`LINE_RULES`](super::LINE_RULES)) whose pattern matches it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LineKind {
    /// `# ...`
    Comment,
    /// `""" ... """` on a single line.
    MultiLineDescriptionInOneLine,
    /// Any line containing `"""` that is not a complete one-line description.
    MultiLineDescriptionOpenOrClose,
    /// `"..."`
    SingleLineDescription,
    /// `schema {` or `extend schema {`
    Schema,
    /// `query: RootTypeName` inside a `schema { ... }` block.
    SchemaQuery,
    SchemaMutation,
    SchemaSubscription,
    /// `type Query {`
    Query,
    Mutation,
    Subscription,
    FieldInt,
    FieldFloat,
    FieldString,
    FieldBoolean,
    FieldId,
    /// A field whose type is a bare named type other than a built-in scalar.
    FieldReference,
    /// `type Name [implements ...] {`
    ObjectDefinition,
    /// `scalar Name [@specifiedBy(...)]`
    ScalarDefinition,
    /// `union Name = A | B` or `union Name =`
    UnionDefinition,
    /// `| Member` continuation line of a multi-line union.
    UnionMember,
    /// `enum Name {`
    EnumDefinition,
    /// A field whose type is a one- or two-dimensional list.
    FieldList,
    /// `}` on its own line.
    ClosingBrace,
    /// Catch-all for anything else (including absent lines).
    Unmatched,
}
impl LineKind {
    /// The [`FieldKind`] selected by this line category, if it is one of the
    /// typed field declaration categories.
    pub fn field_kind(&self) -> Option<FieldKind> {
        match self {
            Self::FieldInt => Some(FieldKind::Int),
            Self::FieldFloat => Some(FieldKind::Float),
            Self::FieldString => Some(FieldKind::String),
            Self::FieldBoolean => Some(FieldKind::Boolean),
            Self::FieldId => Some(FieldKind::Id),
            Self::FieldReference => Some(FieldKind::Reference),
            Self::FieldList => Some(FieldKind::List),
            _ => None,
        }
    }

    /// Lines that never contribute to the schema graph when they appear inside
    /// a type body.
    pub fn is_ignorable_in_body(&self) -> bool {
        matches!(
            self,
            Self::Comment
                | Self::SingleLineDescription
                | Self::MultiLineDescriptionInOneLine
                | Self::MultiLineDescriptionOpenOrClose
                | Self::Unmatched
        )
    }
}

/// The type clause category of a single field declaration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    Int,
    Float,
    String,
    Boolean,
    Id,
    Reference,
    List,
}
