/// Where the `!` markers sit on a field declaration's type clause.
///
/// A trailing `!` alone is ambiguous once lists are involved (`[Int]!` and
/// `[Int!]` both contain one `!`), so the shape is derived by matching the
/// bracket/`!` suffix of the whole declaration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NullabilityShape {
    /// `[[T!]!]!`
    MultiListAllNonNull,
    /// `[[T!]!]`
    MultiListInnerAndElementNonNull,
    /// `[[T!]]`
    MultiListElementNonNull,
    /// `[[T]!]`
    MultiListInnerNonNull,
    /// `[[T]]!`
    MultiListOuterNonNull,
    /// `[T!]!`
    ListAndElementNonNull,
    /// `[T!]`
    ListElementNonNull,
    /// `[T]!`
    ListNonNull,
    /// `T!`
    ScalarOrObjectNonNull,
    /// No `!` marker at all.
    Nullable,
}
impl NullabilityShape {
    /// Whether the outermost type of the declaration (the list itself, or the
    /// named type when there is no list) is non-null.
    pub fn is_outer_non_null(&self) -> bool {
        match self {
            Self::MultiListAllNonNull
            | Self::MultiListOuterNonNull
            | Self::ListAndElementNonNull
            | Self::ListNonNull
            | Self::ScalarOrObjectNonNull
                => true,

            Self::MultiListInnerAndElementNonNull
            | Self::MultiListElementNonNull
            | Self::MultiListInnerNonNull
            | Self::ListElementNonNull
            | Self::Nullable
                => false,
        }
    }
}
