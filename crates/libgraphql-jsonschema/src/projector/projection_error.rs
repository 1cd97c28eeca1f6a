use crate::OperationKind;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error(
        "Unknown {kind} name `{name}`. Known {kind} names: [{}]",
        .known_names.join(", "),
    )]
    UnknownOperation {
        kind: OperationKind,
        name: String,
        known_names: Vec<String>,
    },

    /// A reference names a type that no fragment declared.
    #[error("Unable to resolve a reference to the type `{name}`")]
    UnresolvedReference {
        name: String,
    },
}
