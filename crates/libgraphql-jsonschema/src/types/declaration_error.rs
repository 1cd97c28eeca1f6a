/// A single SDL declaration could not be turned into a
/// [`TypeModel`](crate::types::TypeModel).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DeclarationError {
    /// The declaration does not have the `name[(args)]: Type` shape.
    #[error("Malformed field declaration: `{0}`")]
    MalformedDeclaration(String),

    /// A bracketed type clause is neither a one- nor a two-dimensional list
    /// signature (e.g. `[[[Int]]]` or `[Int`).
    #[error("Malformed list signature: `{0}`")]
    MalformedListSignature(String),

    #[error("Unknown scalar keyword: `{0}`")]
    UnknownScalarKeyword(String),
}
