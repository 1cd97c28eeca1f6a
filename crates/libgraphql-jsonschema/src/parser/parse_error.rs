use crate::file_reader::FileDiscoveryError;
use crate::types::DeclarationError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A declaration could not be turned into a field or type. Parsing stops
    /// at the first such declaration.
    #[error("{}: {source}", declaration_location(.file_path, .line_number))]
    Declaration {
        file_path: Option<PathBuf>,

        /// The 1-indexed line on which the failing declaration ended.
        line_number: usize,
        source: DeclarationError,
    },

    #[error(transparent)]
    FileDiscovery(#[from] FileDiscoveryError),
}

fn declaration_location(file_path: &Option<PathBuf>, line_number: &usize) -> String {
    match file_path {
        Some(file_path) => format!("{}:{line_number}", file_path.display()),
        None => format!("line {line_number}"),
    }
}
