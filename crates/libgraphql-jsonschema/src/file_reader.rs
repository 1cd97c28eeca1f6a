//! Locating schema fragments on disk.

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

type Result<T> = std::result::Result<T, FileDiscoveryError>;

#[derive(Debug, thiserror::Error)]
pub enum FileDiscoveryError {
    #[error("Failed to walk schema files at/under {root:?}: {source}")]
    WalkDir {
        root: PathBuf,
        source: walkdir::Error,
    },
}

/// Which files [`discover_schema_files`] keeps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileExtensionFilter {
    Any,

    /// Lowercased extensions, without a leading `.`.
    Only(BTreeSet<String>),
}
impl FileExtensionFilter {
    pub fn accepts(&self, file_path: &Path) -> bool {
        match self {
            Self::Any => true,
            Self::Only(exts) => file_path.extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .is_some_and(|ext| exts.contains(&ext)),
        }
    }

    /// Normalizes extensions such as `.GraphQL` or `graphqls`. Blank entries
    /// are dropped.
    pub fn from_extensions<S: AsRef<str>>(exts: impl IntoIterator<Item = S>) -> Self {
        Self::Only(
            exts.into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        )
    }

    /// `.graphql` and `.graphqls`.
    pub fn graphql() -> Self {
        Self::from_extensions(["graphql", "graphqls"])
    }
}
impl std::fmt::Display for FileExtensionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("any extension"),
            Self::Only(exts) => f.write_str(
                &exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// Finds every file at or under `root` that `filter` accepts.
///
/// A file `root` is returned as-is, whatever its extension. Directories are
/// walked recursively (following symlinks) in file-name order, so the
/// enumeration order is deterministic. A missing `root` yields no files.
pub fn discover_schema_files(
    root: impl AsRef<Path>,
    filter: &FileExtensionFilter,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        log::debug!("Schema root {root:?} does not exist.");
        return Ok(vec![]);
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut file_paths = vec![];
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| FileDiscoveryError::WalkDir {
            root: root.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {path:?}.");
        } else if filter.accepts(path) {
            log::trace!("Found schema file at {path:?}.");
            file_paths.push(path.to_path_buf());
        } else {
            log::trace!("Skipping file not matching {filter}: {path:?}.");
        }
    }

    log::debug!("Found {} schema files under {root:?}.", file_paths.len());
    Ok(file_paths)
}
