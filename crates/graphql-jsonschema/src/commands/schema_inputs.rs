use anyhow::Context;
use libgraphql_jsonschema::Schema;
use libgraphql_jsonschema::SchemaParser;
use libgraphql_jsonschema::file_reader::FileExtensionFilter;
use libgraphql_jsonschema::file_reader::discover_schema_files;
use std::path::PathBuf;

/// The schema files a command reads, shared by every subcommand.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaInputs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files that together make up the schema.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}
impl SchemaInputs {
    /// Finds every schema file named by (or located under) the path args.
    ///
    /// A single explicit file is kept even when its extension is not one of
    /// `--graphql-file-exts`.
    pub(crate) fn discover(&self) -> anyhow::Result<Vec<PathBuf>> {
        let filter = FileExtensionFilter::from_extensions(&self.graphql_file_exts);
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );

        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            if !path.exists() {
                anyhow::bail!("No such file or directory: {path:?}");
            }

            if path.is_file() && !filter.accepts(path) {
                if self.file_or_dir_paths.len() > 1 {
                    log::debug!("Skipping {path:?}: it doesn't match {filter}.");
                    continue;
                }
                log::warn!(
                    "Proceeding to parse {path:?} even though it doesn't \
                    match any of the --graphql-file-exts ({filter}).",
                );
            }

            let found = discover_schema_files(path, &filter)
                .with_context(|| format!("Failed to scan {path:?}"))?;
            file_paths.extend(found);
        }

        log::debug!("Found {} GraphQL files to be parsed.", file_paths.len());
        Ok(file_paths)
    }

    /// Parses every discovered file, in order, into one schema. Unmatched
    /// lines are logged as warnings.
    pub(crate) fn load(&self) -> anyhow::Result<LoadedSchema> {
        let file_paths = self.discover()?;
        if file_paths.is_empty() {
            anyhow::bail!(
                "No GraphQL files found in {:?}",
                self.file_or_dir_paths,
            );
        }

        let mut parser = SchemaParser::new();
        let schema = parser.parse_files(&file_paths)
            .context("Failed to parse the GraphQL schema")?;
        for diagnostic in parser.take_diagnostics() {
            log::warn!("{diagnostic}");
        }

        Ok(LoadedSchema {
            file_paths,
            schema,
        })
    }
}

#[derive(Debug)]
pub(crate) struct LoadedSchema {
    pub(crate) file_paths: Vec<PathBuf>,
    pub(crate) schema: Schema,
}
