use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_inputs::SchemaInputs;
use crate::output_utils;
use libgraphql_jsonschema::OperationKind;
use libgraphql_jsonschema::SchemaProjector;
use libgraphql_jsonschema::projector::wrap_document;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ConvertCmd {
    #[command(flatten)]
    pub(crate) inputs: SchemaInputs,

    #[command(flatten)]
    pub(crate) operation: OperationSelector,

    #[arg(
        help="Write the JSON Schema to this file instead of stdout.",
        long,
        value_name="FILE",
    )]
    pub(crate) out: Option<PathBuf>,

    #[arg(
        help="Pretty-print the JSON Schema.",
        long,
    )]
    pub(crate) pretty: bool,

    #[arg(
        help="Add the draft-04 `$schema`, `title` and `description` keywords \
             to the root of the document.",
        long,
    )]
    pub(crate) wrap: bool,
}

/// Exactly one operation to convert. Names are full declaration signatures,
/// e.g. `user(id: ID!)`.
#[derive(Debug, clap::Args)]
#[group(multiple = false, required = true)]
pub(crate) struct OperationSelector {
    #[arg(help="Name of the query to convert.", long, value_name="NAME")]
    pub(crate) query: Option<String>,

    #[arg(help="Name of the mutation to convert.", long, value_name="NAME")]
    pub(crate) mutation: Option<String>,

    #[arg(help="Name of the subscription to convert.", long, value_name="NAME")]
    pub(crate) subscription: Option<String>,
}
impl OperationSelector {
    pub(crate) fn selected(&self) -> Option<(OperationKind, &str)> {
        [
            (OperationKind::Query, &self.query),
            (OperationKind::Mutation, &self.mutation),
            (OperationKind::Subscription, &self.subscription),
        ].into_iter().find_map(|(kind, name)| Some((kind, name.as_deref()?)))
    }
}

#[inherent::inherent]
impl RunnableCommand for ConvertCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let Some((kind, name)) = self.operation.selected() else {
            return CommandResult::stderr(format_args!(
                "{} One of --query, --mutation or --subscription is required.",
                output_utils::RED_X,
            ));
        };

        let loaded = match self.inputs.load() {
            Ok(loaded) => loaded,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Parsed {} GraphQL files.", loaded.file_paths.len());

        let projector = SchemaProjector::new(&loaded.schema);
        let json_schema = match projector.convert(kind, name) {
            Ok(json_schema) => json_schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to convert the {kind} `{name}`: {e}",
                output_utils::RED_X,
            )),
        };
        let json_schema =
            if self.wrap {
                wrap_document(name, json_schema)
            } else {
                json_schema
            };

        let rendered =
            if self.pretty {
                serde_json::to_string_pretty(&json_schema)
            } else {
                serde_json::to_string(&json_schema)
            };
        let rendered = match rendered {
            Ok(rendered) => rendered,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to serialize the JSON Schema: {e}",
                output_utils::RED_X,
            )),
        };

        match &self.out {
            Some(out_path) => match std::fs::write(out_path, rendered) {
                Ok(()) => CommandResult::stdout(format_args!(
                    "{} Wrote the JSON Schema for the {kind} `{name}` to {out_path:?}.",
                    output_utils::GREEN_CHECK,
                )),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Unable to write {out_path:?}: {e}",
                    output_utils::RED_X,
                )),
            },
            None => CommandResult::stdout(format_args!("{rendered}")),
        }
    }
}
