use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_inputs::SchemaInputs;
use crate::output_utils;
use libgraphql_jsonschema::OperationKind;
use libgraphql_jsonschema::Schema;

#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[command(flatten)]
    pub(crate) inputs: SchemaInputs,
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.inputs.load() {
            Ok(loaded) => CommandResult::stdout(format_args!(
                "{} Parsed {} files:\n{}",
                output_utils::GREEN_CHECK,
                loaded.file_paths.len(),
                summarize(&loaded.schema),
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

/// One section per operation kind, then the type and union counts.
pub(crate) fn summarize(schema: &Schema) -> String {
    let mut lines = vec![];
    for kind in OperationKind::ALL {
        let operations = schema.operations(kind);
        lines.push(format!(
            "  * {} {kind} operations (root type `{}`){}",
            operations.len(),
            schema.root_type_name(kind),
            if operations.is_empty() { "." } else { ":" },
        ));
        lines.extend(operations.keys().map(|name| format!("      - {name}")));
    }
    lines.push(format!("  * {} types.", schema.types().len()));
    lines.push(format!("  * {} unions.", schema.unions().len()));
    lines.join("\n")
}
