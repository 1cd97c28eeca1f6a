mod convert;
mod list;
mod schema_inputs;

use crate::Cli;
use crate::CommandResult;
use convert::ConvertCmd;
use list::ListCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-jsonschema")]
pub(crate) enum CommandEnum {
    /// Projects one query, mutation or subscription into a JSON Schema
    /// document.
    Convert(Box<ConvertCmd>),

    /// Lists the operations declared by a GraphQL schema.
    List(Box<ListCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Convert(cmd) => cmd.run(cli).await,
            Self::List(cmd) => cmd.run(cli).await,
        }
    }
}
