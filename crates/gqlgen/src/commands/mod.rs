mod query;
mod schema;

use crate::Cli;
use crate::CommandResult;
use libgqlgen::schema::EntityGraph;
use libgqlgen::schema::SchemaBuilder;
use query::QueryCmd;
use schema::SchemaCmd;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlgen")]
pub(crate) enum CommandEnum {
    /// Parse schema files into an entity graph and summarize it.
    Schema(Box<SchemaCmd>),

    /// Synthesize a GraphQL document for a type of a schema.
    Query(Box<QueryCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Query(cmd) => cmd.run(cli).await,
            Self::Schema(cmd) => cmd.run(cli).await,
        }
    }
}

/// A schema file together with its contents.
#[derive(Debug)]
pub(crate) struct LoadedFile {
    pub content: String,
    pub path: PathBuf,
}

pub(crate) fn read_files(file_paths: Vec<PathBuf>) -> anyhow::Result<Vec<LoadedFile>> {
    file_paths.into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path).map_err(|err| {
                anyhow::anyhow!("Failed to read schema file {path:?}: {err}")
            })?;
            Ok(LoadedFile { content, path })
        })
        .collect()
}

pub(crate) fn build_graph(files: &[LoadedFile]) -> anyhow::Result<EntityGraph> {
    let mut builder = SchemaBuilder::new();
    for file in files {
        builder = builder.load_str(
            Some(file.path.to_string_lossy().as_ref()),
            file.content.as_str(),
        )?;
    }
    Ok(builder.build())
}
