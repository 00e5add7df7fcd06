use crate::commands::read_files;
use crate::commands::LoadedFile;
use crate::file_discovery::discover_schema_files;
use crate::Cli;
use crate::CommandResult;
use std::path::PathBuf;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

/// Schema files read from disk, in the order they are loaded.
#[derive(Debug)]
pub(crate) struct SchemaFiles {
    pub files: Vec<LoadedFile>,
    pub num_non_graphql_files: usize,
}

/// A command that loads the schema files found at or under its path
/// arguments.
pub(crate) trait SchemaFilesCommand {
    fn file_or_dir_paths(&self) -> &[PathBuf];
    fn graphql_file_exts(&self) -> &[String];

    fn read_schema_files(&self) -> anyhow::Result<SchemaFiles> {
        let discovered = discover_schema_files(
            self.file_or_dir_paths(),
            self.graphql_file_exts(),
        )?;
        if discovered.file_paths.is_empty() {
            anyhow::bail!(
                "No schema files with extension(s) {} found under {:?}.",
                self.graphql_file_exts().join(", "),
                self.file_or_dir_paths(),
            );
        }

        Ok(SchemaFiles {
            files: read_files(discovered.file_paths)?,
            num_non_graphql_files: discovered.num_non_graphql_files,
        })
    }
}
