use crate::commands::build_graph;
use crate::commands::LoadedFile;
use crate::command::SchemaFiles;
use crate::command::SchemaFilesCommand;
use crate::file_hash_cache::DEFAULT_CACHE_DIR;
use crate::file_hash_cache::FileHashCache;
use crate::file_hash_cache::sha256_hex;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlgen::schema::EntityGraph;
use libgqlgen::schema::EntityKind;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaCmd {
    #[arg(
        default_value=DEFAULT_CACHE_DIR,
        help="Directory in which content hashes of previously loaded schema \
             files are kept.",
        long,
    )]
    cache_dir: PathBuf,

    #[arg(
        help="Load the schema even if no schema file changed since the last \
             run.",
        long,
    )]
    force: bool,

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
    graphql_file_exts: Vec<String>,

    #[arg(help="Print the summary as JSON.", long)]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
struct MemberSummary {
    declared_name: String,
    name: String,
    type_annotation: String,
}

#[derive(Debug, serde::Serialize)]
struct EntitySummary {
    implements: Vec<String>,
    kind: EntityKind,
    members: Vec<MemberSummary>,
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
struct SchemaSummary {
    entities: Vec<EntitySummary>,
    num_files: usize,
    num_non_graphql_files: usize,
    skipped_declarations: Vec<String>,
    unresolved_references: Vec<String>,
}
impl SchemaSummary {
    fn new(graph: &EntityGraph, num_files: usize, num_non_graphql_files: usize) -> Self {
        let entities =
            graph.entities()
                .map(|entity| EntitySummary {
                    implements: graph.implemented_interface_names(entity)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    kind: entity.kind(),
                    members: entity.members().iter()
                        .map(|member| MemberSummary {
                            declared_name: member.declared_name().to_string(),
                            name: member.protocol_name().to_string(),
                            type_annotation: member.type_annotation().to_string(),
                        })
                        .collect(),
                    name: entity.name().to_string(),
                    values: entity.enum_values().to_vec(),
                })
                .collect();

        Self {
            entities,
            num_files,
            num_non_graphql_files,
            skipped_declarations: graph.skipped_declarations().iter()
                .map(|mismatch| mismatch.to_string())
                .collect(),
            unresolved_references: graph.unresolved_references().iter()
                .map(|error| error.to_string())
                .collect(),
        }
    }

    fn to_text(&self) -> String {
        let mut text = format!(
            concat!(
                "{} Loaded the schema successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Recognized {} entities.\n",
                "  * Skipped {} declarations.\n",
                "  * Dropped {} entities with unresolved references.",
            ),
            output_utils::GREEN_CHECK,
            self.num_files,
            self.num_non_graphql_files,
            self.entities.len(),
            self.skipped_declarations.len(),
            self.unresolved_references.len(),
        );
        for entity in &self.entities {
            text.push_str(&format!(
                "\n{} {} ({} members)",
                entity.kind.keyword(),
                entity.name,
                entity.members.len(),
            ));
            if !entity.implements.is_empty() {
                text.push_str(&format!(" implements {}", entity.implements.join(", ")));
            }
        }
        for skipped in &self.skipped_declarations {
            text.push_str(&format!("\n{} {skipped}", output_utils::SKIP_ARROW));
        }
        for unresolved in &self.unresolved_references {
            text.push_str(&format!("\n{} {unresolved}", output_utils::RED_X));
        }
        text
    }
}
impl SchemaFilesCommand for SchemaCmd {
    fn file_or_dir_paths(&self) -> &[PathBuf] {
        self.file_or_dir_paths.as_slice()
    }

    fn graphql_file_exts(&self) -> &[String] {
        self.graphql_file_exts.as_slice()
    }
}
impl SchemaCmd {
    /// Files whose contents hash differently from what the cache recorded.
    fn changed_files<'a>(
        cache: &FileHashCache,
        files: &'a [LoadedFile],
        hashes: &[String],
    ) -> Vec<&'a LoadedFile> {
        files.iter()
            .zip(hashes)
            .filter(|(file, hash)| {
                cache.read_cached_hash(&file.path).as_deref() != Some(hash.as_str())
            })
            .map(|(file, _)| file)
            .collect()
    }
}

#[inherent::inherent]
impl RunnableCommand for SchemaCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let SchemaFiles { files, num_non_graphql_files } =
            match self.read_schema_files() {
                Ok(schema_files) => schema_files,
                Err(err) => return err.into(),
            };
        let hashes: Vec<String> =
            files.iter()
                .map(|file| sha256_hex(file.content.as_bytes()))
                .collect();

        let cache = FileHashCache::new(&self.cache_dir);
        let changed = Self::changed_files(&cache, &files, &hashes);
        if changed.is_empty() && !self.force {
            return CommandResult::stdout(format_args!(
                "{} None of the {} schema files changed since the last run; \
                skipping (use --force to reload).",
                output_utils::SKIP_ARROW,
                files.len(),
            ));
        }
        log::debug!("{} of {} schema files changed.", changed.len(), files.len());

        let graph = match build_graph(&files) {
            Ok(graph) => graph,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading the schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        for (file, hash) in files.iter().zip(&hashes) {
            if let Err(err) = cache.write_cached_hash(&file.path, hash) {
                log::warn!("{err:#}");
            }
        }

        let summary = SchemaSummary::new(
            &graph,
            files.len(),
            num_non_graphql_files,
        );
        if self.json {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Failed to render the summary as JSON: {err}",
                    output_utils::RED_X,
                )),
            }
        } else {
            CommandResult::stdout(format_args!("{}", summary.to_text()))
        }
    }
}
