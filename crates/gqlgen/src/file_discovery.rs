use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The schema files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_non_graphql_files: usize,
}

/// Recursively find every file at or under `paths` whose extension is one of
/// `file_exts` (with or without a leading `.`). Files are returned sorted and
/// de-duplicated so repeated runs load (and hash) them in the same order.
///
/// If nothing matches and exactly one path was given which is a file, that
/// file is used regardless of its extension.
pub(crate) fn discover_schema_files(
    paths: &[PathBuf],
    file_exts: &[String],
) -> anyhow::Result<DiscoveredFiles> {
    let file_exts: HashSet<String> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut discovered = DiscoveredFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!(
                "Failed to scan filesystem entries at/under {path:?}",
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:?}.");
                continue;
            }

            if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                && file_exts.contains(&*ext) {
                log::trace!("Found schema file at {entry_path:?}.");
                discovered.file_paths.push(canonicalize(entry_path)?);
            } else {
                discovered.num_non_graphql_files += 1;
            }
        }
    }

    if discovered.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        let first_arg_path = canonicalize(first_arg_path)?;
        log::warn!(
            "Proceeding to load {first_arg_path:?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        discovered.num_non_graphql_files = 0;
        discovered.file_paths.push(first_arg_path);
    }

    discovered.file_paths.sort();
    discovered.file_paths.dedup();
    log::debug!("Found {} schema files.", discovered.file_paths.len());
    Ok(discovered)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to canonicalize {path:?}"))
}
