use anyhow::Context;
use sha2::Digest;
use sha2::Sha256;
use std::path::Path;
use std::path::PathBuf;

pub(crate) const DEFAULT_CACHE_DIR: &str = ".gqlgen-cache";

/// Remembers a content hash per input path so unchanged inputs can be skipped
/// on the next run.
///
/// Each entry is a small file inside `cache_dir`, named after the SHA-256 of
/// the input path and holding the last recorded hash of its contents.
#[derive(Debug)]
pub(crate) struct FileHashCache {
    cache_dir: PathBuf,
}
impl FileHashCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// The hash last recorded for `path`, or `None` if nothing was recorded
    /// (or the entry can't be read).
    pub fn read_cached_hash(&self, path: &Path) -> Option<String> {
        let entry_path = self.entry_path(path);
        match std::fs::read_to_string(&entry_path) {
            Ok(hash) => Some(hash.trim().to_string()),
            Err(err) => {
                log::trace!("No cached hash for {path:?} at {entry_path:?}: {err}");
                None
            },
        }
    }

    pub fn write_cached_hash(&self, path: &Path, hash: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.cache_dir).with_context(|| format!(
            "Failed to create cache directory {:?}",
            self.cache_dir,
        ))?;
        let entry_path = self.entry_path(path);
        std::fs::write(&entry_path, hash).with_context(|| format!(
            "Failed to write cached hash for {path:?} to {entry_path:?}",
        ))
    }

    fn entry_path(&self, path: &Path) -> PathBuf {
        let key = sha256_hex(path.to_string_lossy().as_bytes());
        self.cache_dir.join(format!("{key}.sha256"))
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
