use std::path::{Path, PathBuf};
use std::{env, fs};

use memoria_core::RankingStore;

/// Key-value store backed by one JSON file per key in the user's
/// config directory. A read-only disk never breaks the game: reads
/// fall back to "nothing stored" and writes are best effort.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        Self { dir: config_dir() }
    }

    #[cfg(test)]
    fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        let _ = fs::create_dir_all(&self.dir);
        let _ = fs::write(self.path_for(key), value);
    }
}

fn config_dir() -> PathBuf {
    if let Ok(base) = env::var("XDG_CONFIG_HOME") {
        if !base.is_empty() {
            return Path::new(&base).join("memoria");
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return Path::new(&home).join(".config").join("memoria");
        }
    }
    PathBuf::from(".memoria")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("memoria_store_{}_{}", tag, std::process::id()))
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileStore::with_dir(&dir);

        store.set("memoria_rankings", "[{\"name\":\"Ana\"}]");
        assert_eq!(
            store.get("memoria_rankings").as_deref(),
            Some("[{\"name\":\"Ana\"}]")
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = scratch_dir("missing");
        let store = FileStore::with_dir(&dir);

        assert_eq!(store.get("memoria_rankings"), None);
    }
}
