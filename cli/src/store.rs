use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use otiyot_core::{
    EntryId, GameSummary, Leaderboard, LearnedWords, Level, SessionSnapshot, SessionStore, Statistics,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not encode {name}")]
    Encode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// [`SessionStore`] keeping one JSON file per record in a data directory.
///
/// Records are cached in memory after opening. A file that cannot be decoded is logged and
/// replaced by the default value on the next write.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    leaderboard: Leaderboard,
    learned: LearnedWords,
    statistics: Statistics,
}

impl FileStore {
    const SNAPSHOT: &'static str = "session.json";
    const LEADERBOARD: &'static str = "leaderboard.json";
    const LEARNED: &'static str = "learned.json";
    const STATISTICS: &'static str = "statistics.json";

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut store = Self {
            dir,
            leaderboard: Leaderboard::default(),
            learned: LearnedWords::new(),
            statistics: Statistics::default(),
        };
        store.leaderboard = store.read(Self::LEADERBOARD).unwrap_or_default();
        store.learned = store.read(Self::LEARNED).unwrap_or_default();
        store.statistics = store.read(Self::STATISTICS).unwrap_or_default();
        log::debug!(
            target: "otiyot::store",
            "Opened {} with {} leaderboard entries and {} learned words",
            store.dir.display(),
            store.leaderboard.entries().len(),
            store.learned.len()
        );
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn learned(&self) -> &LearnedWords {
        &self.learned
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read<T: DeserializeOwned>(&self, name: &'static str) -> Option<T> {
        let path = self.path(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::error!(target: "otiyot::store", "Could not read {}: {}", path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!(target: "otiyot::store", "Discarding corrupted {}: {}", name, err);
                None
            }
        }
    }

    fn write<T: Serialize>(&self, name: &'static str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode { name, source })?;
        let path = self.path(name);
        fs::write(&path, json).map_err(|source| StoreError::Io { path, source })
    }

    fn persist<T: Serialize>(&self, name: &'static str, value: &T) {
        if let Err(err) = self.write(name, value) {
            log::error!(target: "otiyot::store", "Could not save {}: {}", name, err);
        }
    }
}

impl SessionStore for FileStore {
    fn load_snapshot(&mut self) -> Option<SessionSnapshot> {
        self.read(Self::SNAPSHOT)
    }

    fn save_snapshot(&mut self, snapshot: &SessionSnapshot) {
        self.persist(Self::SNAPSHOT, snapshot);
    }

    fn clear_snapshot(&mut self) {
        let path = self.path(Self::SNAPSHOT);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::error!(target: "otiyot::store", "Could not remove {}: {}", path.display(), err),
        }
    }

    fn record_high_score(&mut self, score: u32, level: Level, words_completed: u32, recorded_at: u64) -> Option<EntryId> {
        let entry = self.leaderboard.record(score, level, words_completed, recorded_at);
        self.persist(Self::LEADERBOARD, &self.leaderboard);
        entry
    }

    fn record_learned_words(&mut self, words: &LearnedWords) {
        if self.learned.extend_from(words) > 0 {
            self.persist(Self::LEARNED, &self.learned);
        }
    }

    fn record_statistics(&mut self, game: &GameSummary) {
        self.statistics.record(game);
        self.persist(Self::STATISTICS, &self.statistics);
    }
}
