use crate::*;

/// Persistence for continuable games, high scores, learned words and statistics.
///
/// Implementations own their encoding. Failures are theirs to log, and a blob that cannot be
/// decoded is treated as absent, so none of these methods report errors to the game.
pub trait SessionStore {
    fn load_snapshot(&mut self) -> Option<SessionSnapshot>;
    fn save_snapshot(&mut self, snapshot: &SessionSnapshot);
    fn clear_snapshot(&mut self);

    /// Returns the new entry's id if the score made the leaderboard.
    fn record_high_score(&mut self, score: u32, level: Level, words_completed: u32, recorded_at: u64) -> Option<EntryId>;
    fn record_learned_words(&mut self, words: &LearnedWords);
    fn record_statistics(&mut self, game: &GameSummary);
}

/// Store that keeps everything in memory, for tests and hosts without storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    pub snapshot: Option<SessionSnapshot>,
    pub leaderboard: Leaderboard,
    pub learned: LearnedWords,
    pub statistics: Statistics,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load_snapshot(&mut self) -> Option<SessionSnapshot> {
        self.snapshot.clone()
    }

    fn save_snapshot(&mut self, snapshot: &SessionSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn clear_snapshot(&mut self) {
        self.snapshot = None;
    }

    fn record_high_score(&mut self, score: u32, level: Level, words_completed: u32, recorded_at: u64) -> Option<EntryId> {
        self.leaderboard.record(score, level, words_completed, recorded_at)
    }

    fn record_learned_words(&mut self, words: &LearnedWords) {
        self.learned.extend_from(words);
    }

    fn record_statistics(&mut self, game: &GameSummary) {
        self.statistics.record(game);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn load_snapshot(&mut self) -> Option<SessionSnapshot> {
        (**self).load_snapshot()
    }

    fn save_snapshot(&mut self, snapshot: &SessionSnapshot) {
        (**self).save_snapshot(snapshot)
    }

    fn clear_snapshot(&mut self) {
        (**self).clear_snapshot()
    }

    fn record_high_score(&mut self, score: u32, level: Level, words_completed: u32, recorded_at: u64) -> Option<EntryId> {
        (**self).record_high_score(score, level, words_completed, recorded_at)
    }

    fn record_learned_words(&mut self, words: &LearnedWords) {
        (**self).record_learned_words(words)
    }

    fn record_statistics(&mut self, game: &GameSummary) {
        (**self).record_statistics(game)
    }
}
