use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub id: EntryId,
    pub score: u32,
    pub level: Level,
    pub words_completed: u32,
    /// Unix seconds.
    pub recorded_at: u64,
}

/// Best scores, highest first. Equal scores keep the order they were recorded in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboard {
    entries: Vec<HighScoreEntry>,
    next_id: u64,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_capacity(LEADERBOARD_SIZE)
    }
}

impl Leaderboard {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            capacity,
        }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a result, returning its id if it made the board.
    pub fn record(&mut self, score: u32, level: Level, words_completed: u32, recorded_at: u64) -> Option<EntryId> {
        let id = EntryId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.entries.push(HighScoreEntry {
            id,
            score,
            level,
            words_completed,
            recorded_at,
        });
        // stable, so earlier entries stay ahead of later ties
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);

        self.entries.iter().any(|entry| entry.id == id).then_some(id)
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }
}

/// Words the player has solved at least once, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearnedWords {
    words: BTreeMap<WordId, Word>,
}

impl LearnedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the word was already known.
    pub fn insert(&mut self, word: &Word) -> bool {
        if self.words.contains_key(&word.id) {
            return false;
        }
        self.words.insert(word.id, word.clone());
        true
    }

    pub fn extend_from(&mut self, other: &LearnedWords) -> usize {
        other.iter().filter(|word| self.insert(word)).count()
    }

    pub fn contains(&self, id: WordId) -> bool {
        self.words.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }
}

/// What one finished game contributes to the statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub level: Level,
    pub words_completed: u32,
    pub hints_used: u32,
    pub bonus_rounds_played: u32,
    pub bonus_rounds_completed: u32,
    pub play_secs: u64,
    /// Finished by solving every word rather than running out of lives.
    pub completed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_completed: u32,
    pub total_score: u64,
    pub highest_score: u32,
    pub highest_level: Level,
    pub total_words_completed: u64,
    pub hints_used: u64,
    pub bonus_rounds_played: u64,
    pub bonus_rounds_completed: u64,
    pub total_play_secs: u64,
}

impl Statistics {
    pub fn record(&mut self, game: &GameSummary) {
        self.games_played = self.games_played.saturating_add(1);
        if game.completed {
            self.games_completed = self.games_completed.saturating_add(1);
        }
        self.total_score = self.total_score.saturating_add(game.score.into());
        self.highest_score = self.highest_score.max(game.score);
        self.highest_level = self.highest_level.max(game.level);
        self.total_words_completed = self.total_words_completed.saturating_add(game.words_completed.into());
        self.hints_used = self.hints_used.saturating_add(game.hints_used.into());
        self.bonus_rounds_played = self.bonus_rounds_played.saturating_add(game.bonus_rounds_played.into());
        self.bonus_rounds_completed = self
            .bonus_rounds_completed
            .saturating_add(game.bonus_rounds_completed.into());
        self.total_play_secs = self.total_play_secs.saturating_add(game.play_secs);
    }

    pub fn average_score(&self) -> f64 {
        average(self.total_score, self.games_played)
    }

    pub fn average_play_secs(&self) -> f64 {
        average(self.total_play_secs, self.games_played)
    }
}

fn average(total: u64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_is_sorted_highest_first() {
        let mut board = Leaderboard::default();
        board.record(50, 1, 2, 0);
        board.record(80, 2, 4, 0);
        board.record(10, 1, 1, 0);

        let scores: Vec<_> = board.entries().iter().map(|entry| entry.score).collect();
        assert_eq!(scores, [80, 50, 10]);
    }

    #[test]
    fn eleventh_score_drops_the_lowest() {
        let mut board = Leaderboard::default();
        for score in 1..=10 {
            assert!(board.record(score * 10, 1, 1, 0).is_some());
        }

        assert!(board.record(55, 1, 1, 0).is_some());

        assert_eq!(board.entries().len(), LEADERBOARD_SIZE);
        assert!(board.entries().iter().all(|entry| entry.score != 10));
        assert_eq!(board.entries().last().unwrap().score, 20);
    }

    #[test]
    fn score_below_a_full_board_is_not_kept() {
        let mut board = Leaderboard::with_capacity(2);
        board.record(30, 1, 1, 0);
        board.record(20, 1, 1, 0);

        assert_eq!(board.record(5, 1, 1, 0), None);
        assert_eq!(board.entries().len(), 2);
    }

    #[test]
    fn ties_keep_recording_order() {
        let mut board = Leaderboard::with_capacity(2);
        let first = board.record(40, 1, 1, 0).unwrap();
        let second = board.record(40, 2, 1, 0).unwrap();

        assert_eq!(board.record(40, 3, 1, 0), None);
        let ids: Vec<_> = board.entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, [first, second]);
    }

    #[test]
    fn learned_words_ignore_duplicates() {
        let father = Word::new(200, "אב", "av", "father");
        let mut learned = LearnedWords::new();

        assert!(learned.insert(&father));
        assert!(!learned.insert(&father));
        assert_eq!(learned.len(), 1);

        let mut other = LearnedWords::new();
        other.insert(&father);
        other.insert(&Word::new(201, "אם", "em", "mother"));
        assert_eq!(learned.extend_from(&other), 1);
        assert_eq!(learned.len(), 2);
    }

    #[test]
    fn averages_are_zero_without_games() {
        let stats = Statistics::default();

        assert_eq!(stats.average_score(), 0.0);
        assert_eq!(stats.average_play_secs(), 0.0);
    }

    #[test]
    fn statistics_accumulate_games() {
        let mut stats = Statistics::default();
        stats.record(&GameSummary {
            score: 100,
            level: 3,
            words_completed: 12,
            hints_used: 2,
            bonus_rounds_played: 2,
            bonus_rounds_completed: 1,
            play_secs: 300,
            completed: false,
        });
        stats.record(&GameSummary {
            score: 50,
            level: 2,
            play_secs: 100,
            ..GameSummary::default()
        });

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.highest_score, 100);
        assert_eq!(stats.highest_level, 3);
        assert_eq!(stats.average_score(), 75.0);
        assert_eq!(stats.average_play_secs(), 200.0);
        assert_eq!(stats.bonus_rounds_completed, 1);
    }
}
