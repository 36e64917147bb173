use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mutable state of one game, written only by [`GameController`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub(crate) level: Level,
    pub(crate) current_word: Option<Word>,
    pub(crate) tiles: Tiles,
    pub(crate) selection: Selection,
    pub(crate) scorecard: Scorecard,
    pub(crate) progress: LevelProgress,
    pub(crate) level_progress_percent: f32,
    pub(crate) words_completed: u32,
    pub(crate) hints_used: u32,
    pub(crate) bonus_rounds_played: u32,
    pub(crate) bonus_rounds_completed: u32,
    pub(crate) learned: LearnedWords,
    pub(crate) bonus: Option<BonusRound>,
    pub(crate) game_over: bool,
    pub(crate) content_exhausted: bool,
}

impl GameSession {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            level: 1,
            current_word: None,
            tiles: Tiles::new(),
            selection: Selection::new(),
            scorecard: Scorecard::new(rules),
            progress: LevelProgress::new(),
            level_progress_percent: 0.0,
            words_completed: 0,
            hints_used: 0,
            bonus_rounds_played: 0,
            bonus_rounds_completed: 0,
            learned: LearnedWords::new(),
            bonus: None,
            game_over: false,
            content_exhausted: false,
        }
    }

    pub(crate) fn from_snapshot(snapshot: &SessionSnapshot, rules: &GameRules) -> Self {
        Self {
            level: snapshot.level,
            scorecard: Scorecard::from_parts(
                snapshot.score,
                snapshot.streak,
                snapshot.lives,
                snapshot.hints_remaining,
                rules,
            ),
            progress: LevelProgress::from_map(snapshot.completed_words.clone()),
            ..Self::new(rules)
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Letters picked so far, in selection order.
    pub fn spelled(&self) -> String {
        puzzle::spelled(&self.selection, &self.tiles)
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    pub fn score(&self) -> u32 {
        self.scorecard.score()
    }

    pub fn streak(&self) -> u32 {
        self.scorecard.streak()
    }

    pub fn bonus_active(&self) -> bool {
        self.scorecard.bonus_active()
    }

    pub fn lives(&self) -> u8 {
        self.scorecard.lives()
    }

    pub fn max_lives(&self) -> u8 {
        self.scorecard.max_lives()
    }

    pub fn hints_remaining(&self) -> u32 {
        self.scorecard.hints_remaining()
    }

    pub fn progress(&self) -> &LevelProgress {
        &self.progress
    }

    pub fn level_progress_percent(&self) -> f32 {
        self.level_progress_percent
    }

    pub fn words_completed(&self) -> u32 {
        self.words_completed
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn bonus_rounds_played(&self) -> u32 {
        self.bonus_rounds_played
    }

    pub fn bonus_rounds_completed(&self) -> u32 {
        self.bonus_rounds_completed
    }

    /// Words solved during this session.
    pub fn learned(&self) -> &LearnedWords {
        &self.learned
    }

    pub fn bonus_round(&self) -> Option<&BonusRound> {
        self.bonus.as_ref()
    }

    pub fn in_bonus_round(&self) -> bool {
        self.bonus.is_some()
    }

    pub fn bonus_time_remaining_secs(&self) -> u32 {
        self.bonus.as_ref().map_or(0, BonusRound::remaining_secs)
    }

    pub fn current_bonus_challenge(&self) -> Option<&BonusChallenge> {
        self.bonus.as_ref().map(BonusRound::challenge)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Finished either way: out of lives or every level's words solved.
    pub fn is_completed(&self) -> bool {
        self.game_over || self.content_exhausted
    }

    /// Finished by solving every word.
    pub fn is_content_exhausted(&self) -> bool {
        self.content_exhausted
    }

    pub(crate) fn clear_word(&mut self) {
        self.current_word = None;
        self.tiles.clear();
        self.selection.clear();
    }

    pub(crate) fn summary(&self, play_secs: u64) -> GameSummary {
        GameSummary {
            score: self.score(),
            level: self.level,
            words_completed: self.words_completed,
            hints_used: self.hints_used,
            bonus_rounds_played: self.bonus_rounds_played,
            bonus_rounds_completed: self.bonus_rounds_completed,
            play_secs,
            completed: self.content_exhausted,
        }
    }
}

/// Continuable game state handed to and from the persistence store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub level: Level,
    pub score: u32,
    pub lives: u8,
    pub hints_remaining: u32,
    pub streak: u32,
    pub completed_words: BTreeMap<usize, BTreeSet<String>>,
    /// Unix seconds.
    pub saved_at: u64,
}

impl SessionSnapshot {
    pub fn from_session(session: &GameSession, saved_at: u64) -> Self {
        Self {
            level: session.level,
            score: session.score(),
            lives: session.lives(),
            hints_remaining: session.hints_remaining(),
            streak: session.streak(),
            completed_words: session.progress.as_map().clone(),
            saved_at,
        }
    }

    pub fn age_secs(&self, now: u64) -> u64 {
        now.saturating_sub(self.saved_at)
    }

    pub fn is_stale(&self, now: u64, rules: &GameRules) -> bool {
        self.age_secs(now) > rules.snapshot_max_age_secs
    }

    /// Checks that the snapshot can seed a playable session at time `now`.
    pub fn validate(&self, now: u64, rules: &GameRules) -> Result<()> {
        if !(1..=FINAL_LEVEL).contains(&self.level) {
            return Err(GameError::InvalidLevel(self.level));
        }

        if self.lives == 0 || self.lives > rules.max_lives {
            return Err(GameError::LivesOutOfRange {
                lives: self.lives,
                max: rules.max_lives,
            });
        }

        if self.is_stale(now, rules) {
            return Err(GameError::StaleSnapshot {
                age_secs: self.age_secs(now),
                max_age_secs: rules.snapshot_max_age_secs,
            });
        }

        Ok(())
    }
}
