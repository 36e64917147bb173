//! Points, streaks, lives and hints.

use serde::{Deserialize, Serialize};

use crate::*;

/// Points for a correctly spelled word of `word_length` letters.
///
/// The streak bonus multiplies by `bonus_numerator / bonus_denominator`, rounding down.
pub fn points_for_correct_answer(word_length: usize, bonus_active: bool, rules: &GameRules) -> u32 {
    let length = u32::try_from(word_length).unwrap_or(u32::MAX);
    let points = length.saturating_mul(rules.points_per_letter);
    if bonus_active {
        points.saturating_mul(rules.bonus_numerator) / rules.bonus_denominator.max(1)
    } else {
        points
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LivesOutcome {
    Remaining(u8),
    Exhausted,
}

/// Score, streak and the lives/hints economy of one session.
///
/// `bonus_active` always equals `streak >= streak_bonus_threshold`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    score: u32,
    streak: u32,
    bonus_active: bool,
    lives: u8,
    max_lives: u8,
    hints_remaining: u32,
}

impl Scorecard {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            score: 0,
            streak: 0,
            bonus_active: false,
            lives: rules.max_lives,
            max_lives: rules.max_lives,
            hints_remaining: rules.starting_hints,
        }
    }

    /// Rebuilds a scorecard from persisted values, clamping lives to the maximum.
    pub fn from_parts(score: u32, streak: u32, lives: u8, hints_remaining: u32, rules: &GameRules) -> Self {
        Self {
            score,
            streak,
            bonus_active: streak >= rules.streak_bonus_threshold,
            lives: lives.min(rules.max_lives),
            max_lives: rules.max_lives,
            hints_remaining,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn bonus_active(&self) -> bool {
        self.bonus_active
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    /// Extends the streak and awards points for the word, returning the points added.
    pub fn on_correct(&mut self, word_length: usize, rules: &GameRules) -> u32 {
        self.streak = self.streak.saturating_add(1);
        self.bonus_active = self.streak >= rules.streak_bonus_threshold;
        let points = points_for_correct_answer(word_length, self.bonus_active, rules);
        self.score = self.score.saturating_add(points);
        points
    }

    pub fn on_incorrect(&mut self) -> LivesOutcome {
        self.streak = 0;
        self.bonus_active = false;
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            LivesOutcome::Exhausted
        } else {
            LivesOutcome::Remaining(self.lives)
        }
    }

    /// Spends a hint. Returns `false` without any change when none are left.
    pub fn on_hint_used(&mut self, rules: &GameRules) -> bool {
        if self.hints_remaining == 0 {
            return false;
        }
        self.hints_remaining -= 1;
        self.score = self.score.saturating_sub(rules.hint_penalty);
        true
    }

    pub fn add_reward(&mut self, score: u32, hints: u32) {
        self.score = self.score.saturating_add(score);
        self.hints_remaining = self.hints_remaining.saturating_add(hints);
    }
}
