#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use bank::*;
pub use bonus::*;
pub use controller::*;
pub use error::*;
pub use feedback::*;
pub use level::{LevelProgress, NextWord};
pub use records::*;
pub use scoring::{LivesOutcome, Scorecard, points_for_correct_answer};
pub use session::*;
pub use store::*;
pub use timer::*;
pub use types::*;

mod bank;
mod bonus;
mod controller;
mod error;
mod feedback;
pub mod level;
pub mod puzzle;
mod records;
pub mod scoring;
mod session;
mod store;
mod timer;
mod types;

const DAY_SECS: u64 = 24 * 60 * 60;

/// Tunable constants of the game economy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub max_lives: u8,
    pub starting_hints: u32,
    pub hint_penalty: u32,
    pub points_per_letter: u32,
    /// Consecutive correct answers needed before the multiplier applies.
    pub streak_bonus_threshold: u32,
    pub bonus_numerator: u32,
    pub bonus_denominator: u32,
    pub bonus_round_secs: u32,
    pub bonus_hint_reward: u32,
    pub bonus_score_reward: u32,
    /// Saved games older than this are discarded instead of restored.
    pub snapshot_max_age_secs: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_lives: 10,
            starting_hints: 15,
            hint_penalty: 5,
            points_per_letter: 10,
            streak_bonus_threshold: 3,
            bonus_numerator: 3,
            bonus_denominator: 2,
            bonus_round_secs: 10,
            bonus_hint_reward: 3,
            bonus_score_reward: 30,
            snapshot_max_age_secs: 30 * DAY_SECS,
        }
    }
}

impl GameRules {
    /// Rejects rules under which a session could not be played, such as starting without lives.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("max_lives", u32::from(self.max_lives)),
            ("bonus_denominator", self.bonus_denominator),
            ("bonus_round_secs", self.bonus_round_secs),
        ];
        match required.into_iter().find(|&(_, value)| value == 0) {
            Some((rule, _)) => Err(GameError::InvalidRule(rule)),
            None => Ok(()),
        }
    }
}

/// Where the session went after a word was finished or a bonus round was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new word of the same level is on the board.
    NextWord,
    /// The level ran out of words; a bonus round is counting down with this token.
    BonusRound(TimerToken),
    /// The session moved up to this level and its first word is on the board.
    LevelUp(Level),
    /// Every level's words are solved.
    Completed,
}

impl Transition {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The host calls [`GameController::advance`] with `advance` once its animation is done.
    Correct { points: u32, advance: AdvanceTicket },
    Incorrect { lives_left: u8 },
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Deselected,
    Answered(AnswerOutcome),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    NoChange,
    Applied,
    Answered(AnswerOutcome),
}

impl HintOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BonusOutcome {
    NoChange,
    Resolved {
        resolution: BonusResolution,
        transition: Transition,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The token belongs to a cancelled or finished countdown.
    Stale,
    Counting(u32),
    TimedOut(Transition),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    InBonusRound,
    GameOver,
    Completed,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Completed)
    }
}
