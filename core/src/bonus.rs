//! Timed pronunciation round played between levels.

use rand::prelude::*;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BonusResolution {
    Success,
    WrongAnswer,
    Timeout,
    /// The level has no challenges, so the round was skipped without starting a timer.
    NoChallenge,
}

impl BonusResolution {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Score and hints granted for this resolution.
    pub const fn reward(self, rules: &GameRules) -> (u32, u32) {
        match self {
            Self::Success => (rules.bonus_score_reward, rules.bonus_hint_reward),
            Self::WrongAnswer | Self::Timeout | Self::NoChallenge => (0, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BonusTick {
    Stale,
    Counting(u32),
    Expired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BonusRound {
    level: Level,
    challenge: BonusChallenge,
    remaining_secs: u32,
    timer: Option<TimerToken>,
}

impl BonusRound {
    /// Picks a challenge for `level` and arms the countdown. `None` when the level has none.
    pub fn begin<B, R>(bank: &B, level: Level, rules: &GameRules, rng: &mut R, epoch: Epoch) -> Option<Self>
    where
        B: ContentBank + ?Sized,
        R: Rng + ?Sized,
    {
        let challenge = bank.challenges_for_level(level).choose(rng)?.clone();
        log::debug!(
            target: "otiyot::bonus",
            "Bonus round for level {} asks about {:?}",
            level,
            challenge.decorated_letter
        );
        Some(Self {
            level,
            challenge,
            remaining_secs: rules.bonus_round_secs,
            timer: Some(TimerToken::new(epoch)),
        })
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn challenge(&self) -> &BonusChallenge {
        &self.challenge
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Token the host must pass to every tick, `None` while the countdown is cancelled.
    pub fn timer(&self) -> Option<TimerToken> {
        self.timer
    }

    pub fn is_counting(&self) -> bool {
        self.timer.is_some()
    }

    pub fn answer(&self, option: &str) -> BonusResolution {
        if self.challenge.is_correct(option) {
            BonusResolution::Success
        } else {
            BonusResolution::WrongAnswer
        }
    }

    pub(crate) fn tick(&mut self, token: TimerToken) -> BonusTick {
        if self.timer != Some(token) {
            return BonusTick::Stale;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.timer = None;
            BonusTick::Expired
        } else {
            BonusTick::Counting(self.remaining_secs)
        }
    }

    /// Stops the countdown. Returns `false` if it was not running.
    pub(crate) fn cancel_timer(&mut self) -> bool {
        self.timer.take().is_some()
    }

    pub(crate) fn resume_timer(&mut self, epoch: Epoch) -> Option<TimerToken> {
        if self.remaining_secs == 0 {
            return None;
        }
        let token = TimerToken::new(epoch);
        self.timer = Some(token);
        Some(token)
    }
}
