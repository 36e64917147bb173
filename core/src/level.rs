//! Word selection and level completion.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextWord<'a> {
    Word(&'a Word),
    LevelExhausted,
}

/// Scripts the player already solved, bucketed by word length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelProgress {
    completed: BTreeMap<usize, BTreeSet<String>>,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(completed: BTreeMap<usize, BTreeSet<String>>) -> Self {
        Self { completed }
    }

    pub fn as_map(&self) -> &BTreeMap<usize, BTreeSet<String>> {
        &self.completed
    }

    pub fn completed_for(&self, length: usize) -> Option<&BTreeSet<String>> {
        self.completed.get(&length)
    }

    pub fn is_completed(&self, word: &Word) -> bool {
        self.completed_for(word.len())
            .is_some_and(|scripts| scripts.contains(&word.script))
    }

    /// Records `word` as solved. Returns `false` if it already was.
    pub fn mark_completed(&mut self, word: &Word) -> bool {
        self.completed
            .entry(word.len())
            .or_default()
            .insert(word.script.clone())
    }

    pub fn total_completed(&self) -> usize {
        self.completed.values().map(BTreeSet::len).sum()
    }
}

/// Picks a random unsolved word for `level`.
pub fn next_word<'a, B, R>(bank: &'a B, level: Level, progress: &LevelProgress, rng: &mut R) -> NextWord<'a>
where
    B: ContentBank + ?Sized,
    R: Rng + ?Sized,
{
    let length = word_length_for_level(level);
    let candidates: Vec<&Word> = bank
        .words_for_length(length)
        .iter()
        .filter(|word| !progress.is_completed(word))
        .collect();

    match candidates.choose(rng) {
        Some(&word) => NextWord::Word(word),
        None => NextWord::LevelExhausted,
    }
}

/// Share of the level's words already solved, `0.0..=100.0`. An empty bank counts as 0%.
pub fn level_progress_percent<B: ContentBank + ?Sized>(bank: &B, level: Level, progress: &LevelProgress) -> f32 {
    let words = bank.words_for_length(word_length_for_level(level));
    if words.is_empty() {
        return 0.0;
    }

    let solved = words.iter().filter(|word| progress.is_completed(word)).count();
    100.0 * solved as f32 / words.len() as f32
}
