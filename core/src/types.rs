use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One-based level index, `1..=FINAL_LEVEL`.
pub type Level = u8;

/// Last playable level; its words have `MAX_WORD_LENGTH` letters.
pub const FINAL_LEVEL: Level = 6;

pub const MIN_WORD_LENGTH: usize = 2;
pub const MAX_WORD_LENGTH: usize = 6;

/// Letter tiles as presented to the player, one `char` per tile.
pub type Tiles = SmallVec<[char; MAX_WORD_LENGTH]>;

/// Tile indices in the order the player picked them.
pub type Selection = SmallVec<[usize; MAX_WORD_LENGTH]>;

/// Number of letters the words of `level` have.
pub const fn word_length_for_level(level: Level) -> usize {
    if level < FINAL_LEVEL {
        level as usize + 1
    } else {
        MAX_WORD_LENGTH
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u32);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub script: String,
    pub transliteration: String,
    pub meaning: String,
}

impl Word {
    pub fn new(id: u32, script: &str, transliteration: &str, meaning: &str) -> Self {
        Self {
            id: WordId(id),
            script: script.into(),
            transliteration: transliteration.into(),
            meaning: meaning.into(),
        }
    }

    /// Letter count, which is also the number of tiles the word is split into.
    pub fn len(&self) -> usize {
        self.script.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.script.chars()
    }
}

/// Pronunciation question asked during a bonus round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusChallenge {
    pub id: u32,
    pub decorated_letter: String,
    pub options: Vec<String>,
    pub correct: String,
    pub sound_label: String,
    pub hint: String,
}

impl BonusChallenge {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_length_grows_with_level_until_the_last_one() {
        let lengths: Vec<_> = (1..=FINAL_LEVEL).map(word_length_for_level).collect();
        assert_eq!(lengths, [2, 3, 4, 5, 6, 6]);
    }

    #[test]
    fn word_length_counts_letters_not_bytes() {
        let word = Word::new(1, "שלום", "shalom", "peace");
        assert_eq!(word.len(), 4);
        assert!(word.script.len() > 4);
    }
}
