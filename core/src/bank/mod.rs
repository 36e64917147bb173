use alloc::vec::Vec;

use crate::*;

mod builtin;

/// Read-only vocabulary and bonus-challenge tables.
///
/// Lookups outside the table bounds return an empty slice, callers treat that as "no content".
pub trait ContentBank {
    fn words_for_length(&self, length: usize) -> &[Word];
    fn challenges_for_level(&self, level: Level) -> &[BonusChallenge];
}

impl<T: ContentBank + ?Sized> ContentBank for &T {
    fn words_for_length(&self, length: usize) -> &[Word] {
        (**self).words_for_length(length)
    }

    fn challenges_for_level(&self, level: Level) -> &[BonusChallenge] {
        (**self).challenges_for_level(level)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordBank {
    /// Indexed by `length - MIN_WORD_LENGTH`.
    words: Vec<Vec<Word>>,
    /// Indexed by `level - 1`.
    challenges: Vec<Vec<BonusChallenge>>,
}

impl WordBank {
    /// The vocabulary shipped with the game.
    pub fn builtin() -> Self {
        Self::from_parts(builtin::words(), builtin::challenges())
    }

    /// Groups `words` into buckets by letter count and `challenges` by level.
    ///
    /// Words outside `MIN_WORD_LENGTH..=MAX_WORD_LENGTH` and challenges for levels outside
    /// `1..=FINAL_LEVEL` are dropped.
    pub fn from_parts(
        words: impl IntoIterator<Item = Word>,
        challenges: impl IntoIterator<Item = (Level, BonusChallenge)>,
    ) -> Self {
        let mut bank = Self {
            words: (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).map(|_| Vec::new()).collect(),
            challenges: (1..=FINAL_LEVEL).map(|_| Vec::new()).collect(),
        };

        for word in words {
            let length = word.len();
            match length.checked_sub(MIN_WORD_LENGTH).and_then(|i| bank.words.get_mut(i)) {
                Some(bucket) => bucket.push(word),
                None => log::warn!(
                    target: "otiyot::bank",
                    "Dropping word {:?} with unsupported length {}",
                    word.script,
                    length
                ),
            }
        }

        for (level, challenge) in challenges {
            match usize::from(level)
                .checked_sub(1)
                .and_then(|i| bank.challenges.get_mut(i))
            {
                Some(bucket) => bucket.push(challenge),
                None => log::warn!(
                    target: "otiyot::bank",
                    "Dropping bonus challenge {} for unsupported level {}",
                    challenge.id,
                    level
                ),
            }
        }

        bank
    }

    pub fn word_count(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }
}

impl ContentBank for WordBank {
    fn words_for_length(&self, length: usize) -> &[Word] {
        length
            .checked_sub(MIN_WORD_LENGTH)
            .and_then(|i| self.words.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn challenges_for_level(&self, level: Level) -> &[BonusChallenge] {
        usize::from(level)
            .checked_sub(1)
            .and_then(|i| self.challenges.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_buckets_only_hold_words_of_their_length() {
        let bank = WordBank::builtin();

        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            let words = bank.words_for_length(length);
            assert!(!words.is_empty(), "no words of length {length}");
            assert!(words.iter().all(|word| word.len() == length));
        }
    }

    #[test]
    fn builtin_challenges_contain_their_answer() {
        let bank = WordBank::builtin();

        for level in 1..FINAL_LEVEL {
            let challenges = bank.challenges_for_level(level);
            assert!(!challenges.is_empty(), "no challenges for level {level}");
            for challenge in challenges {
                assert!(challenge.options.contains(&challenge.correct));
            }
        }
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let bank = WordBank::builtin();

        assert!(bank.words_for_length(0).is_empty());
        assert!(bank.words_for_length(1).is_empty());
        assert!(bank.words_for_length(MAX_WORD_LENGTH + 1).is_empty());
        assert!(bank.challenges_for_level(0).is_empty());
        assert!(bank.challenges_for_level(FINAL_LEVEL + 1).is_empty());
    }

    #[test]
    fn from_parts_drops_unsupported_words() {
        let bank = WordBank::from_parts(
            [
                Word::new(1, "א", "a", "too short"),
                Word::new(2, "אב", "av", "father"),
                Word::new(3, "אבגדהוז", "-", "too long"),
            ],
            [],
        );

        assert_eq!(bank.word_count(), 1);
        assert_eq!(bank.words_for_length(2)[0].script, "אב");
    }
}
