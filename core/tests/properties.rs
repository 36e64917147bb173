//! Property-based checks of the puzzle, scoring, level and leaderboard rules.

use std::collections::BTreeSet;

use otiyot_core::level::{self, LevelProgress, NextWord};
use otiyot_core::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const LETTERS: &[char] = &[
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ', 'ק', 'ר', 'ש', 'ת',
];

// Strategy for a word of a playable length, repeated letters allowed
fn word_strategy() -> impl Strategy<Value = Word> {
    prop::collection::vec(prop::sample::select(LETTERS), MIN_WORD_LENGTH..=MAX_WORD_LENGTH).prop_map(|letters| {
        let script: String = letters.into_iter().collect();
        Word::new(1, &script, "", "")
    })
}

fn sorted(letters: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut letters: Vec<char> = letters.into_iter().collect();
    letters.sort_unstable();
    letters
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(word in word_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tiles = puzzle::shuffle(&word, &mut rng);

        prop_assert_eq!(sorted(tiles.iter().copied()), sorted(word.letters()));
    }

    #[test]
    fn shuffle_avoids_the_solved_order(word in word_strategy(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tiles = puzzle::shuffle(&word, &mut rng);
        let solved: Vec<char> = word.letters().collect();

        let all_same = solved.windows(2).all(|pair| pair[0] == pair[1]);
        prop_assert_eq!(tiles.as_slice() == solved.as_slice(), all_same);
    }

    #[test]
    fn validate_matches_spelled_text(
        word in word_strategy(),
        seed in any::<u64>(),
        order in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tiles = puzzle::shuffle(&word, &mut rng);

        let mut selection: Vec<usize> = (0..tiles.len()).collect();
        let mut order_rng = SmallRng::seed_from_u64(order);
        rand::seq::SliceRandom::shuffle(selection.as_mut_slice(), &mut order_rng);

        let spelled = puzzle::spelled(&selection, &tiles);
        prop_assert_eq!(puzzle::validate(&selection, &tiles, &word), spelled == word.script);
    }

    #[test]
    fn scoring_is_deterministic(length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH, bonus in any::<bool>()) {
        let rules = GameRules::default();
        let points = points_for_correct_answer(length, bonus, &rules);

        prop_assert_eq!(points, points_for_correct_answer(length, bonus, &rules));
        prop_assert!(points >= points_for_correct_answer(length, false, &rules));
    }

    #[test]
    fn bonus_tracks_the_streak(answers in prop::collection::vec(any::<bool>(), 0..40)) {
        let rules = GameRules {
            max_lives: u8::MAX,
            ..GameRules::default()
        };
        let mut card = Scorecard::new(&rules);

        for correct in answers {
            if correct {
                card.on_correct(3, &rules);
            } else {
                card.on_incorrect();
            }
            prop_assert_eq!(card.bonus_active(), card.streak() >= 3);
        }
    }

    #[test]
    fn lives_stop_at_zero(max_lives in 1u8..=20, misses in 0usize..40) {
        let rules = GameRules {
            max_lives,
            ..GameRules::default()
        };
        let mut card = Scorecard::new(&rules);
        let mut exhausted_at = None;

        for miss in 1..=misses {
            if card.on_incorrect() == LivesOutcome::Exhausted && exhausted_at.is_none() {
                exhausted_at = Some(miss);
            }
        }

        prop_assert_eq!(card.lives(), max_lives.saturating_sub(u8::try_from(misses).unwrap_or(u8::MAX)));
        let expected = (misses >= usize::from(max_lives)).then_some(usize::from(max_lives));
        prop_assert_eq!(exhausted_at, expected);
    }

    #[test]
    fn exhausted_level_offers_no_word(level in 1u8..=FINAL_LEVEL, seed in any::<u64>()) {
        let bank = WordBank::builtin();
        let mut progress = LevelProgress::new();
        for word in bank.words_for_length(word_length_for_level(level)) {
            progress.mark_completed(word);
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..8 {
            prop_assert_eq!(level::next_word(&bank, level, &progress, &mut rng), NextWord::LevelExhausted);
        }
    }

    #[test]
    fn unsolved_words_are_the_only_candidates(level in 1u8..=5, solved in 0usize..8, seed in any::<u64>()) {
        let bank = WordBank::builtin();
        let words = bank.words_for_length(word_length_for_level(level));
        let mut progress = LevelProgress::new();
        for word in words.iter().take(solved) {
            progress.mark_completed(word);
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        match level::next_word(&bank, level, &progress, &mut rng) {
            NextWord::Word(word) => prop_assert!(!progress.is_completed(word)),
            NextWord::LevelExhausted => prop_assert!(solved >= words.len()),
        }
    }

    #[test]
    fn leaderboard_stays_sorted_and_bounded(scores in prop::collection::vec(0u32..1_000, 0..30)) {
        let mut board = Leaderboard::default();
        for (at, &score) in scores.iter().enumerate() {
            board.record(score, 1, 0, at as u64);
        }

        let kept: Vec<u32> = board.entries().iter().map(|entry| entry.score).collect();
        prop_assert!(kept.len() <= LEADERBOARD_SIZE);
        prop_assert!(kept.windows(2).all(|pair| pair[0] >= pair[1]));

        let mut expected = scores.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(LEADERBOARD_SIZE);
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn eleventh_score_drops_exactly_the_lowest(
        scores in prop::collection::vec(0u32..1_000, LEADERBOARD_SIZE),
        extra in 0u32..1_000,
    ) {
        let mut board = Leaderboard::default();
        for &score in &scores {
            board.record(score, 1, 0, 0);
        }
        let before: BTreeSet<EntryId> = board.entries().iter().map(|entry| entry.id).collect();
        let lowest = board.entries().last().map(|entry| entry.id);

        let id = board.record(extra, 1, 0, 1);

        prop_assert_eq!(board.entries().len(), LEADERBOARD_SIZE);
        let after: BTreeSet<EntryId> = board.entries().iter().map(|entry| entry.id).collect();
        match id {
            Some(id) => {
                prop_assert!(after.contains(&id));
                prop_assert!(lowest.is_some_and(|lowest| !after.contains(&lowest)));
                prop_assert_eq!(before.intersection(&after).count(), LEADERBOARD_SIZE - 1);
            }
            None => prop_assert_eq!(after, before),
        }
    }
}
