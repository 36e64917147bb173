//! Tile shuffling and answer checking.

use alloc::string::String;
use rand::prelude::*;

use crate::*;

/// Reshuffles before falling back to a rotation when a shuffle keeps landing on the solved order.
const MAX_RESHUFFLES: usize = 8;

/// Splits `word` into tiles in random order.
///
/// The result is never the solved order when the letters allow another arrangement.
pub fn shuffle<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Tiles {
    let solved: Tiles = word.letters().collect();
    let mut tiles = solved.clone();

    if !has_distinct_letters(&solved) {
        return tiles;
    }

    for _ in 0..MAX_RESHUFFLES {
        tiles.shuffle(rng);
        if tiles != solved {
            return tiles;
        }
    }

    log::debug!(
        target: "otiyot::puzzle",
        "Shuffle of {:?} kept the solved order, rotating",
        word.script
    );
    // a rotation only matches the original when every letter is the same
    tiles.rotate_left(1);
    tiles
}

/// Whether the tiles picked by `selection` spell `target` exactly.
///
/// Comparison is per `char` with no normalization. Indices outside `tiles` never match.
pub fn validate(selection: &[usize], tiles: &[char], target: &Word) -> bool {
    if selection.len() != target.len() {
        return false;
    }

    selection
        .iter()
        .map(|&index| tiles.get(index).copied())
        .zip(target.letters())
        .all(|(tile, letter)| tile == Some(letter))
}

/// Text spelled by `selection` so far.
pub fn spelled(selection: &[usize], tiles: &[char]) -> String {
    selection
        .iter()
        .filter_map(|&index| tiles.get(index))
        .collect()
}

/// Whether `selection` spells the beginning of `target`.
pub fn is_correct_prefix(selection: &[usize], tiles: &[char], target: &Word) -> bool {
    selection.len() <= target.len()
        && selection
            .iter()
            .map(|&index| tiles.get(index).copied())
            .zip(target.letters())
            .all(|(tile, letter)| tile == Some(letter))
}

fn has_distinct_letters(tiles: &[char]) -> bool {
    tiles.windows(2).any(|pair| pair[0] != pair[1])
}
