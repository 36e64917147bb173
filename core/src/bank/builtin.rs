use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

type WordEntry = (&'static str, &'static str, &'static str);

const WORDS_2: &[WordEntry] = &[
    ("אב", "av", "father"),
    ("אם", "em", "mother"),
    ("בן", "ben", "son"),
    ("בת", "bat", "daughter"),
    ("יד", "yad", "hand"),
    ("עץ", "ets", "tree"),
    ("ים", "yam", "sea"),
    ("גן", "gan", "garden"),
    ("חם", "kham", "hot"),
    ("דג", "dag", "fish"),
];

const WORDS_3: &[WordEntry] = &[
    ("ספר", "sefer", "book"),
    ("בית", "bayit", "house"),
    ("לחם", "lekhem", "bread"),
    ("מים", "mayim", "water"),
    ("ילד", "yeled", "boy"),
    ("כלב", "kelev", "dog"),
    ("שמש", "shemesh", "sun"),
    ("אור", "or", "light"),
    ("יום", "yom", "day"),
    ("עיר", "ir", "city"),
];

const WORDS_4: &[WordEntry] = &[
    ("שלום", "shalom", "peace"),
    ("תודה", "toda", "thank you"),
    ("ילדה", "yalda", "girl"),
    ("לילה", "layla", "night"),
    ("בוקר", "boker", "morning"),
    ("חלון", "khalon", "window"),
    ("אוכל", "okhel", "food"),
    ("כיסא", "kise", "chair"),
    ("מורה", "more", "teacher"),
    ("עולם", "olam", "world"),
];

const WORDS_5: &[WordEntry] = &[
    ("שולחן", "shulkhan", "table"),
    ("תלמיד", "talmid", "student"),
    ("מחברת", "makhberet", "notebook"),
    ("משפחה", "mishpakha", "family"),
    ("מדינה", "medina", "country"),
    ("חנוכה", "khanuka", "Hanukkah"),
    ("ארוחה", "arukha", "meal"),
    ("עיתון", "iton", "newspaper"),
    ("גלידה", "glida", "ice cream"),
    ("מסעדה", "mis'ada", "restaurant"),
];

const WORDS_6: &[WordEntry] = &[
    ("מכונית", "mekhonit", "car"),
    ("ספרייה", "sifriya", "library"),
    ("תלמידה", "talmida", "student (f)"),
    ("שוקולד", "shokolad", "chocolate"),
    ("תפוזים", "tapuzim", "oranges"),
    ("מלפפון", "melafefon", "cucumber"),
    ("חשמלית", "khashmalit", "tram"),
    ("מחברות", "makhbarot", "notebooks"),
];

static WORD_TABLE: [&[WordEntry]; MAX_WORD_LENGTH - MIN_WORD_LENGTH + 1] =
    [WORDS_2, WORDS_3, WORDS_4, WORDS_5, WORDS_6];

/// `(decorated letter, options, correct option, vowel name, hint)`
type ChallengeEntry = (
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
    &'static str,
);

const CHALLENGES_1: &[ChallengeEntry] = &[
    ("בָּ", &["ba", "bi", "bu"], "ba", "kamatz", "A T-shape under the letter sounds like 'a'"),
    ("בִּ", &["ba", "bi", "be"], "bi", "hiriq", "A single dot under the letter sounds like 'i'"),
    ("בֻּ", &["bo", "bu", "ba"], "bu", "kubutz", "Three slanted dots sound like 'u'"),
];

const CHALLENGES_2: &[ChallengeEntry] = &[
    ("מֶ", &["me", "ma", "mi"], "me", "segol", "Three dots in a triangle sound like 'e'"),
    ("מַ", &["mo", "ma", "mu"], "ma", "patach", "A flat line under the letter sounds like 'a'"),
    ("מוֹ", &["mu", "mi", "mo"], "mo", "holam", "A dot above a vav sounds like 'o'"),
];

const CHALLENGES_3: &[ChallengeEntry] = &[
    ("לֵ", &["le", "la", "lu"], "le", "tsere", "Two dots side by side sound like 'e'"),
    ("לוּ", &["lo", "lu", "li"], "lu", "shuruk", "A dot inside a vav sounds like 'u'"),
    ("לִי", &["le", "li", "la"], "li", "hiriq male", "Hiriq followed by yod sounds like 'i'"),
];

const CHALLENGES_4: &[ChallengeEntry] = &[
    ("שׁ", &["sh", "s", "ts"], "sh", "shin", "A dot on the right shoulder makes 'sh'"),
    ("שׂ", &["sh", "s", "z"], "s", "sin", "A dot on the left shoulder makes 's'"),
    ("כּ", &["kh", "k", "g"], "k", "kaf dagesh", "A dot inside kaf makes it hard"),
];

const CHALLENGES_5: &[ChallengeEntry] = &[
    ("פּ", &["f", "p", "b"], "p", "pe dagesh", "A dot inside pe makes 'p'"),
    ("פ", &["f", "p", "v"], "f", "fe", "Without a dot, pe is soft"),
    ("בְ", &["v", "b", "ve"], "ve", "shva", "Two vertical dots are a short 'e' or silent"),
];

static CHALLENGE_TABLE: [&[ChallengeEntry]; FINAL_LEVEL as usize - 1] =
    [CHALLENGES_1, CHALLENGES_2, CHALLENGES_3, CHALLENGES_4, CHALLENGES_5];

pub(super) fn words() -> impl Iterator<Item = Word> {
    WORD_TABLE.iter().zip(MIN_WORD_LENGTH..).flat_map(|(entries, length)| {
        entries.iter().zip(0..).map(move |(&(script, transliteration, meaning), index)| {
            // ids stay stable when words are appended to a bucket
            let id = length as u32 * 100 + index;
            Word::new(id, script, transliteration, meaning)
        })
    })
}

pub(super) fn challenges() -> impl Iterator<Item = (Level, BonusChallenge)> {
    CHALLENGE_TABLE.iter().zip(1..).flat_map(|(entries, level): (_, Level)| {
        entries.iter().zip(0..).map(
            move |(&(letter, options, correct, sound_label, hint), index)| {
                let challenge = BonusChallenge {
                    id: u32::from(level) * 100 + index,
                    decorated_letter: letter.into(),
                    options: options.iter().copied().map(String::from).collect::<Vec<_>>(),
                    correct: correct.into(),
                    sound_label: sound_label.into(),
                    hint: hint.into(),
                };
                (level, challenge)
            },
        )
    })
}
