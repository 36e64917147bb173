use std::fmt::Write;

use otiyot_core::{GameRules, GameSession, Leaderboard, LearnedWords, Statistics};

/// Status line, the tiles with their numbers and what has been spelled so far.
pub fn board(session: &GameSession, rules: &GameRules) -> String {
    let mut out = String::new();
    let multiplier = if session.bonus_active() {
        format!(
            " x{}",
            f64::from(rules.bonus_numerator) / f64::from(rules.bonus_denominator.max(1))
        )
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        "Level {}  {:.0}%  score {}  streak {}{}  lives {}/{}  hints {}",
        session.level(),
        session.level_progress_percent(),
        session.score(),
        session.streak(),
        multiplier,
        session.lives(),
        session.max_lives(),
        session.hints_remaining()
    );

    if let Some(word) = session.current_word() {
        let _ = writeln!(out, "Spell: {} ({})", word.meaning, word.transliteration);
    }
    for (index, letter) in session.tiles().iter().enumerate() {
        let mark = if session.is_selected(index) { '*' } else { ' ' };
        let _ = write!(out, " {}{}{}", index + 1, mark, letter);
    }
    if !session.tiles().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Picked: {}", session.spelled());
    }
    out
}

pub fn bonus(session: &GameSession) -> String {
    let mut out = String::new();
    let Some(challenge) = session.current_bonus_challenge() else {
        return out;
    };

    let _ = writeln!(
        out,
        "Bonus round, {}s left: how is {} read?",
        session.bonus_time_remaining_secs(),
        challenge.decorated_letter
    );
    if !challenge.hint.is_empty() {
        let _ = writeln!(out, "({})", challenge.hint);
    }
    for (index, option) in challenge.options.iter().enumerate() {
        let _ = writeln!(out, "  b {}: {}", index + 1, option);
    }
    out
}

pub fn leaderboard(board: &Leaderboard) -> String {
    if board.is_empty() {
        return "No high scores yet\n".into();
    }

    let mut out = String::new();
    for (rank, entry) in board.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:>6}  level {}  {} words",
            rank + 1,
            entry.score,
            entry.level,
            entry.words_completed
        );
    }
    out
}

pub fn statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Games played     {} ({} completed)", stats.games_played, stats.games_completed);
    let _ = writeln!(out, "Average score    {:.1}", stats.average_score());
    let _ = writeln!(out, "Highest score    {}", stats.highest_score);
    let _ = writeln!(out, "Highest level    {}", stats.highest_level);
    let _ = writeln!(out, "Words solved     {}", stats.total_words_completed);
    let _ = writeln!(out, "Hints used       {}", stats.hints_used);
    let _ = writeln!(
        out,
        "Bonus rounds     {} of {} won",
        stats.bonus_rounds_completed, stats.bonus_rounds_played
    );
    let _ = writeln!(
        out,
        "Play time        {}s total, {:.0}s per game",
        stats.total_play_secs,
        stats.average_play_secs()
    );
    out
}

pub fn learned(words: &LearnedWords) -> String {
    if words.is_empty() {
        return "No words learned yet\n".into();
    }

    let mut out = String::new();
    for word in words.iter() {
        let _ = writeln!(out, "{}  {}  {}", word.script, word.transliteration, word.meaning);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use otiyot_core::{GameController, GameSummary, SessionSnapshot, WordBank};

    use super::*;

    #[test]
    fn fresh_session_shows_full_lives() {
        let session = GameSession::new(&GameRules::default());
        let text = board(&session, &GameRules::default());

        assert!(text.starts_with("Level 1  0%  score 0  streak 0  lives 10/10  hints 15"));
        assert!(bonus(&session).is_empty());
    }

    #[test]
    fn streak_multiplier_follows_the_rules() {
        let rules = GameRules {
            bonus_numerator: 2,
            bonus_denominator: 1,
            ..GameRules::default()
        };
        let mut game = GameController::new(WordBank::builtin(), rules.clone(), 3);
        let snapshot = SessionSnapshot {
            level: 1,
            score: 60,
            lives: 10,
            hints_remaining: 15,
            streak: 3,
            completed_words: BTreeMap::new(),
            saved_at: 1_000,
        };
        game.restore(&snapshot, 1_000);

        let text = board(game.session(), &rules);
        assert!(text.contains("streak 3 x2  lives"));
        assert!(!text.contains("x1.5"));
    }

    #[test]
    fn empty_records_have_placeholders() {
        assert_eq!(leaderboard(&Leaderboard::default()), "No high scores yet\n");
        assert_eq!(learned(&LearnedWords::new()), "No words learned yet\n");
    }

    #[test]
    fn statistics_without_games_average_to_zero() {
        let text = statistics(&Statistics::default());
        assert!(text.contains("Average score    0.0"));

        let mut stats = Statistics::default();
        stats.record(&GameSummary {
            score: 30,
            play_secs: 90,
            ..GameSummary::default()
        });
        assert!(statistics(&stats).contains("Average score    30.0"));
    }
}
