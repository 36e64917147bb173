use std::io::Write;

use otiyot_core::Feedback;

/// Terminal stand-in for sound and haptics: a bell for the big moments, a log line for the rest.
#[derive(Debug)]
pub struct TerminalFeedback {
    sound: bool,
    haptics: bool,
}

impl TerminalFeedback {
    pub fn new(sound: bool, haptics: bool) -> Self {
        Self { sound, haptics }
    }

    fn cue(&self, event: &str, bell: bool) {
        log::trace!(target: "otiyot::feedback", "{}", event);
        if self.haptics {
            log::debug!(target: "otiyot::feedback", "haptic pulse for {}", event);
        }
        if bell && self.sound {
            let mut stdout = std::io::stdout();
            // a terminal that cannot ring just stays quiet
            let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
        }
    }
}

impl Feedback for TerminalFeedback {
    fn on_letter_selected(&mut self) {
        self.cue("letter selected", false);
    }

    fn on_button_tap(&mut self) {
        self.cue("button tap", false);
    }

    fn on_correct_answer(&mut self) {
        self.cue("correct answer", true);
    }

    fn on_wrong_answer(&mut self) {
        self.cue("wrong answer", true);
    }

    fn on_hint_used(&mut self) {
        self.cue("hint used", false);
    }

    fn on_level_up(&mut self) {
        self.cue("level up", true);
    }

    fn on_bonus_round_start(&mut self) {
        self.cue("bonus round", true);
    }

    fn on_game_over(&mut self) {
        self.cue("game over", true);
    }

    fn on_game_complete(&mut self) {
        self.cue("game complete", true);
    }
}
