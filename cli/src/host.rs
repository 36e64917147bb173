use std::io::Write;
use std::time::Duration;

use otiyot_core::*;
use web_time::{Instant, SystemTime};

use crate::command::Command;
use crate::config::HostConfig;
use crate::feedback::TerminalFeedback;
use crate::store::FileStore;
use crate::view;

/// Unix seconds, 0 if the system clock is before the epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Wall-clock source of bonus-round ticks.
///
/// Input is read line by line, so the seconds that passed while waiting are delivered as a burst
/// of ticks before the next command runs.
#[derive(Debug)]
struct BonusClock {
    token: TimerToken,
    since: Instant,
    delivered: u64,
}

impl BonusClock {
    fn new(token: TimerToken) -> Self {
        Self {
            token,
            since: Instant::now(),
            delivered: 0,
        }
    }

    fn due(&self) -> u64 {
        self.since.elapsed().as_secs().saturating_sub(self.delivered)
    }
}

pub struct Host {
    game: GameController<WordBank, TerminalFeedback>,
    store: FileStore,
    advance_delay: Duration,
    clock: Option<BonusClock>,
    started_at: Instant,
}

impl Host {
    pub fn new(config: &HostConfig, store: FileStore, seed: u64) -> Self {
        let feedback = TerminalFeedback::new(config.sound, config.haptics);
        Self {
            game: GameController::with_feedback(WordBank::builtin(), config.rules.clone(), seed, feedback),
            store,
            advance_delay: Duration::from_millis(config.advance_delay_ms),
            clock: None,
            started_at: Instant::now(),
        }
    }

    /// Continues the saved game unless `fresh` is set.
    pub fn begin(&mut self, fresh: bool) {
        let transition = if fresh {
            self.store.clear_snapshot();
            self.game.start()
        } else {
            self.game.resume(&mut self.store, unix_now())
        };
        self.started_at = Instant::now();
        println!("{}", Command::HELP);
        self.on_transition(transition);
    }

    pub fn prompt(&self) {
        print!("> ");
        let _ = std::io::stdout().flush();
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        self.catch_up_ticks();

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                return Flow::Continue;
            }
        };

        let flow = self.run(command);
        if flow == Flow::Continue {
            self.game.save(&mut self.store, unix_now());
        }
        flow
    }

    /// Saves and releases every pending callback before exit.
    pub fn shutdown(&mut self) {
        if self.game.teardown().is_some_and(Transition::is_finished) {
            self.finish();
        }
        self.clock = None;
        self.game.save(&mut self.store, unix_now());
        log::info!(target: "otiyot::session", "Saved to {}", self.store.dir().display());
    }

    fn run(&mut self, command: Command) -> Flow {
        match command {
            Command::Tile(index) => match self.game.select_letter(index) {
                SelectOutcome::Answered(outcome) => self.on_answer(outcome),
                SelectOutcome::NoChange => self.explain_ignored(),
                SelectOutcome::Selected | SelectOutcome::Deselected => self.show_board(),
            },
            Command::Reset => {
                if self.game.reset_selection() {
                    self.show_board();
                } else {
                    self.explain_ignored();
                }
            }
            Command::Hint => match self.game.request_hint() {
                HintOutcome::Answered(outcome) => {
                    self.show_board();
                    self.on_answer(outcome);
                }
                HintOutcome::Applied => self.show_board(),
                HintOutcome::NoChange if self.game.session().hints_remaining() == 0 => println!("No hints left"),
                HintOutcome::NoChange => self.explain_ignored(),
            },
            Command::Bonus(index) => self.answer_bonus(index),
            Command::Save => {
                self.game.save(&mut self.store, unix_now());
                println!("Saved");
            }
            Command::Leaderboard => print!("{}", view::leaderboard(self.store.leaderboard())),
            Command::Statistics => print!("{}", view::statistics(self.store.statistics())),
            Command::Learned => print!("{}", view::learned(self.store.learned())),
            Command::NewGame => {
                self.clock = None;
                self.store.clear_snapshot();
                self.started_at = Instant::now();
                let transition = self.game.start();
                self.on_transition(transition);
            }
            Command::Help => println!("{}", Command::HELP),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn answer_bonus(&mut self, index: usize) {
        let Some(option) = self
            .game
            .session()
            .current_bonus_challenge()
            .and_then(|challenge| challenge.options.get(index))
            .cloned()
        else {
            println!("There is no such bonus option right now");
            return;
        };

        match self.game.select_bonus_option(&option) {
            BonusOutcome::Resolved { resolution, transition } => {
                self.clock = None;
                match resolution {
                    BonusResolution::Success => println!("Correct! Bonus points and hints awarded"),
                    _ => println!("Not quite, on to the next level"),
                }
                self.on_transition(transition);
            }
            BonusOutcome::NoChange => self.explain_ignored(),
        }
    }

    fn on_answer(&mut self, outcome: AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct { points, advance } => {
                if let Some(word) = self.game.session().current_word() {
                    println!("{} is right! +{} points ({})", word.script, points, word.meaning);
                }
                std::thread::sleep(self.advance_delay);
                if let Some(transition) = self.game.advance(advance) {
                    self.on_transition(transition);
                }
            }
            AnswerOutcome::Incorrect { lives_left } => {
                println!("Not this time, {} lives left", lives_left);
                self.show_board();
            }
            AnswerOutcome::GameOver => {
                println!("Out of lives. Game over!");
                self.finish();
            }
        }
    }

    fn on_transition(&mut self, transition: Transition) {
        match transition {
            Transition::NextWord => self.show_board(),
            Transition::LevelUp(level) => {
                println!("Level {}!", level);
                self.show_board();
            }
            Transition::BonusRound(token) => {
                self.clock = Some(BonusClock::new(token));
                print!("{}", view::bonus(self.game.session()));
            }
            Transition::Completed => {
                println!("Every word solved!");
                self.finish();
            }
        }
    }

    fn catch_up_ticks(&mut self) {
        let Some(clock) = self.clock.as_mut() else {
            return;
        };

        for _ in 0..clock.due() {
            clock.delivered += 1;
            match self.game.tick(clock.token) {
                TickOutcome::Counting(_) => {}
                TickOutcome::TimedOut(transition) => {
                    self.clock = None;
                    println!("Time is up!");
                    self.on_transition(transition);
                    return;
                }
                TickOutcome::Stale => {
                    self.clock = None;
                    return;
                }
            }
        }
    }

    fn finish(&mut self) {
        self.clock = None;
        let now = unix_now();
        let play_secs = self.started_at.elapsed().as_secs();
        let entry = self.game.record_results(&mut self.store, now, play_secs);

        let session = self.game.session();
        println!(
            "Final score {} at level {}, {} words solved",
            session.score(),
            session.level(),
            session.words_completed()
        );
        if let Some(rank) = entry.and_then(|id| {
            self.store
                .leaderboard()
                .entries()
                .iter()
                .position(|entry| entry.id == id)
        }) {
            println!("New high score, rank {}", rank + 1);
        }
        println!("Type new to play again or q to quit");
    }

    fn show_board(&self) {
        print!("{}", view::board(self.game.session(), self.game.rules()));
    }

    fn explain_ignored(&self) {
        match self.game.phase() {
            GamePhase::InBonusRound => print!("{}", view::bonus(self.game.session())),
            phase if phase.is_finished() => println!("The game is over, type new to play again"),
            _ => println!("That does nothing right now"),
        }
    }
}
