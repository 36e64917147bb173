use rand::prelude::*;

use crate::bonus::BonusTick;
use crate::level::level_progress_percent;
use crate::*;

/// Owns a [`GameSession`] and runs it from the first word to game over or completion.
///
/// The host serializes calls, supplies the clock (bonus ticks and the delayed [`advance`]) and
/// reads the session through [`session`] for display.
///
/// [`advance`]: GameController::advance
/// [`session`]: GameController::session
#[derive(Debug)]
pub struct GameController<B = WordBank, F = NoFeedback> {
    bank: B,
    rules: GameRules,
    rng: SmallRng,
    feedback: F,
    session: GameSession,
    started: bool,
    epoch: Epoch,
    pending_advance: Option<AdvanceTicket>,
    results_recorded: bool,
}

impl<B: ContentBank> GameController<B, NoFeedback> {
    pub fn new(bank: B, rules: GameRules, seed: u64) -> Self {
        Self::with_feedback(bank, rules, seed, NoFeedback)
    }
}

impl<B: ContentBank, F: Feedback> GameController<B, F> {
    pub fn with_feedback(bank: B, rules: GameRules, seed: u64, feedback: F) -> Self {
        let session = GameSession::new(&rules);
        Self {
            bank,
            rules,
            rng: SmallRng::seed_from_u64(seed),
            feedback,
            session,
            started: false,
            epoch: Epoch::default(),
            pending_advance: None,
            results_recorded: false,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::NotStarted
        } else if self.session.game_over {
            GamePhase::GameOver
        } else if self.session.content_exhausted {
            GamePhase::Completed
        } else if self.session.in_bonus_round() {
            GamePhase::InBonusRound
        } else {
            GamePhase::InProgress
        }
    }

    /// Ticket of the open correct-answer window, if any.
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.pending_advance
    }

    /// Whether the correct-answer window is open, during which tile input is ignored.
    pub fn is_answer_window_open(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Throws away any current session and starts a fresh one at level 1.
    pub fn start(&mut self) -> Transition {
        self.reset_to(GameSession::new(&self.rules));
        log::info!(
            target: "otiyot::session",
            "New game with {} lives and {} hints",
            self.session.lives(),
            self.session.hints_remaining()
        );
        self.load_next_word()
    }

    /// Continues a saved game. Stale or invalid snapshots start a fresh game instead.
    pub fn restore(&mut self, snapshot: &SessionSnapshot, now: u64) -> Transition {
        if let Err(err) = snapshot.validate(now, &self.rules) {
            log::warn!(target: "otiyot::session", "Discarding saved game: {}", err);
            return self.start();
        }

        self.reset_to(GameSession::from_snapshot(snapshot, &self.rules));
        self.session.level_progress_percent =
            level_progress_percent(&self.bank, self.session.level, &self.session.progress);
        log::info!(
            target: "otiyot::session",
            "Restored game at level {} with score {}",
            self.session.level,
            self.session.score()
        );
        self.load_next_word()
    }

    /// Restores the store's saved game if there is a usable one, otherwise starts fresh.
    pub fn resume<S: SessionStore + ?Sized>(&mut self, store: &mut S, now: u64) -> Transition {
        match store.load_snapshot() {
            Some(snapshot) => {
                if snapshot.validate(now, &self.rules).is_err() {
                    store.clear_snapshot();
                }
                self.restore(&snapshot, now)
            }
            None => self.start(),
        }
    }

    pub fn select_letter(&mut self, index: usize) -> SelectOutcome {
        if !self.accepts_word_input() || index >= self.session.tiles.len() {
            return SelectOutcome::NoChange;
        }

        let selection = &mut self.session.selection;
        if selection.last() == Some(&index) {
            selection.pop();
            return SelectOutcome::Deselected;
        }
        if selection.contains(&index) {
            return SelectOutcome::NoChange;
        }

        selection.push(index);
        self.feedback.on_letter_selected();

        if self.selection_is_full() {
            self.submit_answer()
                .map_or(SelectOutcome::NoChange, SelectOutcome::Answered)
        } else {
            SelectOutcome::Selected
        }
    }

    /// Clears the picked tiles. Returns `false` when input is not accepted right now.
    pub fn reset_selection(&mut self) -> bool {
        if !self.accepts_word_input() {
            return false;
        }
        self.feedback.on_button_tap();
        self.session.selection.clear();
        true
    }

    /// Picks the next correct tile for the player, at the cost of a hint and a few points.
    pub fn request_hint(&mut self) -> HintOutcome {
        if !self.accepts_word_input() || self.session.hints_remaining() == 0 {
            return HintOutcome::NoChange;
        }

        let session = &mut self.session;
        let Some(word) = session.current_word.as_ref() else {
            return HintOutcome::NoChange;
        };

        if !puzzle::is_correct_prefix(&session.selection, &session.tiles, word) {
            log::debug!(target: "otiyot::hint", "Discarding wrong partial selection");
            session.selection.clear();
        }

        let position = session.selection.len();
        let Some(letter) = word.letters().nth(position) else {
            return HintOutcome::NoChange;
        };
        let free_tile = (0..session.tiles.len())
            .find(|&index| session.tiles[index] == letter && !session.selection.contains(&index));
        let Some(index) = free_tile else {
            log::error!(
                target: "otiyot::hint",
                "No free tile for letter {:?} of {:?}",
                letter,
                word.script
            );
            return HintOutcome::NoChange;
        };

        session.scorecard.on_hint_used(&self.rules);
        session.hints_used = session.hints_used.saturating_add(1);
        session.selection.push(index);
        log::info!(
            target: "otiyot::hint",
            "Hint revealed letter {} of {}, {} hints left",
            position + 1,
            word.len(),
            session.hints_remaining()
        );
        self.feedback.on_hint_used();

        // validation only runs once the hinted tile is part of the selection
        if self.selection_is_full() {
            self.submit_answer()
                .map_or(HintOutcome::NoChange, HintOutcome::Answered)
        } else {
            HintOutcome::Applied
        }
    }

    /// Closes the correct-answer window and moves on. Stale tickets are ignored.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Option<Transition> {
        if self.pending_advance != Some(ticket) {
            log::debug!(
                target: "otiyot::session",
                "Ignoring stale advance from epoch {}",
                ticket.epoch().get()
            );
            return None;
        }
        self.pending_advance = None;
        Some(self.load_next_word())
    }

    pub fn select_bonus_option(&mut self, option: &str) -> BonusOutcome {
        let Some(round) = self.session.bonus.as_ref() else {
            return BonusOutcome::NoChange;
        };
        self.feedback.on_button_tap();

        let resolution = round.answer(option);
        let transition = self.resolve_bonus_round(resolution);
        BonusOutcome::Resolved {
            resolution,
            transition,
        }
    }

    /// One second of bonus-round countdown.
    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        let Some(round) = self.session.bonus.as_mut() else {
            return TickOutcome::Stale;
        };

        match round.tick(token) {
            BonusTick::Stale => TickOutcome::Stale,
            BonusTick::Counting(remaining) => TickOutcome::Counting(remaining),
            BonusTick::Expired => TickOutcome::TimedOut(self.resolve_bonus_round(BonusResolution::Timeout)),
        }
    }

    /// Stops the bonus countdown; later ticks with its token are ignored.
    pub fn cancel_bonus_timer(&mut self) -> bool {
        let cancelled = self
            .session
            .bonus
            .as_mut()
            .is_some_and(BonusRound::cancel_timer);
        if cancelled {
            log::debug!(target: "otiyot::bonus", "Bonus countdown cancelled");
        }
        cancelled
    }

    /// Restarts a cancelled bonus countdown from where it stopped, under a new token.
    pub fn resume_bonus_timer(&mut self) -> Option<TimerToken> {
        let round = self.session.bonus.as_mut()?;
        if round.is_counting() {
            return round.timer();
        }
        self.epoch = self.epoch.next();
        round.resume_timer(self.epoch)
    }

    /// Invalidates every outstanding host callback before the host goes away.
    ///
    /// An open correct-answer window is closed by moving on right away, and the resulting
    /// transition is returned. When that was the last word the game is now completed and the host
    /// still has to [`record_results`]. A bonus round keeps its remaining time for
    /// [`resume_bonus_timer`].
    ///
    /// [`record_results`]: GameController::record_results
    /// [`resume_bonus_timer`]: GameController::resume_bonus_timer
    pub fn teardown(&mut self) -> Option<Transition> {
        let transition = self.pending_advance.and_then(|ticket| self.advance(ticket));
        self.cancel_bonus_timer();
        self.epoch = self.epoch.next();
        log::debug!(target: "otiyot::session", "Session torn down");
        transition
    }

    /// Continuable state, `None` before the first start or once the game has ended.
    pub fn snapshot(&self, now: u64) -> Option<SessionSnapshot> {
        if !self.started || self.session.is_completed() {
            return None;
        }
        Some(SessionSnapshot::from_session(&self.session, now))
    }

    /// Saves the continuable state, or drops the saved game once this one has ended.
    pub fn save<S: SessionStore + ?Sized>(&self, store: &mut S, now: u64) {
        match self.snapshot(now) {
            Some(snapshot) => store.save_snapshot(&snapshot),
            None if self.session.is_completed() => store.clear_snapshot(),
            None => {}
        }
    }

    /// Writes the high score, learned words and statistics of a finished game, once.
    pub fn record_results<S: SessionStore + ?Sized>(
        &mut self,
        store: &mut S,
        now: u64,
        play_secs: u64,
    ) -> Option<EntryId> {
        if !self.started || !self.session.is_completed() || self.results_recorded {
            return None;
        }
        self.results_recorded = true;

        let session = &self.session;
        let entry = store.record_high_score(session.score(), session.level, session.words_completed, now);
        store.record_learned_words(&session.learned);
        store.record_statistics(&session.summary(play_secs));
        store.clear_snapshot();

        log::info!(
            target: "otiyot::store",
            "Recorded game with score {} (leaderboard entry: {:?})",
            session.score(),
            entry
        );
        entry
    }

    fn reset_to(&mut self, session: GameSession) {
        // any tick or advance issued for the old session is stale from here on
        self.epoch = self.epoch.next();
        self.pending_advance = None;
        self.session = session;
        self.started = true;
        self.results_recorded = false;
    }

    fn accepts_word_input(&self) -> bool {
        self.started
            && !self.session.is_completed()
            && !self.session.in_bonus_round()
            && self.pending_advance.is_none()
            && self.session.current_word.is_some()
    }

    fn selection_is_full(&self) -> bool {
        self.session
            .current_word
            .as_ref()
            .is_some_and(|word| self.session.selection.len() >= word.len())
    }

    fn check_answer(&self) -> Result<bool> {
        let word = self.session.current_word.as_ref().ok_or(GameError::NoCurrentWord)?;
        let selection = &self.session.selection;
        if selection.len() != word.len() {
            return Err(GameError::SelectionLengthMismatch {
                expected: word.len(),
                actual: selection.len(),
            });
        }
        Ok(puzzle::validate(selection, &self.session.tiles, word))
    }

    fn submit_answer(&mut self) -> Option<AnswerOutcome> {
        match self.check_answer() {
            Ok(true) => Some(self.on_correct()),
            Ok(false) => Some(self.on_incorrect()),
            Err(err) => {
                debug_assert!(false, "answer submitted in an invalid state: {err}");
                log::error!(target: "otiyot::session", "Answer check failed: {}", err);
                self.session.selection.clear();
                None
            }
        }
    }

    fn on_correct(&mut self) -> AnswerOutcome {
        let session = &mut self.session;
        let Some(word) = session.current_word.as_ref() else {
            return AnswerOutcome::Incorrect {
                lives_left: session.lives(),
            };
        };

        let points = session.scorecard.on_correct(word.len(), &self.rules);
        session.progress.mark_completed(word);
        session.learned.insert(word);
        session.words_completed = session.words_completed.saturating_add(1);
        session.level_progress_percent = level_progress_percent(&self.bank, session.level, &session.progress);
        log::debug!(
            target: "otiyot::level",
            "Solved {:?} for {} points, level {} at {:.0}%",
            word.script,
            points,
            session.level,
            session.level_progress_percent
        );

        self.epoch = self.epoch.next();
        let advance = AdvanceTicket::new(self.epoch);
        self.pending_advance = Some(advance);
        self.feedback.on_correct_answer();

        AnswerOutcome::Correct { points, advance }
    }

    fn on_incorrect(&mut self) -> AnswerOutcome {
        self.feedback.on_wrong_answer();

        match self.session.scorecard.on_incorrect() {
            LivesOutcome::Remaining(lives_left) => {
                self.session.selection.clear();
                AnswerOutcome::Incorrect { lives_left }
            }
            LivesOutcome::Exhausted => {
                self.end_game_over();
                AnswerOutcome::GameOver
            }
        }
    }

    fn end_game_over(&mut self) {
        self.epoch = self.epoch.next();
        self.pending_advance = None;
        self.session.bonus = None;
        self.session.selection.clear();
        self.session.game_over = true;
        log::info!(
            target: "otiyot::session",
            "Game over at level {} with score {}",
            self.session.level,
            self.session.score()
        );
        self.feedback.on_game_over();
    }

    fn end_completed(&mut self) {
        self.epoch = self.epoch.next();
        self.pending_advance = None;
        self.session.bonus = None;
        self.session.clear_word();
        self.session.content_exhausted = true;
        log::info!(
            target: "otiyot::session",
            "Every level solved with score {}",
            self.session.score()
        );
        self.feedback.on_game_complete();
    }

    /// Presents the next unsolved word, walking through bonus rounds and level-ups as levels run
    /// out of words.
    fn load_next_word(&mut self) -> Transition {
        let mut leveled_up = false;
        loop {
            let level = self.session.level;
            match level::next_word(&self.bank, level, &self.session.progress, &mut self.rng) {
                NextWord::Word(word) => {
                    let word = word.clone();
                    self.present(word);
                    return if leveled_up {
                        Transition::LevelUp(level)
                    } else {
                        Transition::NextWord
                    };
                }
                NextWord::LevelExhausted if level < FINAL_LEVEL => {
                    self.session.clear_word();
                    if let Some(token) = self.begin_bonus_round() {
                        return Transition::BonusRound(token);
                    }
                    self.finish_bonus_round(BonusResolution::NoChallenge);
                    leveled_up = true;
                }
                NextWord::LevelExhausted => {
                    self.end_completed();
                    return Transition::Completed;
                }
            }
        }
    }

    fn present(&mut self, word: Word) {
        self.session.tiles = puzzle::shuffle(&word, &mut self.rng);
        self.session.selection.clear();
        log::debug!(
            target: "otiyot::level",
            "Presenting word {} at level {}",
            word.id.0,
            self.session.level
        );
        self.session.current_word = Some(word);
    }

    fn begin_bonus_round(&mut self) -> Option<TimerToken> {
        let level = self.session.level;
        self.epoch = self.epoch.next();

        let Some(round) = BonusRound::begin(&self.bank, level, &self.rules, &mut self.rng, self.epoch) else {
            log::warn!(
                target: "otiyot::bonus",
                "No bonus challenges for level {}, skipping the bonus round",
                level
            );
            return None;
        };

        let token = round.timer();
        self.session.bonus = Some(round);
        self.session.bonus_rounds_played = self.session.bonus_rounds_played.saturating_add(1);
        log::info!(
            target: "otiyot::bonus",
            "Level {} finished, bonus round for {}s",
            level,
            self.rules.bonus_round_secs
        );
        self.feedback.on_bonus_round_start();
        token
    }

    fn resolve_bonus_round(&mut self, resolution: BonusResolution) -> Transition {
        self.finish_bonus_round(resolution);
        match self.load_next_word() {
            Transition::NextWord => Transition::LevelUp(self.session.level),
            transition => transition,
        }
    }

    fn finish_bonus_round(&mut self, resolution: BonusResolution) {
        // dropping the round cancels its countdown
        self.session.bonus = None;
        self.epoch = self.epoch.next();

        if resolution.is_success() {
            let (score, hints) = resolution.reward(&self.rules);
            self.session.scorecard.add_reward(score, hints);
            self.session.bonus_rounds_completed = self.session.bonus_rounds_completed.saturating_add(1);
        }
        log::info!(target: "otiyot::bonus", "Bonus round resolved: {:?}", resolution);

        debug_assert!(self.session.level < FINAL_LEVEL);
        self.session.level = self.session.level.saturating_add(1).min(FINAL_LEVEL);
        self.session.level_progress_percent = 0.0;
        log::info!(target: "otiyot::level", "Advanced to level {}", self.session.level);
        self.feedback.on_level_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn challenge(id: u32) -> BonusChallenge {
        BonusChallenge {
            id,
            decorated_letter: "בָּ".into(),
            options: vec!["ba".into(), "bi".into()],
            correct: "ba".into(),
            sound_label: "kamatz".into(),
            hint: "".into(),
        }
    }

    /// One two-letter word and one three-letter word, challenges on the first two levels.
    fn small_bank() -> WordBank {
        WordBank::from_parts(
            [Word::new(1, "אב", "av", "father"), Word::new(2, "ספר", "sefer", "book")],
            [(1, challenge(1)), (2, challenge(2))],
        )
    }

    fn controller() -> GameController {
        GameController::new(small_bank(), GameRules::default(), 42)
    }

    /// Tile indices that spell the current word.
    fn solution(game: &GameController) -> Vec<usize> {
        let session = game.session();
        let word = session.current_word().unwrap();
        let mut used = Vec::new();
        for letter in word.letters() {
            let index = (0..session.tiles().len())
                .find(|&i| session.tiles()[i] == letter && !used.contains(&i))
                .unwrap();
            used.push(index);
        }
        used
    }

    fn wrong_order(game: &GameController) -> Vec<usize> {
        let mut indices = solution(game);
        indices.reverse();
        indices
    }

    fn play(game: &mut GameController, indices: &[usize]) -> SelectOutcome {
        let mut outcome = SelectOutcome::NoChange;
        for &index in indices {
            outcome = game.select_letter(index);
        }
        outcome
    }

    #[test]
    fn start_presents_a_level_one_word() {
        let mut game = controller();
        assert_eq!(game.phase(), GamePhase::NotStarted);

        assert_eq!(game.start(), Transition::NextWord);

        let session = game.session();
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(session.level(), 1);
        assert_eq!(session.lives(), 10);
        assert_eq!(session.hints_remaining(), 15);
        assert_eq!(session.current_word().unwrap().script, "אב");
        assert_eq!(session.tiles(), &['ב', 'א']);
    }

    #[test]
    fn selecting_the_last_tile_again_deselects_it() {
        let mut game = controller();
        game.start();

        assert_eq!(game.select_letter(0), SelectOutcome::Selected);
        assert_eq!(game.select_letter(0), SelectOutcome::Deselected);
        assert!(game.session().selection().is_empty());
    }

    #[test]
    fn out_of_range_tile_is_ignored() {
        let mut game = controller();
        game.start();

        assert_eq!(game.select_letter(9), SelectOutcome::NoChange);
    }

    #[test]
    fn correct_word_scores_and_opens_the_answer_window() {
        let mut game = controller();
        game.start();

        let indices = solution(&game);
        let SelectOutcome::Answered(AnswerOutcome::Correct { points, advance }) = play(&mut game, &indices) else {
            panic!("expected a correct answer");
        };

        assert_eq!(points, 20);
        assert_eq!(game.session().score(), 20);
        assert_eq!(game.session().streak(), 1);
        assert_eq!(game.session().level_progress_percent(), 100.0);
        assert_eq!(game.pending_advance(), Some(advance));
        assert_eq!(game.select_letter(0), SelectOutcome::NoChange);
        assert!(!game.reset_selection());
    }

    #[test]
    fn wrong_word_costs_a_life_and_clears_the_selection() {
        let mut game = controller();
        game.start();

        let indices = wrong_order(&game);
        let outcome = play(&mut game, &indices);

        assert_eq!(outcome, SelectOutcome::Answered(AnswerOutcome::Incorrect { lives_left: 9 }));
        assert!(game.session().selection().is_empty());
        assert_eq!(game.session().streak(), 0);
    }

    #[test]
    fn exhausting_a_level_starts_the_bonus_round() {
        let mut game = controller();
        game.start();
        let indices = solution(&game);
        let SelectOutcome::Answered(AnswerOutcome::Correct { advance, .. }) = play(&mut game, &indices) else {
            panic!("expected a correct answer");
        };

        let Some(Transition::BonusRound(token)) = game.advance(advance) else {
            panic!("expected a bonus round");
        };

        assert_eq!(game.phase(), GamePhase::InBonusRound);
        assert_eq!(game.session().bonus_time_remaining_secs(), 10);
        assert_eq!(game.tick(token), TickOutcome::Counting(9));
        assert_eq!(game.advance(advance), None);
    }

    #[test]
    fn winning_the_bonus_round_rewards_and_levels_up() {
        let mut game = controller();
        game.start();
        let indices = solution(&game);
        let SelectOutcome::Answered(AnswerOutcome::Correct { advance, .. }) = play(&mut game, &indices) else {
            panic!("expected a correct answer");
        };
        game.advance(advance);

        let outcome = game.select_bonus_option("ba");

        assert_eq!(
            outcome,
            BonusOutcome::Resolved {
                resolution: BonusResolution::Success,
                transition: Transition::LevelUp(2),
            }
        );
        assert_eq!(game.session().score(), 50);
        assert_eq!(game.session().hints_remaining(), 18);
        assert_eq!(game.session().current_word().unwrap().script, "ספר");
        assert_eq!(game.session().level_progress_percent(), 0.0);
    }

    #[test]
    fn stale_tick_after_resolution_is_ignored() {
        let mut game = controller();
        game.start();
        let indices = solution(&game);
        let SelectOutcome::Answered(AnswerOutcome::Correct { advance, .. }) = play(&mut game, &indices) else {
            panic!("expected a correct answer");
        };
        let Some(Transition::BonusRound(token)) = game.advance(advance) else {
            panic!("expected a bonus round");
        };

        game.select_bonus_option("bi");

        assert_eq!(game.tick(token), TickOutcome::Stale);
        assert_eq!(game.session().level(), 2);
    }

    #[test]
    fn missing_challenges_skip_straight_to_the_next_level() {
        let bank = WordBank::from_parts(
            [Word::new(1, "אב", "av", "father"), Word::new(2, "ספר", "sefer", "book")],
            [],
        );
        let mut game = GameController::new(bank, GameRules::default(), 1);
        game.start();
        let indices = solution(&game);
        let SelectOutcome::Answered(AnswerOutcome::Correct { advance, .. }) = play(&mut game, &indices) else {
            panic!("expected a correct answer");
        };

        assert_eq!(game.advance(advance), Some(Transition::LevelUp(2)));
        assert_eq!(game.session().bonus_rounds_played(), 0);
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn earlier_tile_cannot_be_picked_twice() {
        let bank = WordBank::from_parts([Word::new(2, "ספר", "sefer", "book")], []);
        let mut game = GameController::new(bank, GameRules::default(), 5);
        game.start();

        assert_eq!(game.select_letter(0), SelectOutcome::Selected);
        assert_eq!(game.select_letter(1), SelectOutcome::Selected);
        assert_eq!(game.select_letter(0), SelectOutcome::NoChange);
        assert_eq!(game.session().selection(), &[0, 1]);
    }

    #[test]
    fn hint_fixes_a_wrong_prefix() {
        let bank = WordBank::from_parts([Word::new(2, "ספר", "sefer", "book")], []);
        let rules = GameRules::default();
        let mut game = GameController::new(bank, rules, 5);
        // level 1 has no words and no challenges, so the game moves on to level 2
        assert_eq!(game.start(), Transition::LevelUp(2));

        let wrong_first = wrong_order(&game)[0];
        game.select_letter(wrong_first);

        assert_eq!(game.request_hint(), HintOutcome::Applied);
        assert_eq!(game.session().spelled(), "ס");
        assert_eq!(game.session().hints_remaining(), 14);
        assert_eq!(game.session().hints_used(), 1);
    }

    #[test]
    fn teardown_applies_the_pending_advance() {
        let mut game = controller();
        game.start();
        let indices = solution(&game);
        let SelectOutcome::Answered(AnswerOutcome::Correct { advance, .. }) = play(&mut game, &indices) else {
            panic!("expected a correct answer");
        };

        assert!(matches!(game.teardown(), Some(Transition::BonusRound(_))));

        assert_eq!(game.pending_advance(), None);
        assert_eq!(game.advance(advance), None);
        let round = game.session().bonus_round().unwrap();
        assert!(!round.is_counting());
        assert!(game.resume_bonus_timer().is_some());
    }
}
