/// Fire-and-forget hooks for sound, haptics and animation, called once per transition.
///
/// Every method defaults to doing nothing. Game logic never depends on what they do.
pub trait Feedback {
    fn on_letter_selected(&mut self) {}
    fn on_button_tap(&mut self) {}
    fn on_correct_answer(&mut self) {}
    fn on_wrong_answer(&mut self) {}
    fn on_hint_used(&mut self) {}
    fn on_level_up(&mut self) {}
    fn on_bonus_round_start(&mut self) {}
    fn on_game_over(&mut self) {}
    fn on_game_complete(&mut self) {}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoFeedback;

impl Feedback for NoFeedback {}

impl<F: Feedback + ?Sized> Feedback for &mut F {
    fn on_letter_selected(&mut self) {
        (**self).on_letter_selected()
    }

    fn on_button_tap(&mut self) {
        (**self).on_button_tap()
    }

    fn on_correct_answer(&mut self) {
        (**self).on_correct_answer()
    }

    fn on_wrong_answer(&mut self) {
        (**self).on_wrong_answer()
    }

    fn on_hint_used(&mut self) {
        (**self).on_hint_used()
    }

    fn on_level_up(&mut self) {
        (**self).on_level_up()
    }

    fn on_bonus_round_start(&mut self) {
        (**self).on_bonus_round_start()
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over()
    }

    fn on_game_complete(&mut self) {
        (**self).on_game_complete()
    }
}
