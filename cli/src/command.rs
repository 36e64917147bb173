use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Type a command, or ? for help")]
    Empty,
    #[error("Unknown command {0:?}, type ? for help")]
    Unknown(String),
    #[error("Expected a number starting at 1, got {0:?}")]
    BadNumber(String),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based tile index.
    Tile(usize),
    Reset,
    Hint,
    /// Zero-based bonus option index.
    Bonus(usize),
    Save,
    Leaderboard,
    Statistics,
    Learned,
    NewGame,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
  <n>      pick tile n (pick the last one again to undo)
  r        clear the picked tiles
  h        use a hint
  b <n>    answer option n of the bonus round
  s        save the game
  top      show the leaderboard
  stats    show statistics
  words    show learned words
  new      start over
  q        save and quit";
}

fn one_based(text: &str) -> Result<usize, ParseCommandError> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ParseCommandError::BadNumber(text.to_owned())),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match head {
            "r" | "reset" => Self::Reset,
            "h" | "hint" => Self::Hint,
            "b" | "bonus" => {
                let option = words.next().ok_or_else(|| ParseCommandError::BadNumber(String::new()))?;
                Self::Bonus(one_based(option)?)
            }
            "s" | "save" => Self::Save,
            "top" => Self::Leaderboard,
            "stats" => Self::Statistics,
            "words" => Self::Learned,
            "new" => Self::NewGame,
            "?" | "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            _ if head.starts_with(|c: char| c.is_ascii_digit()) => Self::Tile(one_based(head)?),
            _ => return Err(ParseCommandError::Unknown(head.to_owned())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pick_tiles_from_one() {
        assert_eq!("1".parse::<Command>(), Ok(Command::Tile(0)));
        assert_eq!(" 4 ".parse::<Command>(), Ok(Command::Tile(3)));
        assert_eq!("0".parse::<Command>(), Err(ParseCommandError::BadNumber("0".into())));
    }

    #[test]
    fn bonus_needs_an_option() {
        assert_eq!("b 2".parse::<Command>(), Ok(Command::Bonus(1)));
        assert!("b".parse::<Command>().is_err());
        assert!("b x".parse::<Command>().is_err());
    }

    #[test]
    fn words_and_unknown_input() {
        assert_eq!("h".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("top".parse::<Command>(), Ok(Command::Leaderboard));
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!("jump".parse::<Command>(), Err(ParseCommandError::Unknown("jump".into())));
    }
}
