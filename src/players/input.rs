//! Move input collaborators and index parsing.

use crate::games::tictactoe::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors produced while reading a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The line did not contain an integer.
    #[display("Expected a number from 0 to 8, got {:?}", _0)]
    NotANumber(String),

    /// The integer is not a cell index.
    #[display("Position {} is not between 0 and 8", _0)]
    OutOfRange(i64),

    /// The input stream ended.
    #[display("Input closed")]
    Closed,

    /// Reading or writing the console failed.
    #[display("Input error: {}", _0)]
    Io(String),
}

impl InputError {
    /// Returns true for bad lines the player can simply retype.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::NotANumber(_) | InputError::OutOfRange(_))
    }
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err.to_string())
    }
}

/// How integers outside 0-8 are treated.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IndexPolicy {
    /// Reject the value and prompt again.
    #[default]
    Reject,
    /// Treat any value other than 0-7 as cell 8.
    LastCell,
}

impl IndexPolicy {
    /// Maps a typed integer to a board position.
    pub fn resolve(self, value: i64) -> Result<Position, InputError> {
        let index = match (self, usize::try_from(value)) {
            (_, Ok(index)) if index < 9 => index,
            (IndexPolicy::LastCell, _) => 8,
            (IndexPolicy::Reject, _) => return Err(InputError::OutOfRange(value)),
        };
        Position::from_index(index).ok_or(InputError::OutOfRange(value))
    }

    /// Parses one line of input into a board position.
    ///
    /// Integers too large for `i64` saturate, so they are still out of range
    /// rather than not a number.
    #[instrument]
    pub fn parse(self, line: &str) -> Result<Position, InputError> {
        let trimmed = line.trim();
        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(_) if is_integer(trimmed) => {
                if trimmed.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                }
            }
            Err(_) => return Err(InputError::NotANumber(trimmed.to_string())),
        };
        self.resolve(value)
    }
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Source of raw move lines, typically a terminal.
pub trait MoveInput {
    /// Shows `prompt` and reads one line.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Shows a message, such as why the last line was rejected.
    fn notify(&mut self, message: &str) -> Result<(), InputError>;
}
