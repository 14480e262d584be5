//! Terminal input and output for the game loop.

use crate::games::tictactoe::{GameEvent, GameObserver, Outcome};
use crate::players::{InputError, MoveInput};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Reads move lines from any buffered reader, prompting on a writer.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates console input over a reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the input and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Input reached end of stream");
            return Err(InputError::Closed);
        }
        Ok(line)
    }

    fn notify(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

/// Where terminal prompts and rejection notices are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptStream {
    /// Prompts share stdout with the board.
    #[default]
    Stdout,
    /// Prompts go to stderr, leaving stdout to the event stream.
    Stderr,
}

/// Console input over the process's stdin, prompting on stdout or stderr.
///
/// Locks are taken per call, so several human players can share the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioInput {
    prompts: PromptStream,
}

impl StdioInput {
    /// Creates terminal input that prompts on `prompts`.
    pub fn new(prompts: PromptStream) -> Self {
        Self { prompts }
    }

    /// Returns the prompt stream.
    pub fn prompts(&self) -> PromptStream {
        self.prompts
    }
}

impl MoveInput for StdioInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        match self.prompts {
            PromptStream::Stdout => {
                ConsoleInput::new(io::stdin().lock(), io::stdout().lock()).read_line(prompt)
            }
            PromptStream::Stderr => {
                ConsoleInput::new(io::stdin().lock(), io::stderr().lock()).read_line(prompt)
            }
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), InputError> {
        match self.prompts {
            PromptStream::Stdout => {
                ConsoleInput::new(io::stdin().lock(), io::stdout().lock()).notify(message)
            }
            PromptStream::Stderr => {
                ConsoleInput::new(io::stdin().lock(), io::stderr().lock()).notify(message)
            }
        }
    }
}

/// How game events are written out.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Boards and announcements for people.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl OutputFormat {
    /// Returns where human prompts go so they never mix with this format.
    ///
    /// JSON output owns stdout; its prompts are written to stderr.
    pub fn prompt_stream(self) -> PromptStream {
        match self {
            OutputFormat::Text => PromptStream::Stdout,
            OutputFormat::Json => PromptStream::Stderr,
        }
    }

    /// Builds the matching observer over `writer`.
    pub fn observer<W: Write + 'static>(self, writer: W) -> Box<dyn GameObserver> {
        match self {
            OutputFormat::Text => Box::new(ConsoleObserver::new(writer)),
            OutputFormat::Json => Box::new(JsonObserver::new(writer)),
        }
    }
}

/// Prints boards and announcements as plain text.
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    writer: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates a text observer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::TurnStarted { .. } | GameEvent::MoveMade { .. } => {}
            GameEvent::BoardShown { board } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "{board}")?;
            }
            GameEvent::CellOccupied { .. } => {
                writeln!(self.writer, "That cell is already taken!")?;
                writeln!(self.writer)?;
            }
            GameEvent::GameOver { outcome, winner } => {
                writeln!(self.writer, "GAME OVER!")?;
                match (outcome, winner) {
                    (Outcome::Draw, _) => writeln!(self.writer, "DRAW!")?,
                    (_, Some(symbol)) => writeln!(self.writer, "{symbol} WINS!")?,
                    (_, None) => writeln!(self.writer, "{outcome}")?,
                }
            }
        }
        self.writer.flush()
    }
}

/// Writes each event as one line of JSON.
#[derive(Debug)]
pub struct JsonObserver<W> {
    writer: W,
}

impl<W: Write> JsonObserver<W> {
    /// Creates a JSON-lines observer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameObserver for JsonObserver<W> {
    fn on_event(&mut self, event: &GameEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
