//! Line-oriented terminal front-end.
//!
//! Each input line is parsed into a [`Command`], translated into the UI
//! events a user would produce, and answered with the re-rendered view.

use crate::app::App;
use crate::view::{render_text, RenderOptions, UiEvent};
use crate::visibility::{FilterError, VisibilityFilter};
use std::str::FromStr;
use thiserror::Error;
use todolist_runtime::StoreError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Command list printed by `help`
pub const HELP: &str = "\
Commands:
  add <text>      (a)  add a todo
  toggle <n>      (t)  toggle row n of the current view
  filter <which>  (f)  show all, active or completed todos
  show                 redraw the list (also: empty line)
  state                print the full state as JSON
  help                 this text
  quit            (exit, Ctrl-D)";

/// Errors reported to the shell user
#[derive(Error, Debug)]
pub enum ShellError {
    /// The store rejected an action
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Filter name not recognized
    #[error(transparent)]
    InvalidFilter(#[from] FilterError),

    /// First word is not a command
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    /// Command needs an argument
    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    /// Row argument is not a number
    #[error("Not a row number: {0:?}")]
    InvalidRow(String),

    /// Row number outside the current view
    #[error("No row {0} in the current view")]
    NoSuchRow(usize),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a todo with this text
    Add(String),
    /// Toggle the n-th visible row, counting from 1
    Toggle(usize),
    /// Change the filter
    Filter(VisibilityFilter),
    /// Redraw
    Show,
    /// Dump state as JSON
    State,
    /// Print the command list
    Help,
    /// Leave the shell
    Quit,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim_end_matches(['\r', '\n']);

        match word.to_ascii_lowercase().as_str() {
            "" | "show" => Ok(Self::Show),
            "add" | "a" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("add"));
                }
                Ok(Self::Add(rest.to_string()))
            },
            "toggle" | "t" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    return Err(ShellError::MissingArgument("toggle"));
                }
                arg.parse()
                    .map(Self::Toggle)
                    .map_err(|_| ShellError::InvalidRow(arg.to_string()))
            },
            "filter" | "f" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    return Err(ShellError::MissingArgument("filter"));
                }
                Ok(Self::Filter(arg.parse()?))
            },
            "state" => Ok(Self::State),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

/// Result of one command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Print(String),
    /// The user asked to leave
    Quit,
}

/// Interactive shell over an [`App`]
pub struct Shell {
    app: App,
    options: RenderOptions,
}

impl Shell {
    /// Creates a shell drawing with `options`
    #[must_use]
    pub const fn new(app: App, options: RenderOptions) -> Self {
        Self { app, options }
    }

    /// The application behind the shell
    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// Current view as text
    pub fn render(&mut self) -> String {
        render_text(&self.app.render(), &self.options)
    }

    /// Parses and executes one input line
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the line does not parse or the command fails.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let command = line.parse::<Command>()?;
        self.execute(command)
    }

    /// Executes one command
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the command refers to a row that is not
    /// shown, or the store rejects the resulting action.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, ShellError> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Add(text) => {
                self.app.handle(UiEvent::InputChanged(text))?;
                let submitted = self.app.handle(UiEvent::Submit);
                // The shell has no persistent input field.
                if !self.app.input().text().is_empty() {
                    self.app.handle(UiEvent::InputChanged(String::new()))?;
                }
                submitted?;
            },
            Command::Toggle(row) => {
                let ids = self.app.render().row_ids();
                let id = row
                    .checked_sub(1)
                    .and_then(|index| ids.get(index))
                    .copied()
                    .ok_or(ShellError::NoSuchRow(row))?;
                self.app.handle(UiEvent::RowClicked(id))?;
            },
            Command::Filter(filter) => {
                self.app.handle(UiEvent::FilterClicked(filter))?;
            },
            Command::Show => {},
            Command::State => {
                let json = serde_json::to_string_pretty(&*self.app.state())?;
                return Ok(Outcome::Print(json));
            },
            Command::Help => return Ok(Outcome::Print(HELP.to_string())),
            Command::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Print(self.render()))
    }

    /// Reads commands from `input` until `quit` or end of input
    ///
    /// Command errors are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if reading or writing fails.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), ShellError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        let greeting = format!("{}\nType `help` for commands.\n", self.render());
        output.write_all(greeting.as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let reply = match self.execute_line(&line) {
                Ok(Outcome::Print(text)) => text,
                Ok(Outcome::Quit) => break,
                Err(ShellError::Io(err)) => return Err(ShellError::Io(err)),
                Err(err) => {
                    tracing::debug!(%err, "Command failed");
                    format!("error: {err}")
                },
            };

            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        tracing::info!("Shell finished");
        Ok(())
    }
}
