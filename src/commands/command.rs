//! Command selection.
//!
//! Maps the keyword of a tokenized line to a [`Command`] variant and extracts
//! the arguments that variant needs. Argument validation happens in the
//! action handlers, where the task list is available.

use log::debug;

use crate::{commands::arguments::CommandArguments, error::TaskError};

/// Flag that filters `list` by date.
pub const ON_FLAG: &str = "on";
pub const BY_FLAG: &str = "by";
pub const AT_FLAG: &str = "at";

/// Represents a selected command with its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Say hello
    Greet,
    /// Display help information
    Help,
    /// Add a to-do
    Todo { description: String },
    /// Add a deadline
    ///
    /// `by` is `None` when the `/by` marker is absent or has no value.
    Deadline {
        description: String,
        by: Option<String>,
    },
    /// Add an event
    Event {
        description: String,
        at: Option<String>,
    },
    /// List tasks, optionally only those on one date
    List { on: Option<String> },
    /// Mark a task as done
    ///
    /// `index` is the first payload token, unparsed.
    Done { index: Option<String> },
    /// Delete a task
    Delete { index: Option<String> },
    /// End the session
    Bye,
}

fn index_token(arguments: &CommandArguments) -> Option<String> {
    arguments.payload().split_whitespace().next().map(str::to_string)
}

impl Command {
    /// Selects the command named by the first token of the line.
    ///
    /// # Errors
    ///
    /// [`TaskError::UnknownCommand`] if the keyword is not recognized.
    pub fn parse(arguments: &CommandArguments) -> Result<Self, TaskError> {
        let description = arguments.payload().to_string();
        let flag = |key| arguments.non_empty(key).map(str::to_string);

        let command = match arguments.name() {
            "hello" | "hi" | "greet" => Command::Greet,
            "help" => Command::Help,
            "todo" => Command::Todo { description },
            "deadline" => Command::Deadline {
                description,
                by: flag(BY_FLAG),
            },
            "event" => Command::Event {
                description,
                at: flag(AT_FLAG),
            },
            "list" => Command::List { on: flag(ON_FLAG) },
            "done" => Command::Done {
                index: index_token(arguments),
            },
            "delete" => Command::Delete {
                index: index_token(arguments),
            },
            "bye" | "exit" => Command::Bye,
            unknown => return Err(TaskError::UnknownCommand(unknown.to_string())),
        };

        debug!("selected command {:?}", command);

        Ok(command)
    }

    /// Keyword shown to the user in usage hints.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Greet => "hello",
            Command::Help => "help",
            Command::Todo { .. } => "todo",
            Command::Deadline { .. } => "deadline",
            Command::Event { .. } => "event",
            Command::List { .. } => "list",
            Command::Done { .. } => "done",
            Command::Delete { .. } => "delete",
            Command::Bye => "bye",
        }
    }
}
