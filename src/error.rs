//! Error taxonomy for task commands.
//!
//! Every variant is recoverable: the [`Commander`](crate::commands::Commander)
//! turns it into a catalog message and the session keeps reading input.

use thiserror::Error;

/// Errors produced while validating or applying a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The task description is empty after trimming.
    #[error("the description of a task cannot be empty")]
    EmptyDescription,

    /// A deadline was given without a `/by` value.
    #[error("a deadline needs a /by date")]
    NoByDate,

    /// An event was given without an `/at` value.
    #[error("an event needs an /at date")]
    NoAtDate,

    /// The date text matches neither `dd/mm/yyyy HH:MM` nor `dd/mm/yyyy`.
    #[error("malformed date '{0}'")]
    MalformedDate(String),

    /// An index command was given without an index. Holds the command name.
    #[error("{0} needs a task index")]
    MissingArgument(String),

    /// The index token is not an integer. Holds the offending token.
    #[error("'{0}' is not an integer")]
    NotInteger(String),

    /// The 1-based index is outside `1..=size`.
    #[error("task {index} does not exist, the list has {size} tasks")]
    IndexOutOfBound { index: i64, size: usize },

    /// The command keyword is not recognized.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// The task list could not be written to storage.
    #[error("failed to save tasks: {0}")]
    Persist(String),

    /// The task list could not be read from storage.
    #[error("failed to load tasks: {0}")]
    Load(String),
}
