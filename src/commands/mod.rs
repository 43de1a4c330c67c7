//! Command parsing, validation and execution.
//!
//! # Overview
//!
//! 1. **Tokenizing** - [`arguments::CommandArguments`] splits a line into a
//!    keyword, a payload and `/flag` values
//! 2. **Selection** - [`command::Command`] maps the keyword to a variant
//! 3. **Execution** - [`Commander`] routes the variant to its action handler,
//!    which validates the arguments against the task list and applies the change
//! 4. **Response** - [`response`] renders confirmations and errors through the
//!    message catalog
//!
//! # Architecture
//!
//! ```text
//! input line
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ CommandArguments │  name + {payload, by, at, on, ...}
//! └──────────────────┘
//!      │
//!      ▼
//! ┌──────────────────┐
//! │  Command::parse  │  UnknownCommand if the keyword is not known
//! └──────────────────┘
//!      │
//!      ▼
//! ┌─────────────────────┐
//! │ Action Handlers     │
//! │  - handle_greet     │
//! │  - handle_help      │
//! │  - handle_todo      │
//! │  - handle_deadline  │
//! │  - handle_event     │
//! │  - handle_list      │
//! │  - handle_done      │
//! │  - handle_delete    │
//! │  - handle_bye       │
//! └─────────────────────┘
//!      │
//!      ▼
//! ┌────────────────────┐
//! │  CommandResult     │  response text, persistence warning, exit flag
//! └────────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Handlers return a [`TaskError`] for invalid input before touching the list.
//! [`Commander::handle_line`] turns every error into a catalog message, so no
//! input ever ends the session except `bye`.
//!
//! # Examples
//!
//! ```no_run
//! # use duke::commands::Commander;
//! # use duke::locale::Catalog;
//! # use duke::tasks::{TaskList, TaskLoader};
//! # async fn example() {
//! let commander = Commander::new(Catalog::for_locale("english"), true);
//! let mut tasks = TaskList::new(TaskLoader::new("tasks.json"));
//!
//! let reply = commander.handle_line("todo buy milk", &mut tasks).await;
//! println!("{}", reply.text);
//! # }
//! ```

mod actions;
pub mod arguments;
pub mod command;
mod commander;
pub mod response;

pub use crate::commands::commander::Commander;
use crate::{
    error::TaskError,
    locale::Catalog,
    tasks::{Storage, TaskList},
};

/// Runtime context for command execution.
pub struct CommandContext<'a, S: Storage> {
    /// The session's task list
    pub tasks: &'a mut TaskList<S>,
    /// Catalog used to render responses
    pub catalog: &'a Catalog,
    /// Whether `/by` and `/at` values must be valid dates
    pub parse_dates: bool,
}

/// Result of a successful command.
///
/// # Fields
///
/// * `response` - confirmation text
/// * `warning` - a [`TaskError::Persist`] raised after the change was applied
/// * `exit` - whether the session must end
#[derive(Debug)]
pub struct CommandResult {
    pub response: String,
    pub warning: Option<TaskError>,
    pub exit: bool,
}

impl CommandResult {
    /// A read-only result.
    pub fn message(response: String) -> Self {
        CommandResult {
            response,
            warning: None,
            exit: false,
        }
    }

    /// A result for a change that was applied, with the outcome of saving it.
    pub fn applied(response: String, saved: Result<(), TaskError>) -> Self {
        CommandResult {
            response,
            warning: saved.err(),
            exit: false,
        }
    }
}
