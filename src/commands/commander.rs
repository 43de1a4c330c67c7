//! Command orchestration and execution.
//!
//! The [`Commander`] follows a two-phase processing model:
//!
//! 1. **Parsing Phase** - tokenizes the line and selects a [`Command`]
//! 2. **Execution Phase** - routes the command to its handler against the task list
//!
//! # Flow
//!
//! ```text
//! line → parse() → Command → execute() → CommandResult → Reply
//! ```

use log::{debug, warn};

use crate::{
    commands::{
        CommandContext, CommandResult,
        actions::{
            handle_bye, handle_deadline, handle_delete, handle_done, handle_event, handle_greet,
            handle_help, handle_list, handle_todo,
        },
        arguments::CommandArguments,
        command::Command,
        response::{format_error, format_greeting},
    },
    error::TaskError,
    locale::Catalog,
    tasks::{Storage, TaskList},
};

/// Rendered outcome of one input line.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    /// Text to show, possibly several lines
    pub text: String,
    /// Whether the session must end after showing `text`
    pub exit: bool,
}

/// Command orchestrator for parsing and executing task commands.
///
/// The Commander is responsible for:
/// - Parsing raw input lines into commands
/// - Routing commands to their handlers
/// - Converting errors into catalog messages
///
/// It holds no task state; the task list is passed in on every call.
pub struct Commander {
    /// Message catalog for every response
    catalog: Catalog,
    /// Whether `/by` and `/at` values must be dates
    parse_dates: bool,
}

impl Commander {
    pub fn new(catalog: Catalog, parse_dates: bool) -> Self {
        Commander {
            catalog,
            parse_dates,
        }
    }

    /// Parses a raw input line into a command.
    ///
    /// # Errors
    ///
    /// [`TaskError::UnknownCommand`] if the first word is not a command keyword.
    pub fn parse(&self, line: &str) -> Result<Command, TaskError> {
        Command::parse(&CommandArguments::parse(line))
    }

    /// Executes a parsed command against `tasks`.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Greet`] → [`handle_greet`]
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Todo`] → [`handle_todo`]
    /// - [`Command::Deadline`] → [`handle_deadline`]
    /// - [`Command::Event`] → [`handle_event`]
    /// - [`Command::List`] → [`handle_list`]
    /// - [`Command::Done`] → [`handle_done`]
    /// - [`Command::Delete`] → [`handle_delete`]
    /// - [`Command::Bye`] → [`handle_bye`]
    pub async fn execute<S: Storage>(
        &self,
        command: &Command,
        tasks: &mut TaskList<S>,
    ) -> Result<CommandResult, TaskError> {
        debug!("executing {} command", command.keyword());

        let mut context = CommandContext {
            tasks,
            catalog: &self.catalog,
            parse_dates: self.parse_dates,
        };

        match command {
            Command::Greet => Ok(handle_greet(&self.catalog)),
            Command::Help => Ok(handle_help(&self.catalog)),
            Command::Todo { description } => handle_todo(&mut context, description).await,
            Command::Deadline { description, by } => {
                handle_deadline(&mut context, description, by.as_deref()).await
            }
            Command::Event { description, at } => {
                handle_event(&mut context, description, at.as_deref()).await
            }
            Command::List { on } => handle_list(&context, on.as_deref()),
            Command::Done { index } => handle_done(&mut context, index.as_deref()).await,
            Command::Delete { index } => handle_delete(&mut context, index.as_deref()).await,
            Command::Bye => Ok(handle_bye(&self.catalog)),
        }
    }

    /// Parses and executes one line, rendering success and failure alike.
    ///
    /// Validation errors become the catalog message for that error. A
    /// persistence failure is appended as a warning after the confirmation.
    pub async fn handle_line<S: Storage>(&self, line: &str, tasks: &mut TaskList<S>) -> Reply {
        let result = match self.parse(line) {
            Ok(command) => self.execute(&command, tasks).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(result) => {
                let mut text = result.response;
                if let Some(warning) = &result.warning {
                    warn!("change applied but not saved: {}", warning);
                    text = format!("{}\n{}", text, format_error(&self.catalog, warning));
                }
                Reply {
                    text,
                    exit: result.exit,
                }
            }
            Err(e) => {
                debug!("command rejected: {}", e);
                Reply {
                    text: format_error(&self.catalog, &e),
                    exit: false,
                }
            }
        }
    }

    /// Message shown when a session starts.
    pub fn welcome_message(&self) -> String {
        format_greeting(&self.catalog)
    }

    /// Message shown when the saved task list could not be restored.
    pub fn load_error_message(&self, error: &TaskError) -> String {
        format_error(&self.catalog, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::MockStorage;

    fn commander() -> Commander {
        Commander::new(Catalog::for_locale("english"), true)
    }

    fn saving_list() -> TaskList<MockStorage> {
        let mut storage = MockStorage::new();
        storage.expect_save_all().returning(|_| Ok(()));
        TaskList::new(storage)
    }

    #[test]
    fn test_parse_valid_todo_command() {
        let result = commander().parse("todo buy milk");
        assert!(matches!(
            result,
            Ok(Command::Todo { description }) if description == "buy milk"
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        let result = commander().parse("fly away");
        assert_eq!(result, Err(TaskError::UnknownCommand("fly".to_string())));
    }

    #[tokio::test]
    async fn test_handle_line_unknown_command() {
        let mut tasks = saving_list();

        let reply = commander().handle_line("fly away", &mut tasks).await;

        assert!(reply.text.contains("I don't know what 'fly' means"));
        assert!(!reply.exit);
    }

    #[tokio::test]
    async fn test_handle_line_empty_todo() {
        let mut tasks = saving_list();

        let reply = commander().handle_line("todo", &mut tasks).await;

        assert_eq!(
            reply.text,
            "Oops! The description of a task cannot be empty."
        );
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_handle_line_deadline_without_by() {
        let mut tasks = saving_list();

        let reply = commander()
            .handle_line("deadline Submit report", &mut tasks)
            .await;

        assert!(reply.text.contains("A deadline needs a date"));
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_handle_line_bye_exits() {
        let mut tasks = saving_list();

        let reply = commander().handle_line("BYE", &mut tasks).await;

        assert_eq!(
            reply,
            Reply {
                text: "Bye. Hope to see you again soon!".to_string(),
                exit: true,
            }
        );
    }

    #[tokio::test]
    async fn test_handle_line_persist_failure_appends_warning() {
        let mut storage = MockStorage::new();
        storage
            .expect_save_all()
            .returning(|_| Err(anyhow::anyhow!("read-only file system")));
        let mut tasks = TaskList::new(storage);

        let reply = commander().handle_line("todo buy milk", &mut tasks).await;

        let lines: Vec<&str> = reply.text.lines().collect();
        assert_eq!(lines[0], "Got it. I've added this task:");
        assert!(lines.last().unwrap().starts_with("Warning: I could not save your tasks"));
        assert!(reply.text.contains("read-only file system"));
        assert_eq!(tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_done_then_list_shows_done_marker() {
        let commander = commander();
        let mut tasks = saving_list();
        commander.handle_line("todo a", &mut tasks).await;
        commander.handle_line("todo b", &mut tasks).await;

        commander.handle_line("done 2", &mut tasks).await;
        let first = commander.handle_line("list", &mut tasks).await;
        commander.handle_line("done 2", &mut tasks).await;
        let second = commander.handle_line("list", &mut tasks).await;

        assert!(first.text.contains("1.\t[T][✘] a"));
        assert!(first.text.contains("2.\t[T][✓] b"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_out_of_bound_index_commands_leave_list_unmodified() {
        let commander = commander();
        let mut tasks = saving_list();
        commander.handle_line("todo a", &mut tasks).await;
        let before = commander.handle_line("list", &mut tasks).await;

        for line in ["done 0", "done 2", "delete 0", "delete 2", "delete -1"] {
            let reply = commander.handle_line(line, &mut tasks).await;
            assert!(reply.text.contains("There is no task"), "{}", line);
        }

        assert_eq!(commander.handle_line("list", &mut tasks).await, before);
    }

    #[tokio::test]
    async fn test_add_list_delete_scenario() {
        let commander = commander();
        let mut tasks = saving_list();

        commander.handle_line("todo buy milk", &mut tasks).await;
        commander
            .handle_line("deadline return book /by 20/12/2024", &mut tasks)
            .await;

        let listed = commander.handle_line("list", &mut tasks).await;
        assert_eq!(
            listed.text,
            "Here are the tasks in your list:\n\
             1.\t[T][✘] buy milk\n\
             2.\t[D][✘] return book (by: 20/12/2024 00:00)"
        );

        let deleted = commander.handle_line("delete 1", &mut tasks).await;
        assert!(deleted.text.contains("buy milk"));

        let listed = commander.handle_line("list", &mut tasks).await;
        assert_eq!(
            listed.text,
            "Here are the tasks in your list:\n\
             1.\t[D][✘] return book (by: 20/12/2024 00:00)"
        );
    }

    #[test]
    fn test_welcome_message() {
        assert!(commander().welcome_message().contains("What can I do for you?"));
    }
}
