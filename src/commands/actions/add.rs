//! Handlers that add a task: `todo`, `deadline` and `event`.
//!
//! # Validation
//!
//! - **Time**: deadlines need a `/by` value and events an `/at` value. When
//!   date parsing is on, the value must read as `dd/mm/yyyy [HH:MM]`
//! - **Description**: must not be empty
//!
//! The time is checked first, so `deadline /by` reports the missing date
//! rather than the missing description.

use log::debug;

use crate::{
    commands::{CommandContext, CommandResult, response::format_new_task},
    error::TaskError,
    tasks::{Storage, Task, When},
};

async fn add<S: Storage>(context: &mut CommandContext<'_, S>, task: Task) -> CommandResult {
    let added = task.clone();
    let applied = context.tasks.add_task(task).await;
    let response = format_new_task(context.catalog, &added, applied.value);

    CommandResult::applied(response, applied.saved)
}

/// Adds a to-do.
pub async fn handle_todo<S: Storage>(
    context: &mut CommandContext<'_, S>,
    description: &str,
) -> Result<CommandResult, TaskError> {
    debug!("handling todo command: {:?}", description);

    let task = Task::todo(description)?;

    Ok(add(context, task).await)
}

/// Adds a deadline due `by`.
pub async fn handle_deadline<S: Storage>(
    context: &mut CommandContext<'_, S>,
    description: &str,
    by: Option<&str>,
) -> Result<CommandResult, TaskError> {
    debug!("handling deadline command: {:?} by {:?}", description, by);

    let by = by.ok_or(TaskError::NoByDate)?;
    let by = When::from_input(by, context.parse_dates)?;
    let task = Task::deadline(description, by)?;

    Ok(add(context, task).await)
}

/// Adds an event happening `at`.
pub async fn handle_event<S: Storage>(
    context: &mut CommandContext<'_, S>,
    description: &str,
    at: Option<&str>,
) -> Result<CommandResult, TaskError> {
    debug!("handling event command: {:?} at {:?}", description, at);

    let at = at.ok_or(TaskError::NoAtDate)?;
    let at = When::from_input(at, context.parse_dates)?;
    let task = Task::event(description, at)?;

    Ok(add(context, task).await)
}
