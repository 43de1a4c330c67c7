//! Task listing command handler.
//!
//! Renders every task numbered from 1, or with `/on <date>` only the
//! deadlines and events falling on that day. Filtered entries keep their
//! number in the full list.

use log::debug;

use crate::{
    commands::{CommandContext, CommandResult, response::format_task_list},
    error::TaskError,
    tasks::{Storage, Task, When},
};

/// Lists tasks, optionally only those on the date `on`.
///
/// # Errors
///
/// [`TaskError::MalformedDate`] if `on` is not a date.
pub fn handle_list<S: Storage>(
    context: &CommandContext<'_, S>,
    on: Option<&str>,
) -> Result<CommandResult, TaskError> {
    debug!("handling list command: {:?}", on);

    let response = match on {
        None => {
            let entries: Vec<(usize, &Task)> = context.tasks.iter().enumerate().collect();
            format_task_list(context.catalog, &entries, None)
        }
        Some(on) => {
            let date = When::parse(on)?
                .date()
                .ok_or_else(|| TaskError::MalformedDate(on.to_string()))?;
            let entries = context.tasks.tasks_on(date);
            format_task_list(context.catalog, &entries, Some(on))
        }
    };

    Ok(CommandResult::message(response))
}
