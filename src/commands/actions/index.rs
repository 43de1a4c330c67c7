//! Handlers addressing a task by its number: `done` and `delete`.
//!
//! The number is 1-based as shown by `list`. It is rejected, and the list left
//! untouched, when it is missing, not an integer, or outside `1..=size`.

use log::debug;

use crate::{
    commands::{
        CommandContext, CommandResult,
        response::{format_task_done, format_task_removed},
    },
    error::TaskError,
    tasks::Storage,
};

/// Converts the user's 1-based index token into a 0-based list position.
fn resolve_index(token: Option<&str>, command: &str, size: usize) -> Result<usize, TaskError> {
    let token = token.ok_or_else(|| TaskError::MissingArgument(command.to_string()))?;

    let index: i64 = token
        .parse()
        .map_err(|_| TaskError::NotInteger(token.to_string()))?;

    if index < 1 || index > size as i64 {
        debug!("index {} outside 1..={}", index, size);
        return Err(TaskError::IndexOutOfBound { index, size });
    }

    Ok(index as usize - 1)
}

/// Marks a task as done. Marking a done task again changes nothing.
pub async fn handle_done<S: Storage>(
    context: &mut CommandContext<'_, S>,
    index: Option<&str>,
) -> Result<CommandResult, TaskError> {
    debug!("handling done command: {:?}", index);

    let index = resolve_index(index, "done", context.tasks.len())?;
    let applied = context.tasks.mark_done(index).await?;

    Ok(CommandResult::applied(
        format_task_done(context.catalog, &applied.value),
        applied.saved,
    ))
}

/// Removes a task and reports it with the new list size.
pub async fn handle_delete<S: Storage>(
    context: &mut CommandContext<'_, S>,
    index: Option<&str>,
) -> Result<CommandResult, TaskError> {
    debug!("handling delete command: {:?}", index);

    let index = resolve_index(index, "delete", context.tasks.len())?;
    let applied = context.tasks.remove_at(index).await?;

    Ok(CommandResult::applied(
        format_task_removed(context.catalog, &applied.value, context.tasks.len()),
        applied.saved,
    ))
}
