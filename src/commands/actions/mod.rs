//! Command action handlers.
//!
//! One handler per command. Each receives a
//! [`CommandContext`](crate::commands::CommandContext) plus the arguments the
//! command carries, and returns a [`CommandResult`](crate::commands::CommandResult)
//! or the [`TaskError`](crate::error::TaskError) that rejected it.
//!
//! # Handler Pattern
//!
//! 1. Validate every argument; reject before any mutation
//! 2. Apply the change to the task list, which writes it through to storage
//! 3. Render the confirmation, carrying a persistence failure as a warning
//!
//! # Available Handlers
//!
//! - [`handle_greet`], [`handle_help`], [`handle_bye`] - fixed messages
//! - [`handle_todo`], [`handle_deadline`], [`handle_event`] - add a task
//! - [`handle_list`] - render the list
//! - [`handle_done`], [`handle_delete`] - change a task by its number

mod add;
mod index;
mod list;
mod session;

pub use crate::commands::actions::{
    add::{handle_deadline, handle_event, handle_todo},
    index::{handle_delete, handle_done},
    list::handle_list,
    session::{handle_bye, handle_greet, handle_help},
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        commands::CommandContext,
        locale::Catalog,
        tasks::{MockStorage, Task, TaskList},
    };

    pub fn saving_list() -> TaskList<MockStorage> {
        let mut storage = MockStorage::new();
        storage.expect_save_all().returning(|_| Ok(()));
        TaskList::new(storage)
    }

    pub fn failing_list() -> TaskList<MockStorage> {
        let mut storage = MockStorage::new();
        storage
            .expect_save_all()
            .returning(|_| Err(anyhow::anyhow!("disk full")));
        TaskList::new(storage)
    }

    pub async fn list_of(descriptions: &[&str]) -> TaskList<MockStorage> {
        let mut tasks = saving_list();
        for description in descriptions {
            tasks.add_task(Task::todo(description).unwrap()).await;
        }
        tasks
    }

    pub fn context<'a>(
        tasks: &'a mut TaskList<MockStorage>,
        catalog: &'a Catalog,
    ) -> CommandContext<'a, MockStorage> {
        CommandContext {
            tasks,
            catalog,
            parse_dates: true,
        }
    }
}
