//! Task model, task list and task persistence.
//!
//! - [`Task`]: one tracked item, a to-do, a deadline or an event
//! - [`When`]: the due date or event time of a task, parsed or free text
//! - [`TaskList`]: ordered, bounds-checked collection that writes through a [`Storage`]
//! - [`TaskLoader`]: JSON save file implementing [`Storage`]
//!
//! # Example Usage
//!
//! ```no_run
//! use duke::tasks::{Task, TaskList, TaskLoader};
//!
//! # async fn example() {
//! let mut tasks = TaskList::new(TaskLoader::new("data/tasks.json"));
//! tasks.restore().await.ok();
//!
//! let task = Task::todo("buy milk").unwrap();
//! let applied = tasks.add_task(task).await;
//! assert_eq!(applied.value, tasks.len());
//! # }
//! ```

mod task;
mod task_list;
mod task_loader;
mod when;

pub use crate::tasks::task::Task;
pub use crate::tasks::task_list::TaskList;
#[cfg(test)]
pub use crate::tasks::task_loader::MockStorage;
pub use crate::tasks::task_loader::{Storage, TaskLoader};
pub use crate::tasks::when::When;
