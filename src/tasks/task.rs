//! The [`Task`] entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::TaskError, tasks::When};

/// The kind of a task. Closed set, so a discriminator rather than a trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    ToDo,
    Deadline,
    Event,
}

impl TaskKind {
    /// Single-letter icon shown in front of a rendered task.
    pub fn icon(&self) -> &'static str {
        match self {
            TaskKind::ToDo => "T",
            TaskKind::Deadline => "D",
            TaskKind::Event => "E",
        }
    }
}

/// One tracked task.
///
/// # Examples
///
/// ```
/// # use duke::tasks::{Task, When};
/// let mut task = Task::deadline("return book", When::parse("20/12/2024").unwrap()).unwrap();
/// task.mark_as_done();
/// assert_eq!(task.to_string(), "[D][✓] return book (by: 20/12/2024 00:00)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    kind: TaskKind,
    description: String,
    is_done: bool,
    /// Due date for deadlines, time for events. Always `None` for to-dos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    when: Option<When>,
}

impl Task {
    /// Creates a task that is not done yet.
    ///
    /// The description is trimmed. A `when` given for a [`TaskKind::ToDo`] is dropped.
    ///
    /// # Errors
    ///
    /// [`TaskError::EmptyDescription`] if the trimmed description is empty.
    pub fn new(kind: TaskKind, description: &str, when: Option<When>) -> Result<Self, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let when = match kind {
            TaskKind::ToDo => None,
            TaskKind::Deadline | TaskKind::Event => when,
        };

        Ok(Task {
            kind,
            description: description.to_string(),
            is_done: false,
            when,
        })
    }

    pub fn todo(description: &str) -> Result<Self, TaskError> {
        Self::new(TaskKind::ToDo, description, None)
    }

    pub fn deadline(description: &str, by: When) -> Result<Self, TaskError> {
        Self::new(TaskKind::Deadline, description, Some(by))
    }

    pub fn event(description: &str, at: When) -> Result<Self, TaskError> {
        Self::new(TaskKind::Event, description, Some(at))
    }

    #[cfg(test)]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn when(&self) -> Option<&When> {
        self.when.as_ref()
    }

    /// Marks the task as done. Calling it again has no effect.
    pub fn mark_as_done(&mut self) {
        self.is_done = true;
    }

    fn status_icon(&self) -> &'static str {
        if self.is_done { "✓" } else { "✘" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.icon(),
            self.status_icon(),
            self.description
        )?;

        match (self.kind, &self.when) {
            (TaskKind::Deadline, Some(by)) => write!(f, " (by: {})", by),
            (TaskKind::Event, Some(at)) => write!(f, " (at: {})", at),
            _ => Ok(()),
        }
    }
}
