//! Ordered task collection that writes through to a [`Storage`].

use chrono::NaiveDate;
use log::{debug, error, info};

use crate::{
    error::TaskError,
    tasks::{Storage, Task},
};

/// The outcome of a mutation that has already been applied in memory.
///
/// `saved` reports whether the write-through to storage succeeded. A failed
/// save is not rolled back: the caller gets the value and the
/// [`TaskError::Persist`] side by side.
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    pub saved: Result<(), TaskError>,
}

/// Ordered list of tasks, 0-indexed.
///
/// Every bounds-checked accessor fails with [`TaskError::IndexOutOfBound`]
/// carrying the 1-based index, so the error can be shown to the user as is.
/// The list is never touched when an index is rejected.
pub struct TaskList<S: Storage> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: Storage> TaskList<S> {
    /// Creates an empty list backed by `storage`. Nothing is read until [`Self::restore`].
    pub fn new(storage: S) -> Self {
        TaskList {
            tasks: Vec::new(),
            storage,
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// # Returns
    ///
    /// The number of restored tasks.
    ///
    /// # Errors
    ///
    /// [`TaskError::Load`] if the store cannot be read; the list is left empty.
    pub async fn restore(&mut self) -> Result<usize, TaskError> {
        match self.storage.load_all().await {
            Ok(tasks) => {
                info!("restored {} tasks", tasks.len());
                self.tasks = tasks;
                Ok(self.tasks.len())
            }
            Err(e) => {
                error!("failed to restore tasks: {:#}", e);
                self.tasks.clear();
                Err(TaskError::Load(format!("{:#}", e)))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Task, TaskError> {
        self.check_index(index)?;
        Ok(&self.tasks[index])
    }

    /// Tasks whose parsed date falls on `date`, with their 0-based index.
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.when().and_then(|when| when.date()) == Some(date))
            .collect()
    }

    /// Appends `task`.
    ///
    /// # Returns
    ///
    /// The new size of the list.
    pub async fn add_task(&mut self, task: Task) -> Applied<usize> {
        debug!("adding task {}", task);
        self.tasks.push(task);
        let saved = self.persist().await;

        Applied {
            value: self.tasks.len(),
            saved,
        }
    }

    pub async fn set(&mut self, index: usize, task: Task) -> Result<Applied<()>, TaskError> {
        self.check_index(index)?;
        self.tasks[index] = task;
        let saved = self.persist().await;

        Ok(Applied { value: (), saved })
    }

    /// Marks the task at `index` as done.
    ///
    /// # Returns
    ///
    /// A copy of the updated task.
    pub async fn mark_done(&mut self, index: usize) -> Result<Applied<Task>, TaskError> {
        let mut task = self.get(index)?.clone();
        task.mark_as_done();
        let applied = self.set(index, task.clone()).await?;

        Ok(Applied {
            value: task,
            saved: applied.saved,
        })
    }

    /// Removes and returns the task at `index`.
    pub async fn remove_at(&mut self, index: usize) -> Result<Applied<Task>, TaskError> {
        self.check_index(index)?;
        let task = self.tasks.remove(index);
        debug!("removed task {}", task);
        let saved = self.persist().await;

        Ok(Applied { value: task, saved })
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfBound {
                index: index as i64 + 1,
                size: self.tasks.len(),
            });
        }
        Ok(())
    }

    async fn persist(&self) -> Result<(), TaskError> {
        self.storage.save_all(&self.tasks).await.map_err(|e| {
            error!("failed to persist tasks: {:#}", e);
            TaskError::Persist(format!("{:#}", e))
        })
    }
}
