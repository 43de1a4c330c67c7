//! Task persistence layer for loading and saving the task list to disk.
//!
//! This module provides the [`Storage`] trait the [`TaskList`](crate::tasks::TaskList)
//! writes through, and [`TaskLoader`], its JSON file implementation.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info, warn};
use mockall::automock;
use tokio::fs;

use crate::tasks::Task;

/// Persistence store for the task list.
///
/// This trait abstracts the file operations for easier testing with mocks.
#[automock]
pub trait Storage {
    /// Loads every persisted task, in order.
    async fn load_all(&self) -> anyhow::Result<Vec<Task>>;
    /// Replaces the persisted tasks with `tasks`.
    async fn save_all(&self, tasks: &[Task]) -> anyhow::Result<()>;
}

/// Reads and writes the task list as a JSON array.
///
/// A missing file is treated as an empty list so the first run starts clean.
/// Writes go to a sibling temporary file which is then renamed over the save
/// file, so an interrupted write never leaves a truncated list behind.
///
/// # Examples
///
/// ```no_run
/// use duke::tasks::{Storage, TaskLoader};
///
/// # async fn example() -> anyhow::Result<()> {
/// let loader = TaskLoader::new("data/tasks.json");
/// let tasks = loader.load_all().await?;
/// loader.save_all(&tasks).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TaskLoader {
    /// Path to the JSON save file.
    path: PathBuf,
}

impl TaskLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskLoader { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl Storage for TaskLoader {
    async fn load_all(&self) -> anyhow::Result<Vec<Task>> {
        let exists = fs::try_exists(&self.path)
            .await
            .with_context(|| format!("cannot access {}", self.path.display()))?;

        if !exists {
            warn!(
                "no saved tasks found at {}, starting with an empty list",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let serialized = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("cannot read {}", self.path.display()))?;

        let tasks: Vec<Task> = serde_json::from_str(&serialized)
            .with_context(|| format!("cannot parse {}", self.path.display()))?;

        info!("loaded {} tasks from {}", tasks.len(), self.path.display());

        Ok(tasks)
    }

    async fn save_all(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let serialized = serde_json::to_string_pretty(tasks).context("cannot serialize tasks")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, &serialized)
            .await
            .with_context(|| format!("cannot write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .with_context(|| format!("cannot replace {}", self.path.display()))?;

        debug!("persisted {} tasks to {}", tasks.len(), self.path.display());

        Ok(())
    }
}
