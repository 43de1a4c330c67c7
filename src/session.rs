//! The interactive read loop.
//!
//! A [`Session`] owns the task list and the [`Commander`], reads one line at a
//! time, and writes every reply framed the way a terminal UI would: each line
//! indented, each reply closed by a horizontal rule.
//!
//! # Lifecycle
//!
//! ```text
//! restore tasks → welcome → (read line → handle → write reply)* → bye / end of input
//! ```
//!
//! Lines are handled strictly one after the other; nothing runs in the
//! background.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    commands::Commander,
    tasks::{Storage, TaskList},
};

/// Horizontal rule closing every reply.
pub const LONG_LINE: &str = "------------------------------------------------------------";

/// One run of the read loop from startup to `bye` or end of input.
pub struct Session<S: Storage> {
    /// Parses and executes commands
    commander: Commander,
    /// Exclusively owned task list
    tasks: TaskList<S>,
    /// Prefix written before every output line
    indent: String,
}

impl<S: Storage> Session<S> {
    pub fn new(commander: Commander, tasks: TaskList<S>, indent: String) -> Self {
        Session {
            commander,
            tasks,
            indent,
        }
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &TaskList<S> {
        &self.tasks
    }

    /// Runs the session until `bye` or the end of `input`.
    ///
    /// Restores the saved list first; a restore failure is shown to the user
    /// and the session continues with an empty list.
    ///
    /// # Errors
    ///
    /// Only I/O errors on `input` or `output`. Command errors are replies.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if let Err(e) = self.tasks.restore().await {
            let message = self.commander.load_error_message(&e);
            self.emit(output, &message).await?;
        }

        let welcome = self.commander.welcome_message();
        self.emit(output, &welcome).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            debug!("read line {:?}", line);
            let reply = self.commander.handle_line(&line, &mut self.tasks).await;
            self.emit(output, &reply.text).await?;

            if reply.exit {
                info!("session ended by command");
                return Ok(());
            }
        }

        info!("session ended at end of input");
        Ok(())
    }

    /// Writes `text` indented line by line, followed by the rule.
    async fn emit<W: AsyncWrite + Unpin>(&self, output: &mut W, text: &str) -> anyhow::Result<()> {
        let mut framed = String::new();
        for line in text.lines().chain(std::iter::once(LONG_LINE)) {
            framed.push_str(&self.indent);
            framed.push_str(line);
            framed.push('\n');
        }

        output.write_all(framed.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}
