//! Task list storage.
//!
//! The list lives in memory for the whole session and is written back to a
//! flat JSON array of task records when the session ends.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TaskError};
use crate::task::Task;

/// Default task file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "tasklist.json";

/// Ordered, in-memory task list. Position in the list is the task's identity.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Load the list from `path`, starting empty if the file doesn't exist.
    ///
    /// Records that are not well-formed tasks are dropped one by one. A file
    /// whose top level isn't a JSON array is treated as empty.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No task file at {}, starting with an empty list", path.display());
            return Ok(TaskList::default());
        }
        let buf = fs::read_to_string(path).map_err(|source| TaskError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let records = match serde_json::from_str::<Value>(&buf) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                log::warn!("{} does not hold a JSON array, starting fresh", path.display());
                return Ok(TaskList::default());
            }
            Err(e) => {
                log::warn!("Error parsing {}, starting fresh: {e}", path.display());
                return Ok(TaskList::default());
            }
        };

        let total = records.len();
        let tasks: Vec<Task> = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| match serde_json::from_value::<Task>(record) {
                Ok(task) => Some(task),
                Err(e) => {
                    log::debug!("Skipping record {i}: {e}");
                    None
                }
            })
            .collect();
        log::info!("Loaded {} of {} tasks from {}", tasks.len(), total, path.display());
        Ok(TaskList { tasks })
    }

    /// Save the list to `path` using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.tasks)?;
        let tmp = path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut f = File::create(&tmp)?;
            f.write_all(data.as_bytes())?;
            f.flush()?;
            fs::rename(&tmp, path)
        };
        write().map_err(|source| TaskError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Saved {} tasks to {}", self.tasks.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Get a mutable reference to the task at 1-based position `number`.
    pub fn get_mut(&mut self, number: usize) -> Option<&mut Task> {
        number.checked_sub(1).and_then(|i| self.tasks.get_mut(i))
    }

    /// Remove the task at 1-based position `number`, shifting later tasks up.
    pub fn remove(&mut self, number: usize) -> Option<Task> {
        let idx = number.checked_sub(1).filter(|&i| i < self.tasks.len())?;
        Some(self.tasks.remove(idx))
    }

    /// Parse a user-typed 1-based task number, accepting only positions in the list.
    pub fn parse_number(&self, input: &str) -> Option<usize> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=self.tasks.len()).contains(n))
    }
}
