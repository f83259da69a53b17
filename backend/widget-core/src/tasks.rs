//! Ordered task list with per-entry deletion.

use crate::error::widget::WidgetError;
use crate::render::{Widget, WidgetView};

use common::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;

use log::{debug, info};
use uuid::Uuid;

const SUBMIT_KEY: &str = "Enter";

/// Handle bound to one entry so it can be deleted later.
///
/// Lives only in memory; entries have no identity beyond their position
/// as far as the page is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for TaskId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: TaskId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub input: String,
    pub entries: Vec<TaskEntry>,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    input: String,
    entries: Vec<TaskEntry>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the list with entries that behave exactly like added ones.
    /// Blank seeds are skipped.
    pub fn with_entries<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for text in texts {
            list.push(text.as_ref());
        }
        list
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append the trimmed input field as a new entry and clear the field.
    ///
    /// Returns `None`, leaving everything untouched, when the input is blank.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let text = self.input.clone();
        let id = self.push(&text)?;
        self.input.clear();
        info!("Task added ({} total)", self.count());
        Some(id)
    }

    /// Key press inside the input field; only Enter submits.
    pub fn handle_key(&mut self, key: &str) -> Option<TaskId> {
        if key == SUBMIT_KEY {
            self.add_task()
        } else {
            None
        }
    }

    /// Remove one entry, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownTask`] if the handle was already deleted.
    #[track_caller]
    pub fn delete_task(&mut self, id: TaskId) -> Result<TaskEntry, WidgetError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| WidgetError::UnknownTask {
                message: format!("No task with id {id}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let removed = self.entries.remove(index);
        info!("Task deleted ({} remaining)", self.count());
        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    fn push(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank task");
            return None;
        }

        let id = TaskId::new();
        self.entries.push(TaskEntry {
            id,
            text: text.to_string(),
        });
        Some(id)
    }
}

impl Widget for TaskList {
    fn view(&self) -> WidgetView {
        WidgetView::Tasks(TaskListView {
            input: self.input.clone(),
            entries: self.entries.clone(),
            count: self.count(),
        })
    }
}
