//! Administrative tasks and their status state machine.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::ownership::OwnedItem;
use super::sequence::{IdSequence, TaskId, TASK_IDS};
use super::validation::{require_text, same_text, ValidationError, ValidationResult};

/// A pending task older than this many days is urgent.
pub const URGENT_AFTER_DAYS: i64 = 7;

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Canonical label ("Pendiente", "En Proceso", "Completada").
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pendiente",
            TaskStatus::InProgress => "En Proceso",
            TaskStatus::Completed => "Completada",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = require_text("Task status", s)?;
        let status = [
            ("pendiente", TaskStatus::Pending),
            ("pending", TaskStatus::Pending),
            ("en proceso", TaskStatus::InProgress),
            ("in progress", TaskStatus::InProgress),
            ("completada", TaskStatus::Completed),
            ("completed", TaskStatus::Completed),
        ]
        .into_iter()
        .find(|(label, _)| same_text(label, &value))
        .map(|(_, status)| status);

        status.ok_or(ValidationError::InvalidValue {
            field: "task status",
            value,
            expected: "Pendiente, En Proceso, Completada",
        })
    }
}

/// An administrative to-do item.
///
/// `completed_at` is set exactly while the status is `Completed`.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    id: TaskId,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
}

impl Task {
    /// Create a pending task.
    pub fn new(description: &str) -> ValidationResult<Self> {
        Self::with_status(description, TaskStatus::Pending)
    }

    /// Create a task in the given status, drawing its id from [`TASK_IDS`].
    pub fn with_status(description: &str, status: TaskStatus) -> ValidationResult<Self> {
        Self::with_sequence(&TASK_IDS, description, status)
    }

    /// Create a task drawing its id from `sequence`.
    pub fn with_sequence(
        sequence: &IdSequence,
        description: &str,
        status: TaskStatus,
    ) -> ValidationResult<Self> {
        let description = require_text("Task description", description)?;
        let created_at = Utc::now();
        Ok(Self {
            id: TaskId(sequence.next_id()),
            description,
            status,
            created_at,
            completed_at: (status == TaskStatus::Completed).then_some(created_at),
            assigned_to: None,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// National id of the administrator the task was last attached to.
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    pub fn set_description(&mut self, value: &str) -> ValidationResult<()> {
        self.description = require_text("Task description", value)?;
        Ok(())
    }

    /// Set any status, stamping or clearing `completed_at` on the way
    /// into or out of `Completed`.
    pub fn set_status(&mut self, status: TaskStatus) {
        match (self.status, status) {
            (TaskStatus::Completed, TaskStatus::Completed) => {}
            (_, TaskStatus::Completed) => self.completed_at = Some(Utc::now()),
            (TaskStatus::Completed, _) => self.completed_at = None,
            _ => {}
        }
        self.status = status;
    }

    /// Pending → InProgress; no-op from any other status.
    pub fn start(&mut self) {
        if self.status == TaskStatus::Pending {
            self.set_status(TaskStatus::InProgress);
        }
    }

    pub fn complete(&mut self) {
        self.set_status(TaskStatus::Completed);
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == TaskStatus::InProgress
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Whole calendar days (local time) between creation and `now`.
    pub fn days_elapsed_at(&self, now: DateTime<Utc>) -> i64 {
        let created = self.created_at.with_timezone(&Local).date_naive();
        let today = now.with_timezone(&Local).date_naive();
        (today - created).num_days()
    }

    pub fn days_elapsed(&self) -> i64 {
        self.days_elapsed_at(Utc::now())
    }

    pub fn is_urgent_at(&self, now: DateTime<Utc>) -> bool {
        self.is_pending() && self.days_elapsed_at(now) > URGENT_AFTER_DAYS
    }

    /// Pending for more than [`URGENT_AFTER_DAYS`] days.
    pub fn is_urgent(&self) -> bool {
        self.is_urgent_at(Utc::now())
    }
}

impl OwnedItem for Task {
    const WHAT: &'static str = "task";

    fn key(&self) -> &str {
        &self.description
    }

    fn owner(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    fn set_owner(&mut self, owner_id: &str) {
        self.assigned_to = Some(owner_id.to_string());
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}
