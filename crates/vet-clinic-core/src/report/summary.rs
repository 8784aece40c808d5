//! Aggregate counts over a registry, rendered as JSON or text.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{TaskStatus, CONSULTATION_IDS, TASK_IDS};
use crate::registry::Registry;

/// Task counts per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskBreakdown {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub urgent: usize,
}

/// Aggregate view of a registry at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClinicSummary {
    pub generated_at: DateTime<Utc>,
    pub clients: usize,
    pub veterinarians: usize,
    pub administrators: usize,
    pub pets: usize,
    pub dogs: usize,
    pub cats: usize,
    pub tasks: TaskBreakdown,
    pub consultations: usize,
    pub consultations_today: usize,
    pub task_ids_issued: u64,
    pub consultation_ids_issued: u64,
}

impl ClinicSummary {
    pub fn from_registry(registry: &Registry) -> Self {
        Self::at(registry, Utc::now())
    }

    /// Summary with urgency and "today" evaluated at `now`.
    pub fn at(registry: &Registry, now: DateTime<Utc>) -> Self {
        let pets = registry.clients().iter().flat_map(|c| c.pets());
        let (dogs, cats) = pets.fold((0, 0), |(dogs, cats), pet| {
            if pet.is_dog() {
                (dogs + 1, cats)
            } else {
                (dogs, cats + 1)
            }
        });

        let mut tasks = TaskBreakdown::default();
        for task in registry.administrators().iter().flat_map(|a| a.tasks()) {
            match task.status() {
                TaskStatus::Pending => tasks.pending += 1,
                TaskStatus::InProgress => tasks.in_progress += 1,
                TaskStatus::Completed => tasks.completed += 1,
            }
            if task.is_urgent_at(now) {
                tasks.urgent += 1;
            }
        }

        Self {
            generated_at: now,
            clients: registry.clients().len(),
            veterinarians: registry.veterinarians().len(),
            administrators: registry.administrators().len(),
            pets: dogs + cats,
            dogs,
            cats,
            tasks,
            consultations: registry.consultation_count(),
            consultations_today: registry
                .consultations()
                .filter(|c| c.is_today_at(now))
                .count(),
            task_ids_issued: TASK_IDS.issued(),
            consultation_ids_issued: CONSULTATION_IDS.issued(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::from("=== CLINIC SUMMARY ===\n");
        out.push_str(&format!("Clients: {}\n", self.clients));
        out.push_str(&format!("Veterinarians: {}\n", self.veterinarians));
        out.push_str(&format!("Administrators: {}\n", self.administrators));
        out.push_str(&format!(
            "Pets: {} ({} dogs, {} cats)\n",
            self.pets, self.dogs, self.cats
        ));
        out.push_str(&format!(
            "Tasks: {} pending, {} in progress, {} completed, {} urgent\n",
            self.tasks.pending, self.tasks.in_progress, self.tasks.completed, self.tasks.urgent
        ));
        out.push_str(&format!(
            "Consultations: {} ({} today)",
            self.consultations, self.consultations_today
        ));
        out
    }
}
