//! Clinic staff: veterinarians and administrators.

use serde::Serialize;

use super::client::Client;
use super::consultation::Consultation;
use super::ownership::Owned;
use super::person::{Person, PersonKind, Personal};
use super::pet::Pet;
use super::task::{Task, TaskStatus};
use super::validation::{require_text, ValidationError, ValidationResult};

/// A veterinarian and the consultations they performed.
#[derive(Debug, Clone, Serialize)]
pub struct Veterinarian {
    #[serde(flatten)]
    person: Person,
    specialty: String,
    consultations: Vec<Consultation>,
}

impl Veterinarian {
    pub fn new(person: Person, specialty: &str) -> ValidationResult<Self> {
        Ok(Self {
            person,
            specialty: require_text("Specialty", specialty)?,
            consultations: Vec::new(),
        })
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn set_specialty(&mut self, value: &str) -> ValidationResult<()> {
        self.specialty = require_text("Specialty", value)?;
        Ok(())
    }

    /// Record a consultation this veterinarian performed.
    pub fn attach_consultation(&mut self, consultation: Consultation) -> ValidationResult<()> {
        if consultation.veterinarian_id() != self.person.national_id() {
            return Err(ValidationError::Referential(format!(
                "consultation {} belongs to veterinarian {}, not {}",
                consultation.id(),
                consultation.veterinarian_id(),
                self.person.national_id()
            )));
        }
        tracing::debug!(
            consultation = consultation.id().value(),
            veterinarian = self.person.national_id(),
            "attached consultation"
        );
        self.consultations.push(consultation);
        Ok(())
    }

    pub fn consultations(&self) -> &[Consultation] {
        &self.consultations
    }

    pub fn list_consultations(&self) -> Vec<Consultation> {
        self.consultations.clone()
    }

    pub fn consultations_by_client(&self, client: &Client) -> Vec<Consultation> {
        self.consultations
            .iter()
            .filter(|c| c.client_id() == client.national_id())
            .cloned()
            .collect()
    }

    pub fn consultations_by_pet(&self, pet: &Pet) -> Vec<Consultation> {
        self.consultations
            .iter()
            .filter(|c| c.pet().matches(pet))
            .cloned()
            .collect()
    }

    pub fn consultation_count(&self) -> usize {
        self.consultations.len()
    }

    pub fn has_consultations(&self) -> bool {
        !self.consultations.is_empty()
    }
}

impl Personal for Veterinarian {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Veterinarian
    }
}

impl PartialEq for Veterinarian {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Veterinarian {}

/// An administrator and the tasks assigned to them. Task descriptions are
/// unique per administrator, ignoring case.
#[derive(Debug, Clone, Serialize)]
pub struct Administrator {
    #[serde(flatten)]
    person: Person,
    area: String,
    tasks: Owned<Task>,
}

impl Administrator {
    pub fn new(person: Person, area: &str) -> ValidationResult<Self> {
        Ok(Self {
            person,
            area: require_text("Area", area)?,
            tasks: Owned::new(),
        })
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn set_area(&mut self, value: &str) -> ValidationResult<()> {
        self.area = require_text("Area", value)?;
        Ok(())
    }

    /// Assign `task`, pointing its back-reference at this administrator.
    pub fn attach_task(&mut self, task: Task) -> ValidationResult<()> {
        let owner = self.person.national_id().to_string();
        self.tasks.attach(&owner, task)
    }

    pub fn remove_task(&mut self, description: &str) -> Option<Task> {
        self.tasks.remove(description)
    }

    pub fn detach_task(&mut self, description: &str) -> bool {
        self.tasks.detach(description)
    }

    pub fn find_task(&self, description: &str) -> Option<&Task> {
        self.tasks.find(description)
    }

    /// Edit a task in place; renames that would collide are rolled back.
    pub fn modify_task<F>(&mut self, description: &str, f: F) -> ValidationResult<bool>
    where
        F: FnOnce(&mut Task) -> ValidationResult<()>,
    {
        self.tasks.modify(description, f)
    }

    /// Returns false when no task matches.
    pub fn set_task_status(&mut self, description: &str, status: TaskStatus) -> bool {
        self.modify_task(description, |task| {
            task.set_status(status);
            Ok(())
        })
        .unwrap_or(false)
    }

    pub fn start_task(&mut self, description: &str) -> bool {
        self.modify_task(description, |task| {
            task.start();
            Ok(())
        })
        .unwrap_or(false)
    }

    pub fn complete_task(&mut self, description: &str) -> bool {
        self.set_task_status(description, TaskStatus::Completed)
    }

    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status() == status)
            .cloned()
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    pub fn list_tasks(&self) -> Vec<Task> {
        self.tasks.to_vec()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}

impl Personal for Administrator {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Administrator
    }
}

impl PartialEq for Administrator {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Administrator {}
