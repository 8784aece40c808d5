//! Detailed and one-line text views of clinic records.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

use crate::models::{
    Administrator, Client, Consultation, Person, PersonKind, Personal, Pet, Task, ValidationError,
    ValidationResult, Veterinarian,
};
use crate::registry::Registry;

/// Default timestamp layout, e.g. `18/10/2026 14:05`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Task descriptions longer than this are cut in one-line summaries.
const SUMMARY_DESCRIPTION_CHARS: usize = 30;

/// Renders records as human-readable text.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    date_format: String,
}

/// Reject strftime patterns chrono cannot render.
pub fn validate_date_format(date_format: &str) -> ValidationResult<()> {
    if date_format.trim().is_empty() {
        return Err(ValidationError::Blank { field: "Date format" });
    }
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::InvalidValue {
            field: "date format",
            value: date_format.to_string(),
            expected: "a strftime pattern such as %d/%m/%Y %H:%M",
        });
    }
    Ok(())
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ReportFormatter {
    pub fn new(date_format: &str) -> ValidationResult<Self> {
        validate_date_format(date_format)?;
        Ok(Self {
            date_format: date_format.to_string(),
        })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Format a timestamp in local time.
    pub fn format_date(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(&self.date_format).to_string()
    }

    pub fn describe_person(&self, person: &Person, kind: PersonKind) -> String {
        format!(
            "Type: {}\nFirst name: {}\nLast name: {}\nNational id: {}\nPhone: {}\nEmail: {}",
            kind,
            person.first_name(),
            person.last_name(),
            person.national_id(),
            person.phone(),
            person.email()
        )
    }

    pub fn describe_client(&self, client: &Client) -> String {
        let mut out = self.describe_person(client.person(), client.kind());
        out.push_str(&format!("\nPets: {}", client.pet_count()));
        for pet in client.pets() {
            out.push_str(&format!("\n  - {} ({})", pet.name(), pet.species_name()));
        }
        out
    }

    pub fn describe_veterinarian(&self, vet: &Veterinarian) -> String {
        let mut out = self.describe_person(vet.person(), vet.kind());
        out.push_str(&format!("\nSpecialty: {}", vet.specialty()));
        out.push_str(&format!("\nConsultations performed: {}", vet.consultation_count()));
        out
    }

    pub fn describe_administrator(&self, admin: &Administrator) -> String {
        let mut out = self.describe_person(admin.person(), admin.kind());
        out.push_str(&format!("\nArea: {}", admin.area()));
        out.push_str(&format!("\nTasks assigned: {}", admin.task_count()));
        out.push_str(&format!("\nPending tasks: {}", admin.pending_count()));
        out.push_str(&format!("\nCompleted tasks: {}", admin.completed_count()));
        out
    }

    /// Full pet sheet. `owner_name` is the resolved name of the owner, if any.
    pub fn describe_pet(&self, pet: &Pet, owner_name: Option<&str>) -> String {
        let mut out = format!("Type: {}\n", pet.species_name());
        out.push_str(&pet.general_info());
        out.push('\n');
        out.push_str(&pet.specific_info());
        out.push('\n');
        out.push_str(&format!("Owner: {}\n", owner_name.unwrap_or("No owner")));
        out.push_str(&format!("Sound: {}", pet.make_sound()));
        if let Some(exercise) = pet.recommended_exercise() {
            out.push_str(&format!("\nRecommended exercise: {}", exercise));
        }
        out.push_str(&format!("\nSpecial {} actions:", pet.species_name().to_lowercase()));
        for action in pet.special_actions() {
            out.push_str(&format!("\n- {}", action));
        }
        out
    }

    pub fn task_summary_line(&self, task: &Task, assignee: Option<&str>) -> String {
        let description: String = if task.description().chars().count() > SUMMARY_DESCRIPTION_CHARS {
            let cut: String = task
                .description()
                .chars()
                .take(SUMMARY_DESCRIPTION_CHARS)
                .collect();
            format!("{}...", cut)
        } else {
            task.description().to_string()
        };
        format!(
            "Task #{} - {} - {} - {}",
            task.id(),
            description,
            task.status(),
            assignee.unwrap_or("Unassigned")
        )
    }

    pub fn describe_task(&self, task: &Task, assignee: Option<&str>, now: DateTime<Utc>) -> String {
        let completed = task
            .completed_at()
            .map(|at| self.format_date(at))
            .unwrap_or_else(|| "Not completed".to_string());

        let mut out = String::from("=== ADMINISTRATIVE TASK ===\n");
        out.push_str(&format!("ID: {}\n", task.id()));
        out.push_str(&format!("Description: {}\n", task.description()));
        out.push_str(&format!("Status: {}\n", task.status()));
        out.push_str(&format!("Assigned to: {}\n", assignee.unwrap_or("Unassigned")));
        out.push_str(&format!("Created: {}\n", self.format_date(task.created_at())));
        out.push_str(&format!("Completed: {}\n", completed));
        out.push_str(&format!("Days elapsed: {}\n", task.days_elapsed_at(now)));
        if task.is_urgent_at(now) {
            out.push_str("*** URGENT TASK ***");
        }
        out
    }

    pub fn consultation_summary_line(&self, consultation: &Consultation, registry: &Registry) -> String {
        let pet = resolve_pet(registry, consultation);
        format!(
            "Consultation #{} - {} ({}) - Dr. {} - {}",
            consultation.id(),
            consultation.pet().name,
            pet.map(Pet::species_name).unwrap_or("?"),
            veterinarian_name(registry, consultation),
            self.format_date(consultation.created_at())
        )
    }

    pub fn describe_consultation(&self, consultation: &Consultation, registry: &Registry) -> String {
        let client = registry.find_client(consultation.client_id());
        let pet = resolve_pet(registry, consultation);
        let vet = registry.find_veterinarian(consultation.veterinarian_id());

        let mut out = String::from("=== VETERINARY CONSULTATION ===\n");
        out.push_str(&format!("ID: {}\n", consultation.id()));
        out.push_str(&format!("Date: {}\n", self.format_date(consultation.created_at())));
        out.push_str(&format!(
            "Client: {} (National id: {})\n",
            client.map(|c| c.full_name()).unwrap_or_else(|| "Unknown".into()),
            consultation.client_id()
        ));
        match pet {
            Some(pet) => out.push_str(&format!(
                "Pet: {} ({}, {})\n",
                pet.name(),
                pet.species_name(),
                pet.breed()
            )),
            None => out.push_str(&format!("Pet: {}\n", consultation.pet().name)),
        }
        match vet {
            Some(vet) => out.push_str(&format!(
                "Veterinarian: Dr. {} ({})\n",
                vet.full_name(),
                vet.specialty()
            )),
            None => out.push_str(&format!(
                "Veterinarian: {}\n",
                consultation.veterinarian_id()
            )),
        }
        out.push_str(&format!("Treatment: {}\n", consultation.treatment()));
        out.push_str(&format!("Diagnosis: {}", consultation.diagnosis()));
        out
    }
}

/// The pet a consultation refers to, if its owner is still registered and
/// still has it.
fn resolve_pet<'a>(registry: &'a Registry, consultation: &Consultation) -> Option<&'a Pet> {
    let owner = consultation.pet().owner.as_deref()?;
    registry
        .find_client(owner)?
        .pets()
        .iter()
        .find(|p| consultation.pet().matches(p))
}

fn veterinarian_name(registry: &Registry, consultation: &Consultation) -> String {
    registry
        .find_veterinarian(consultation.veterinarian_id())
        .map(|v| v.full_name())
        .unwrap_or_else(|| consultation.veterinarian_id().to_string())
}

/// Owner display name for a pet, resolved through the registry.
pub fn owner_name(registry: &Registry, pet: &Pet) -> Option<String> {
    pet.owner()
        .and_then(|id| registry.find_client(id))
        .map(|c| c.full_name())
}
