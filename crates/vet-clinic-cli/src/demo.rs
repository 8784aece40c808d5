//! Demonstration clinic and the report printed for it.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use vet_clinic_core::report::{owner_name, ClinicSummary, ReportFormatter};
use vet_clinic_core::{Administrator, Client, Person, Personal, Pet, Registry, Task, Veterinarian};

const CLIENT_ID: &str = "12345678";
const VET_ID: &str = "87654321";
const ADMIN_ID: &str = "11223344";

/// Populate `registry` with one client (two pets), one veterinarian, one
/// administrator, a pending task and a consultation.
pub fn seed(registry: &mut Registry) -> Result<()> {
    let mut client = Client::new(Person::new(
        "Juan",
        "Pérez",
        CLIENT_ID,
        "555-0123",
        "juan@email.com",
    )?);
    client.attach_pet(Pet::dog("Rex", 3, "Golden Retriever", "Mediano")?)?;
    client.attach_pet(Pet::cat("Miau", 2, "Persa", true)?)?;
    registry.add_client(client);

    let vet = Veterinarian::new(
        Person::new("Dra. María", "García", VET_ID, "555-0456", "maria@vet.com")?,
        "Medicina General",
    )?;
    registry.add_veterinarian(vet);

    let mut admin = Administrator::new(
        Person::new("Carlos", "López", ADMIN_ID, "555-0789", "carlos@admin.com")?,
        "Recepción",
    )?;
    admin.attach_task(Task::new("Actualizar expedientes")?)?;
    registry.add_administrator(admin);

    registry.record_consultation(CLIENT_ID, "Rex", VET_ID, "Vacunación anual", "Animal saludable")?;

    tracing::info!(
        clients = registry.clients().len(),
        pets = registry.pet_count(),
        "demo clinic seeded"
    );
    Ok(())
}

/// Render the registry in the configured format.
pub fn render(registry: &Registry, config: &Config) -> Result<String> {
    let summary = ClinicSummary::from_registry(registry);
    match config.format {
        OutputFormat::Json => Ok(summary.to_json()?),
        OutputFormat::Text => render_text(registry, &summary, config),
    }
}

fn render_text(registry: &Registry, summary: &ClinicSummary, config: &Config) -> Result<String> {
    let formatter = ReportFormatter::new(&config.date_format)?;
    let mut sections = Vec::new();

    for client in registry.clients() {
        sections.push(format!("=== CLIENT ===\n{}", formatter.describe_client(client)));
        for pet in client.pets() {
            let owner = owner_name(registry, pet);
            sections.push(format!(
                "=== PET ===\n{}\n{}",
                formatter.describe_pet(pet, owner.as_deref()),
                pet.care_advice()
            ));
        }
    }

    for vet in registry.veterinarians() {
        let mut section = format!("=== VETERINARIAN ===\n{}", formatter.describe_veterinarian(vet));
        for consultation in vet.consultations() {
            section.push('\n');
            section.push_str(&formatter.consultation_summary_line(consultation, registry));
        }
        sections.push(section);
    }

    for consultation in registry.consultations() {
        sections.push(formatter.describe_consultation(consultation, registry));
    }

    for admin in registry.administrators() {
        let mut section = format!("=== ADMINISTRATOR ===\n{}", formatter.describe_administrator(admin));
        let assignee = admin.full_name();
        for task in admin.tasks() {
            section.push('\n');
            section.push_str(&formatter.task_summary_line(task, Some(&assignee)));
        }
        sections.push(section);
    }

    sections.push(summary.to_text());
    Ok(sections.join("\n\n"))
}
