//! Vet-Clinic Core Library
//!
//! In-memory entity graph for a small veterinary clinic, with the
//! relationship integrity rules between its records enforced at every
//! construction and mutation.
//!
//! # Ownership
//!
//! ```text
//!                 Registry (keyed by national id)
//!          ┌──────────────┼──────────────────┐
//!          ▼              ▼                  ▼
//!       Client      Veterinarian       Administrator
//!          │              │                  │
//!        owns           owns               owns
//!          ▼              ▼                  ▼
//!        Pets      Consultations           Tasks
//!          ▲              │                  │
//!          └── PetRef ────┘                  │
//!   (items point back at their owner by national id only)
//! ```
//!
//! # Core Principle
//!
//! **Every rejection is a [`ValidationError`].** Lookups that find nothing
//! return `None`; they never fail.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Person, Pet, Task, Consultation, etc.)
//! - [`registry`]: Top-level registry of people
//! - [`report`]: Text and JSON views over the registry

pub mod models;
pub mod registry;
pub mod report;

// Re-export commonly used types
pub use models::{
    Administrator, Client, Consultation, ConsultationId, DogSize, IdSequence, Person, PersonKind,
    Personal, Pet, PetRef, Species, Task, TaskId, TaskStatus, ValidationError, ValidationResult,
    Veterinarian,
};
pub use registry::{PersonRef, Registry};
pub use report::{ClinicSummary, ReportFormatter};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VetClinicError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<ValidationError> for VetClinicError {
    fn from(e: ValidationError) -> Self {
        VetClinicError::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for VetClinicError {
    fn from(e: serde_json::Error) -> Self {
        VetClinicError::Serialization(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for VetClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        VetClinicError::Lock(format!("Lock poisoned: {}", e))
    }
}

fn not_found(what: &str, key: &str) -> VetClinicError {
    VetClinicError::NotFound(format!("{} {}", what, key))
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an empty clinic.
#[uniffi::export]
pub fn open_clinic() -> Arc<VetClinicCore> {
    Arc::new(VetClinicCore {
        registry: Arc::new(Mutex::new(Registry::new())),
    })
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe registry wrapper for FFI.
#[derive(uniffi::Object)]
pub struct VetClinicCore {
    registry: Arc<Mutex<Registry>>,
}

impl VetClinicCore {
    /// Run `f` with the registry locked.
    pub fn with_registry<R>(&self, f: impl FnOnce(&Registry) -> R) -> Result<R, VetClinicError> {
        let registry = self.registry.lock()?;
        Ok(f(&registry))
    }
}

#[uniffi::export]
impl VetClinicCore {
    // =========================================================================
    // Registry Operations
    // =========================================================================

    /// Register a client. A reused national id replaces the earlier entry.
    pub fn add_client(
        &self,
        first_name: String,
        last_name: String,
        national_id: String,
        phone: String,
        email: String,
    ) -> Result<FfiPerson, VetClinicError> {
        let person = Person::new(&first_name, &last_name, &national_id, &phone, &email)?;
        let client = Client::new(person);
        let record = FfiPerson::from(PersonRef::Client(&client));
        self.registry.lock()?.add_client(client);
        Ok(record)
    }

    pub fn add_veterinarian(
        &self,
        first_name: String,
        last_name: String,
        national_id: String,
        phone: String,
        email: String,
        specialty: String,
    ) -> Result<FfiPerson, VetClinicError> {
        let person = Person::new(&first_name, &last_name, &national_id, &phone, &email)?;
        let vet = Veterinarian::new(person, &specialty)?;
        let record = FfiPerson::from(PersonRef::Veterinarian(&vet));
        self.registry.lock()?.add_veterinarian(vet);
        Ok(record)
    }

    pub fn add_administrator(
        &self,
        first_name: String,
        last_name: String,
        national_id: String,
        phone: String,
        email: String,
        area: String,
    ) -> Result<FfiPerson, VetClinicError> {
        let person = Person::new(&first_name, &last_name, &national_id, &phone, &email)?;
        let admin = Administrator::new(person, &area)?;
        let record = FfiPerson::from(PersonRef::Administrator(&admin));
        self.registry.lock()?.add_administrator(admin);
        Ok(record)
    }

    /// Find a person by kind ("Client", "Veterinarian", "Administrator").
    pub fn find_by_national_id(
        &self,
        kind: String,
        national_id: String,
    ) -> Result<Option<FfiPerson>, VetClinicError> {
        let kind: PersonKind = kind.parse()?;
        let registry = self.registry.lock()?;
        Ok(registry
            .find_by_national_id(kind, &national_id)
            .map(FfiPerson::from))
    }

    // =========================================================================
    // Pet Operations
    // =========================================================================

    pub fn attach_pet(&self, client_id: String, pet: FfiNewPet) -> Result<FfiPet, VetClinicError> {
        let pet = Pet::try_from(pet)?;
        let name = pet.name().to_string();
        let mut registry = self.registry.lock()?;
        let client = registry
            .find_client_mut(&client_id)
            .ok_or_else(|| not_found("client", &client_id))?;
        client.attach_pet(pet)?;
        client
            .find_pet(&name)
            .map(FfiPet::from)
            .ok_or_else(|| not_found("pet", &name))
    }

    pub fn detach_pet(&self, client_id: String, name: String) -> Result<bool, VetClinicError> {
        let mut registry = self.registry.lock()?;
        let client = registry
            .find_client_mut(&client_id)
            .ok_or_else(|| not_found("client", &client_id))?;
        Ok(client.detach_pet(&name))
    }

    pub fn find_pet(&self, client_id: String, name: String) -> Result<Option<FfiPet>, VetClinicError> {
        let registry = self.registry.lock()?;
        let client = registry
            .find_client(&client_id)
            .ok_or_else(|| not_found("client", &client_id))?;
        Ok(client.find_pet(&name).map(FfiPet::from))
    }

    pub fn list_pets(&self, client_id: String) -> Result<Vec<FfiPet>, VetClinicError> {
        let registry = self.registry.lock()?;
        let client = registry
            .find_client(&client_id)
            .ok_or_else(|| not_found("client", &client_id))?;
        Ok(client.pets().iter().map(FfiPet::from).collect())
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// Assign a new task. `status` defaults to "Pendiente".
    pub fn attach_task(
        &self,
        admin_id: String,
        description: String,
        status: Option<String>,
    ) -> Result<FfiTask, VetClinicError> {
        let status = match status {
            Some(s) => s.parse()?,
            None => TaskStatus::Pending,
        };
        let mut registry = self.registry.lock()?;
        let admin = registry
            .find_administrator_mut(&admin_id)
            .ok_or_else(|| not_found("administrator", &admin_id))?;
        // Reject duplicates before a task id is drawn
        if admin.find_task(description.trim()).is_some() {
            return Err(ValidationError::Duplicate {
                what: "task",
                key: description.trim().to_string(),
            }
            .into());
        }
        let task = Task::with_status(&description, status)?;
        let record = FfiTask::from(&task);
        admin.attach_task(task)?;
        Ok(FfiTask {
            assigned_to: Some(admin.national_id().to_string()),
            ..record
        })
    }

    pub fn detach_task(&self, admin_id: String, description: String) -> Result<bool, VetClinicError> {
        let mut registry = self.registry.lock()?;
        let admin = registry
            .find_administrator_mut(&admin_id)
            .ok_or_else(|| not_found("administrator", &admin_id))?;
        Ok(admin.detach_task(&description))
    }

    /// Returns false when the administrator has no such task.
    pub fn complete_task(&self, admin_id: String, description: String) -> Result<bool, VetClinicError> {
        let mut registry = self.registry.lock()?;
        let admin = registry
            .find_administrator_mut(&admin_id)
            .ok_or_else(|| not_found("administrator", &admin_id))?;
        Ok(admin.complete_task(&description))
    }

    pub fn tasks_by_status(&self, admin_id: String, status: String) -> Result<Vec<FfiTask>, VetClinicError> {
        let status: TaskStatus = status.parse()?;
        let registry = self.registry.lock()?;
        let admin = registry
            .find_administrator(&admin_id)
            .ok_or_else(|| not_found("administrator", &admin_id))?;
        Ok(admin.tasks_by_status(status).iter().map(FfiTask::from).collect())
    }

    // =========================================================================
    // Consultation Operations
    // =========================================================================

    /// Record a consultation and attach it to the veterinarian.
    pub fn record_consultation(
        &self,
        client_id: String,
        pet_name: String,
        veterinarian_id: String,
        treatment: String,
        diagnosis: String,
    ) -> Result<FfiConsultation, VetClinicError> {
        let mut registry = self.registry.lock()?;
        let id = registry.record_consultation(
            &client_id,
            &pet_name,
            &veterinarian_id,
            &treatment,
            &diagnosis,
        )?;
        let found = registry
            .consultations()
            .find(|c| c.id() == id)
            .map(FfiConsultation::from);
        found.ok_or_else(|| not_found("consultation", &id.to_string()))
    }

    pub fn consultations_by_client(
        &self,
        veterinarian_id: String,
        client_id: String,
    ) -> Result<Vec<FfiConsultation>, VetClinicError> {
        let registry = self.registry.lock()?;
        let vet = registry
            .find_veterinarian(&veterinarian_id)
            .ok_or_else(|| not_found("veterinarian", &veterinarian_id))?;
        let client = registry
            .find_client(&client_id)
            .ok_or_else(|| not_found("client", &client_id))?;
        Ok(vet
            .consultations_by_client(client)
            .iter()
            .map(FfiConsultation::from)
            .collect())
    }

    pub fn consultations_by_pet(
        &self,
        veterinarian_id: String,
        client_id: String,
        pet_name: String,
    ) -> Result<Vec<FfiConsultation>, VetClinicError> {
        let registry = self.registry.lock()?;
        let vet = registry
            .find_veterinarian(&veterinarian_id)
            .ok_or_else(|| not_found("veterinarian", &veterinarian_id))?;
        let pet = registry
            .find_client(&client_id)
            .ok_or_else(|| not_found("client", &client_id))?
            .find_pet(&pet_name)
            .ok_or_else(|| not_found("pet", &pet_name))?;
        Ok(vet
            .consultations_by_pet(pet)
            .iter()
            .map(FfiConsultation::from)
            .collect())
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Clinic summary as pretty-printed JSON.
    pub fn summary_json(&self) -> Result<String, VetClinicError> {
        let registry = self.registry.lock()?;
        Ok(ClinicSummary::from_registry(&registry).to_json()?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe person of any kind.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPerson {
    pub kind: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    /// Specialty for veterinarians, area for administrators.
    pub role: Option<String>,
}

impl From<PersonRef<'_>> for FfiPerson {
    fn from(person_ref: PersonRef<'_>) -> Self {
        let person = person_ref.person();
        let role = match person_ref {
            PersonRef::Client(_) => None,
            PersonRef::Veterinarian(v) => Some(v.specialty().to_string()),
            PersonRef::Administrator(a) => Some(a.area().to_string()),
        };
        Self {
            kind: person_ref.kind().to_string(),
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
            national_id: person.national_id().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            role,
        }
    }
}

/// FFI-safe species data.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiSpecies {
    Dog { size: String },
    Cat { indoor: bool },
}

/// Input for a pet to attach.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewPet {
    pub name: String,
    pub age: i64,
    pub breed: String,
    pub species: FfiSpecies,
}

impl TryFrom<FfiNewPet> for Pet {
    type Error = ValidationError;

    fn try_from(pet: FfiNewPet) -> Result<Self, Self::Error> {
        match pet.species {
            FfiSpecies::Dog { size } => Pet::dog(&pet.name, pet.age, &pet.breed, &size),
            FfiSpecies::Cat { indoor } => Pet::cat(&pet.name, pet.age, &pet.breed, indoor),
        }
    }
}

/// FFI-safe pet.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPet {
    pub name: String,
    pub age: u8,
    pub breed: String,
    pub species: FfiSpecies,
    pub owner: Option<String>,
}

impl From<&Pet> for FfiPet {
    fn from(pet: &Pet) -> Self {
        let species = match pet.species() {
            Species::Dog { size } => FfiSpecies::Dog {
                size: size.to_string(),
            },
            Species::Cat { indoor } => FfiSpecies::Cat { indoor: *indoor },
        };
        Self {
            name: pet.name().to_string(),
            age: pet.age(),
            breed: pet.breed().to_string(),
            species,
            owner: pet.owner().map(String::from),
        }
    }
}

/// FFI-safe task. Timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiTask {
    pub id: u64,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub completed_at: Option<String>,
    pub assigned_to: Option<String>,
    pub urgent: bool,
}

impl From<&Task> for FfiTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            description: task.description().to_string(),
            status: task.status().to_string(),
            created_at: task.created_at().to_rfc3339(),
            completed_at: task.completed_at().map(|t| t.to_rfc3339()),
            assigned_to: task.assigned_to().map(String::from),
            urgent: task.is_urgent(),
        }
    }
}

/// FFI-safe consultation.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiConsultation {
    pub id: u64,
    pub client_id: String,
    pub pet_name: String,
    pub veterinarian_id: String,
    pub treatment: String,
    pub diagnosis: String,
    pub created_at: String,
}

impl From<&Consultation> for FfiConsultation {
    fn from(consultation: &Consultation) -> Self {
        Self {
            id: consultation.id().value(),
            client_id: consultation.client_id().to_string(),
            pet_name: consultation.pet().name.clone(),
            veterinarian_id: consultation.veterinarian_id().to_string(),
            treatment: consultation.treatment().to_string(),
            diagnosis: consultation.diagnosis().to_string(),
            created_at: consultation.created_at().to_rfc3339(),
        }
    }
}
