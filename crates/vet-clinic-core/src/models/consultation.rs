//! Veterinary consultations linking a client, one of its pets and a vet.

use chrono::{DateTime, Duration, Local, Utc};
use serde::Serialize;

use super::client::Client;
use super::person::Personal;
use super::pet::{Pet, PetRef};
use super::sequence::{ConsultationId, IdSequence, CONSULTATION_IDS};
use super::staff::Veterinarian;
use super::validation::{require_text, ValidationError, ValidationResult};

/// A consultation record.
///
/// Holds non-owning references (national ids and a [`PetRef`]) to the
/// client, pet and veterinarian involved. Equality is by id.
#[derive(Debug, Clone, Serialize)]
pub struct Consultation {
    id: ConsultationId,
    client_id: String,
    pet: PetRef,
    veterinarian_id: String,
    treatment: String,
    diagnosis: String,
    created_at: DateTime<Utc>,
}

fn check_pet_belongs(client: &Client, pet: &Pet) -> ValidationResult<()> {
    if !client.owns(pet) {
        return Err(ValidationError::Referential(format!(
            "pet {:?} does not belong to client {}",
            pet.name(),
            client.national_id()
        )));
    }
    Ok(())
}

impl Consultation {
    /// Create a consultation, drawing its id from [`CONSULTATION_IDS`].
    ///
    /// `pet` must currently be one of `client`'s pets.
    pub fn new(
        client: &Client,
        pet: &Pet,
        veterinarian: &Veterinarian,
        treatment: &str,
        diagnosis: &str,
    ) -> ValidationResult<Self> {
        Self::with_sequence(&CONSULTATION_IDS, client, pet, veterinarian, treatment, diagnosis)
    }

    /// Create a consultation drawing its id from `sequence`.
    pub fn with_sequence(
        sequence: &IdSequence,
        client: &Client,
        pet: &Pet,
        veterinarian: &Veterinarian,
        treatment: &str,
        diagnosis: &str,
    ) -> ValidationResult<Self> {
        check_pet_belongs(client, pet)?;
        let treatment = require_text("Treatment", treatment)?;
        let diagnosis = require_text("Diagnosis", diagnosis)?;

        Ok(Self {
            id: ConsultationId(sequence.next_id()),
            client_id: client.national_id().to_string(),
            pet: PetRef::from(pet),
            veterinarian_id: veterinarian.national_id().to_string(),
            treatment,
            diagnosis,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> ConsultationId {
        self.id
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn pet(&self) -> &PetRef {
        &self.pet
    }

    pub fn veterinarian_id(&self) -> &str {
        &self.veterinarian_id
    }

    pub fn treatment(&self) -> &str {
        &self.treatment
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reassign the client. The current pet must belong to the new client.
    pub fn set_client(&mut self, client: &Client) -> ValidationResult<()> {
        if !client.pets().iter().any(|p| self.pet.matches(p)) {
            return Err(ValidationError::Referential(format!(
                "pet {:?} does not belong to client {}",
                self.pet.name,
                client.national_id()
            )));
        }
        self.client_id = client.national_id().to_string();
        Ok(())
    }

    /// Replace the pet. `client` must be this consultation's client.
    pub fn set_pet(&mut self, client: &Client, pet: &Pet) -> ValidationResult<()> {
        if client.national_id() != self.client_id {
            return Err(ValidationError::Referential(format!(
                "client {} is not the client of consultation {}",
                client.national_id(),
                self.id
            )));
        }
        check_pet_belongs(client, pet)?;
        self.pet = PetRef::from(pet);
        Ok(())
    }

    pub fn set_veterinarian(&mut self, veterinarian: &Veterinarian) {
        self.veterinarian_id = veterinarian.national_id().to_string();
    }

    pub fn set_treatment(&mut self, value: &str) -> ValidationResult<()> {
        self.treatment = require_text("Treatment", value)?;
        Ok(())
    }

    pub fn set_diagnosis(&mut self, value: &str) -> ValidationResult<()> {
        self.diagnosis = require_text("Diagnosis", value)?;
        Ok(())
    }

    pub fn is_recent_at(&self, now: DateTime<Utc>) -> bool {
        self.created_at > now - Duration::days(1)
    }

    /// Created within the last 24 hours.
    pub fn is_recent(&self) -> bool {
        self.is_recent_at(Utc::now())
    }

    pub fn is_today_at(&self, now: DateTime<Utc>) -> bool {
        self.created_at.with_timezone(&Local).date_naive() == now.with_timezone(&Local).date_naive()
    }

    /// Created on the current local calendar date.
    pub fn is_today(&self) -> bool {
        self.is_today_at(Utc::now())
    }
}

impl PartialEq for Consultation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Consultation {}
