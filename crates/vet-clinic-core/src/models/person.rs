//! Person-like records shared by clients and staff.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{require_email, require_text, same_text, ValidationError, ValidationResult};

/// Which kind of person a record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    Client,
    Veterinarian,
    Administrator,
}

impl PersonKind {
    /// Fixed display tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Client => "Client",
            PersonKind::Veterinarian => "Veterinarian",
            PersonKind::Administrator => "Administrator",
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let kind = [
            ("client", PersonKind::Client),
            ("cliente", PersonKind::Client),
            ("veterinarian", PersonKind::Veterinarian),
            ("veterinario", PersonKind::Veterinarian),
            ("vet", PersonKind::Veterinarian),
            ("administrator", PersonKind::Administrator),
            ("administrativo", PersonKind::Administrator),
            ("admin", PersonKind::Administrator),
        ]
        .into_iter()
        .find(|(label, _)| same_text(label, value))
        .map(|(_, kind)| kind);

        kind.ok_or_else(|| ValidationError::InvalidValue {
            field: "person kind",
            value: value.to_string(),
            expected: "Client, Veterinarian, Administrator",
        })
    }
}

/// Contact details common to every person in the clinic.
///
/// Equality and hashing use only `national_id`; two records with the same
/// id are the same person even if other fields differ.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    national_id: String,
    phone: String,
    email: String,
}

impl Person {
    /// Create a person, trimming and validating every field.
    pub fn new(
        first_name: &str,
        last_name: &str,
        national_id: &str,
        phone: &str,
        email: &str,
    ) -> ValidationResult<Self> {
        Ok(Self {
            first_name: require_text("First name", first_name)?,
            last_name: require_text("Last name", last_name)?,
            national_id: require_text("National id", national_id)?,
            phone: require_text("Phone", phone)?,
            email: require_email(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_first_name(&mut self, value: &str) -> ValidationResult<()> {
        self.first_name = require_text("First name", value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> ValidationResult<()> {
        self.last_name = require_text("Last name", value)?;
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) -> ValidationResult<()> {
        self.phone = require_text("Phone", value)?;
        Ok(())
    }

    pub fn set_email(&mut self, value: &str) -> ValidationResult<()> {
        self.email = require_email(value)?;
        Ok(())
    }

    /// `first_name + " " + last_name`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.national_id == other.national_id
    }
}

impl Eq for Person {}

impl std::hash::Hash for Person {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.national_id.hash(state);
    }
}

/// Capability shared by clients, veterinarians and administrators.
pub trait Personal {
    fn person(&self) -> &Person;

    fn person_mut(&mut self) -> &mut Person;

    fn kind(&self) -> PersonKind;

    fn national_id(&self) -> &str {
        self.person().national_id()
    }

    fn full_name(&self) -> String {
        self.person().full_name()
    }
}
