//! Clients and the pets they own.

use serde::Serialize;

use super::ownership::Owned;
use super::person::{Person, PersonKind, Personal};
use super::pet::Pet;
use super::validation::ValidationResult;

/// A clinic client. Owns its pets; pet names are unique per client,
/// ignoring case.
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    #[serde(flatten)]
    person: Person,
    pets: Owned<Pet>,
}

impl Client {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            pets: Owned::new(),
        }
    }

    /// Attach `pet`, pointing its owner back-reference at this client.
    pub fn attach_pet(&mut self, pet: Pet) -> ValidationResult<()> {
        let owner = self.person.national_id().to_string();
        self.pets.attach(&owner, pet)
    }

    /// Remove the pet named `name`; it keeps its owner back-reference.
    pub fn remove_pet(&mut self, name: &str) -> Option<Pet> {
        self.pets.remove(name)
    }

    pub fn detach_pet(&mut self, name: &str) -> bool {
        self.pets.detach(name)
    }

    pub fn find_pet(&self, name: &str) -> Option<&Pet> {
        self.pets.find(name)
    }

    /// Edit a pet in place; renames that would collide are rolled back.
    pub fn modify_pet<F>(&mut self, name: &str, f: F) -> ValidationResult<bool>
    where
        F: FnOnce(&mut Pet) -> ValidationResult<()>,
    {
        self.pets.modify(name, f)
    }

    pub fn pets(&self) -> &[Pet] {
        self.pets.as_slice()
    }

    /// Owned copy of the pets in attachment order.
    pub fn list_pets(&self) -> Vec<Pet> {
        self.pets.to_vec()
    }

    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }

    pub fn has_pets(&self) -> bool {
        !self.pets.is_empty()
    }

    /// Whether `pet` is one of this client's pets.
    pub fn owns(&self, pet: &Pet) -> bool {
        self.pets.iter().any(|p| p == pet)
    }
}

impl Personal for Client {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Client
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Client {}
