//! Top-level registry of clients, veterinarians and administrators.

use crate::models::{
    Administrator, Client, Consultation, ConsultationId, Person, PersonKind, Personal,
    ValidationError, ValidationResult, Veterinarian,
};

/// Borrowed view of any registered person.
#[derive(Debug, Clone, Copy)]
pub enum PersonRef<'a> {
    Client(&'a Client),
    Veterinarian(&'a Veterinarian),
    Administrator(&'a Administrator),
}

impl<'a> PersonRef<'a> {
    pub fn person(&self) -> &'a Person {
        match *self {
            PersonRef::Client(c) => c.person(),
            PersonRef::Veterinarian(v) => v.person(),
            PersonRef::Administrator(a) => a.person(),
        }
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            PersonRef::Client(_) => PersonKind::Client,
            PersonRef::Veterinarian(_) => PersonKind::Veterinarian,
            PersonRef::Administrator(_) => PersonKind::Administrator,
        }
    }
}

/// In-memory registry keyed by national id, in insertion order.
///
/// Adding a person whose national id is already registered replaces the
/// earlier entry in place and hands it back.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    clients: Vec<Client>,
    veterinarians: Vec<Veterinarian>,
    administrators: Vec<Administrator>,
}

fn upsert<T: Personal>(entries: &mut Vec<T>, entry: T) -> Option<T> {
    match entries
        .iter()
        .position(|e| e.national_id() == entry.national_id())
    {
        Some(index) => {
            tracing::warn!(
                kind = %entry.kind(),
                national_id = entry.national_id(),
                "national id already registered, replacing previous entry"
            );
            Some(std::mem::replace(&mut entries[index], entry))
        }
        None => {
            tracing::debug!(kind = %entry.kind(), national_id = entry.national_id(), "registered");
            entries.push(entry);
            None
        }
    }
}

fn lookup<'a, T: Personal>(entries: &'a [T], national_id: &str) -> Option<&'a T> {
    let national_id = national_id.trim();
    entries.iter().find(|e| e.national_id() == national_id)
}

fn lookup_mut<'a, T: Personal>(entries: &'a mut [T], national_id: &str) -> Option<&'a mut T> {
    let national_id = national_id.trim();
    entries.iter_mut().find(|e| e.national_id() == national_id)
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client; returns the entry it replaced, if any.
    pub fn add_client(&mut self, client: Client) -> Option<Client> {
        upsert(&mut self.clients, client)
    }

    pub fn add_veterinarian(&mut self, veterinarian: Veterinarian) -> Option<Veterinarian> {
        upsert(&mut self.veterinarians, veterinarian)
    }

    pub fn add_administrator(&mut self, administrator: Administrator) -> Option<Administrator> {
        upsert(&mut self.administrators, administrator)
    }

    pub fn find_client(&self, national_id: &str) -> Option<&Client> {
        lookup(&self.clients, national_id)
    }

    pub fn find_client_mut(&mut self, national_id: &str) -> Option<&mut Client> {
        lookup_mut(&mut self.clients, national_id)
    }

    pub fn find_veterinarian(&self, national_id: &str) -> Option<&Veterinarian> {
        lookup(&self.veterinarians, national_id)
    }

    pub fn find_veterinarian_mut(&mut self, national_id: &str) -> Option<&mut Veterinarian> {
        lookup_mut(&mut self.veterinarians, national_id)
    }

    pub fn find_administrator(&self, national_id: &str) -> Option<&Administrator> {
        lookup(&self.administrators, national_id)
    }

    pub fn find_administrator_mut(&mut self, national_id: &str) -> Option<&mut Administrator> {
        lookup_mut(&mut self.administrators, national_id)
    }

    /// Look up a person of the given kind. Absence is `None`, never an error.
    pub fn find_by_national_id(&self, kind: PersonKind, national_id: &str) -> Option<PersonRef<'_>> {
        match kind {
            PersonKind::Client => self.find_client(national_id).map(PersonRef::Client),
            PersonKind::Veterinarian => self
                .find_veterinarian(national_id)
                .map(PersonRef::Veterinarian),
            PersonKind::Administrator => self
                .find_administrator(national_id)
                .map(PersonRef::Administrator),
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn veterinarians(&self) -> &[Veterinarian] {
        &self.veterinarians
    }

    pub fn administrators(&self) -> &[Administrator] {
        &self.administrators
    }

    /// Build a consultation from registered entities and attach it to the
    /// veterinarian. Unknown ids are reported as [`ValidationError::Missing`].
    pub fn record_consultation(
        &mut self,
        client_id: &str,
        pet_name: &str,
        veterinarian_id: &str,
        treatment: &str,
        diagnosis: &str,
    ) -> ValidationResult<ConsultationId> {
        let client = lookup(&self.clients, client_id).ok_or(ValidationError::Missing { field: "client" })?;
        let pet = client
            .find_pet(pet_name)
            .ok_or(ValidationError::Missing { field: "pet" })?;
        let veterinarian = lookup_mut(&mut self.veterinarians, veterinarian_id)
            .ok_or(ValidationError::Missing { field: "veterinarian" })?;

        let consultation = Consultation::new(client, pet, veterinarian, treatment, diagnosis)?;
        let id = consultation.id();
        veterinarian.attach_consultation(consultation)?;

        tracing::info!(
            consultation = id.value(),
            client = client.national_id(),
            pet = pet.name(),
            veterinarian = veterinarian.national_id(),
            "consultation recorded"
        );
        Ok(id)
    }

    /// Consultations across every veterinarian, in registration order.
    pub fn consultations(&self) -> impl Iterator<Item = &Consultation> {
        self.veterinarians.iter().flat_map(|v| v.consultations())
    }

    pub fn pet_count(&self) -> usize {
        self.clients.iter().map(Client::pet_count).sum()
    }

    pub fn task_count(&self) -> usize {
        self.administrators.iter().map(Administrator::task_count).sum()
    }

    pub fn consultation_count(&self) -> usize {
        self.veterinarians
            .iter()
            .map(Veterinarian::consultation_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pet;

    fn person(first: &str, id: &str) -> Person {
        Person::new(first, "Test", id, "555-0000", "test@clinic.com").unwrap()
    }

    fn seeded() -> Registry {
        let mut registry = Registry::new();
        let mut client = Client::new(person("Juan", "12345678"));
        client.attach_pet(Pet::dog("Rex", 3, "Golden Retriever", "Mediano").unwrap()).unwrap();
        registry.add_client(client);
        registry.add_veterinarian(Veterinarian::new(person("María", "87654321"), "Medicina General").unwrap());
        registry.add_administrator(Administrator::new(person("Carlos", "11223344"), "Recepción").unwrap());
        registry
    }

    #[test]
    fn test_find_by_kind() {
        let registry = seeded();
        let found = registry
            .find_by_national_id(PersonKind::Veterinarian, "87654321")
            .unwrap();
        assert_eq!(found.kind(), PersonKind::Veterinarian);
        assert_eq!(found.person().first_name(), "María");

        // Same id under another kind is absent
        assert!(registry.find_by_national_id(PersonKind::Client, "87654321").is_none());
        assert!(registry.find_by_national_id(PersonKind::Client, "00000000").is_none());
    }

    #[test]
    fn test_duplicate_id_overwrites_in_place() {
        let mut registry = seeded();
        registry.add_client(Client::new(person("Ana", "55555555")));

        let previous = registry.add_client(Client::new(person("Otro", "12345678")));
        let previous = previous.unwrap();
        assert_eq!(previous.person().first_name(), "Juan");
        assert_eq!(previous.pet_count(), 1);

        assert_eq!(registry.clients().len(), 2);
        assert_eq!(registry.clients()[0].person().first_name(), "Otro");
        assert_eq!(registry.find_client("12345678").unwrap().pet_count(), 0);
    }

    #[test]
    fn test_record_consultation() {
        let mut registry = seeded();
        let id = registry
            .record_consultation("12345678", "rex", "87654321", "Vacunación anual", "Animal saludable")
            .unwrap();

        let vet = registry.find_veterinarian("87654321").unwrap();
        assert_eq!(vet.consultation_count(), 1);
        assert_eq!(vet.consultations()[0].id(), id);
        assert_eq!(registry.consultation_count(), 1);
        assert_eq!(registry.consultations().count(), 1);
    }

    #[test]
    fn test_record_consultation_missing_references() {
        let mut registry = seeded();
        assert_eq!(
            registry.record_consultation("0", "Rex", "87654321", "T", "D"),
            Err(ValidationError::Missing { field: "client" })
        );
        assert_eq!(
            registry.record_consultation("12345678", "Firulais", "87654321", "T", "D"),
            Err(ValidationError::Missing { field: "pet" })
        );
        assert_eq!(
            registry.record_consultation("12345678", "Rex", "0", "T", "D"),
            Err(ValidationError::Missing { field: "veterinarian" })
        );
        assert_eq!(registry.consultation_count(), 0);
    }

    #[test]
    fn test_mutation_through_registry() {
        let mut registry = seeded();
        registry
            .find_client_mut("12345678")
            .unwrap()
            .attach_pet(Pet::cat("Miau", 2, "Persa", true).unwrap())
            .unwrap();
        assert_eq!(registry.pet_count(), 2);

        let admin = registry.find_administrator_mut("11223344").unwrap();
        admin.attach_task(crate::models::Task::new("Actualizar expedientes").unwrap()).unwrap();
        assert_eq!(registry.task_count(), 1);
    }
}
