//! End-to-end tests over the clinic entity graph and its FFI wrapper.

use vet_clinic_core::{
    open_clinic, Client, Consultation, DogSize, FfiNewPet, FfiSpecies, Person, Pet, Registry,
    Task, TaskStatus, ValidationError, VetClinicError, Veterinarian,
};

fn juan() -> Client {
    Client::new(Person::new("Juan", "Pérez", "12345678", "555-0123", "juan@email.com").unwrap())
}

fn maria() -> Veterinarian {
    Veterinarian::new(
        Person::new("María", "García", "87654321", "555-0456", "maria@vet.com").unwrap(),
        "Medicina General",
    )
    .unwrap()
}

#[test]
fn test_client_pet_walkthrough() {
    let mut client = juan();
    client
        .attach_pet(Pet::dog("Rex", 3, "Golden Retriever", "Mediano").unwrap())
        .unwrap();

    assert_eq!(client.list_pets().len(), 1);
    let rex = client.find_pet("rex").unwrap();
    assert!(rex.is_dog());
    assert_eq!(rex.owner(), Some("12345678"));

    assert!(client.detach_pet("REX"));
    assert!(client.find_pet("rex").is_none());
    assert!(!client.detach_pet("rex"));
}

#[test]
fn test_duplicate_pet_name_ignores_case() {
    let mut client = juan();
    client.attach_pet(Pet::dog("Rex", 3, "Beagle", "Mediano").unwrap()).unwrap();
    let err = client
        .attach_pet(Pet::cat("rex", 1, "Persa", true).unwrap())
        .unwrap_err();
    assert!(matches!(err, ValidationError::Duplicate { what: "pet", .. }));
    assert_eq!(client.pet_count(), 1);
}

#[test]
fn test_large_dog_canonicalized() {
    let dog = Pet::dog("Max", 5, "Mastín", "grande").unwrap();
    assert_eq!(dog.dog_size(), Some(DogSize::Large));
    assert_eq!(dog.specific_info(), "Size: Grande");
    assert_eq!(dog.make_sound(), "WOOF WOOF");
}

#[test]
fn test_consultation_with_foreign_pet_rejected() {
    let client = juan();
    let mut other = Client::new(
        Person::new("Ana", "Ruiz", "55555555", "555-1111", "ana@email.com").unwrap(),
    );
    other.attach_pet(Pet::dog("Rex", 3, "Beagle", "Mediano").unwrap()).unwrap();

    let err = Consultation::new(&client, other.find_pet("Rex").unwrap(), &maria(), "Control", "Sano")
        .unwrap_err();
    assert!(matches!(err, ValidationError::Referential(_)));
}

#[test]
fn test_task_completion_stamp_toggles() {
    let mut task = Task::new("Actualizar expedientes").unwrap();
    task.set_status("Completada".parse().unwrap());
    assert!(task.completed_at().is_some());

    task.set_status("Pendiente".parse().unwrap());
    assert!(task.completed_at().is_none());
    assert_eq!(task.status(), TaskStatus::Pending);
}

#[test]
fn test_ids_strictly_increase_across_owners() {
    let ids: Vec<_> = (0..5)
        .map(|i| Task::new(&format!("Tarea {}", i)).unwrap().id())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let client = {
        let mut c = juan();
        c.attach_pet(Pet::cat("Miau", 2, "Persa", true).unwrap()).unwrap();
        c
    };
    let vet = maria();
    let miau = client.find_pet("Miau").unwrap();
    let first = Consultation::new(&client, miau, &vet, "Control", "Sano").unwrap();
    let second = Consultation::new(&client, miau, &vet, "Control", "Sano").unwrap();
    assert!(second.id() > first.id());
}

#[test]
fn test_pet_rename_collision_rolls_back() {
    let mut client = juan();
    client.attach_pet(Pet::dog("Rex", 3, "Beagle", "Mediano").unwrap()).unwrap();
    client.attach_pet(Pet::cat("Miau", 2, "Persa", true).unwrap()).unwrap();

    let err = client
        .modify_pet("miau", |pet| pet.set_name("REX"))
        .unwrap_err();
    assert!(matches!(err, ValidationError::Duplicate { .. }));
    assert!(client.find_pet("Miau").is_some());

    assert!(client.modify_pet("miau", |pet| pet.set_age(3)).unwrap());
    assert_eq!(client.find_pet("Miau").unwrap().age(), 3);
    assert!(!client.modify_pet("Firulais", |pet| pet.set_age(1)).unwrap());
}

#[test]
fn test_registry_consultation_queries() {
    let mut registry = Registry::new();
    let mut client = juan();
    client.attach_pet(Pet::dog("Rex", 3, "Golden Retriever", "Mediano").unwrap()).unwrap();
    client.attach_pet(Pet::cat("Miau", 2, "Persa", true).unwrap()).unwrap();
    registry.add_client(client);
    registry.add_veterinarian(maria());

    registry
        .record_consultation("12345678", "Rex", "87654321", "Vacunación anual", "Animal saludable")
        .unwrap();
    registry
        .record_consultation("12345678", "miau", "87654321", "Desparasitación", "Sano")
        .unwrap();

    let client = registry.find_client("12345678").unwrap();
    let vet = registry.find_veterinarian("87654321").unwrap();
    assert_eq!(vet.consultations_by_client(client).len(), 2);

    let for_miau = vet.consultations_by_pet(client.find_pet("Miau").unwrap());
    assert_eq!(for_miau.len(), 1);
    assert_eq!(for_miau[0].treatment(), "Desparasitación");
}

#[test]
fn test_ffi_surface() {
    let clinic = open_clinic();
    let client = clinic
        .add_client(
            "Juan".into(),
            "Pérez".into(),
            "12345678".into(),
            "555-0123".into(),
            "juan@email.com".into(),
        )
        .unwrap();
    assert_eq!(client.kind, "Client");
    assert_eq!(client.role, None);

    clinic
        .add_veterinarian(
            "María".into(),
            "García".into(),
            "87654321".into(),
            "555-0456".into(),
            "maria@vet.com".into(),
            "Medicina General".into(),
        )
        .unwrap();
    clinic
        .add_administrator(
            "Carlos".into(),
            "López".into(),
            "11223344".into(),
            "555-0789".into(),
            "carlos@admin.com".into(),
            "Recepción".into(),
        )
        .unwrap();

    let rex = clinic
        .attach_pet(
            "12345678".into(),
            FfiNewPet {
                name: "Rex".into(),
                age: 3,
                breed: "Golden Retriever".into(),
                species: FfiSpecies::Dog {
                    size: "grande".into(),
                },
            },
        )
        .unwrap();
    assert_eq!(rex.species, FfiSpecies::Dog { size: "Grande".into() });
    assert_eq!(rex.owner.as_deref(), Some("12345678"));

    let found = clinic
        .find_by_national_id("veterinario".into(), "87654321".into())
        .unwrap()
        .unwrap();
    assert_eq!(found.role.as_deref(), Some("Medicina General"));
    assert!(clinic
        .find_by_national_id("Client".into(), "87654321".into())
        .unwrap()
        .is_none());

    let task = clinic
        .attach_task("11223344".into(), "Actualizar expedientes".into(), None)
        .unwrap();
    assert_eq!(task.status, "Pendiente");
    assert_eq!(task.assigned_to.as_deref(), Some("11223344"));
    assert!(clinic
        .complete_task("11223344".into(), "actualizar EXPEDIENTES".into())
        .unwrap());
    let done = clinic
        .tasks_by_status("11223344".into(), "completada".into())
        .unwrap();
    assert_eq!(done.len(), 1);
    assert!(done[0].completed_at.is_some());

    let consultation = clinic
        .record_consultation(
            "12345678".into(),
            "rex".into(),
            "87654321".into(),
            "Vacunación anual".into(),
            "Animal saludable".into(),
        )
        .unwrap();
    assert_eq!(consultation.pet_name, "Rex");
    assert_eq!(
        clinic
            .consultations_by_pet("87654321".into(), "12345678".into(), "REX".into())
            .unwrap(),
        vec![consultation]
    );

    let summary: serde_json::Value = serde_json::from_str(&clinic.summary_json().unwrap()).unwrap();
    assert_eq!(summary["dogs"], 1);
    assert_eq!(summary["tasks"]["completed"], 1);
    assert_eq!(clinic.with_registry(|r| r.consultation_count()).unwrap(), 1);
}

#[test]
fn test_ffi_errors() {
    let clinic = open_clinic();
    assert!(matches!(
        clinic.list_pets("0".into()),
        Err(VetClinicError::NotFound(_))
    ));
    assert!(matches!(
        clinic.add_client("".into(), "Pérez".into(), "1".into(), "2".into(), "a@b.c".into()),
        Err(VetClinicError::Validation(_))
    ));
    assert!(matches!(
        clinic.find_by_national_id("dentist".into(), "1".into()),
        Err(VetClinicError::Validation(_))
    ));
    assert!(matches!(
        clinic.record_consultation("1".into(), "Rex".into(), "2".into(), "T".into(), "D".into()),
        Err(VetClinicError::Validation(_))
    ));
}
