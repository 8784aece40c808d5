//! Process-wide id counters. Kept in its own test binary so nothing else
//! draws from the statics first.

use std::thread;

use vet_clinic_core::models::{CONSULTATION_IDS, TASK_IDS};
use vet_clinic_core::{
    open_clinic, Client, Consultation, ConsultationId, Person, Pet, Task, TaskId, Veterinarian,
};

#[test]
fn test_process_counters_start_at_one_and_never_repeat() {
    assert_eq!(TASK_IDS.issued(), 0);
    assert_eq!(CONSULTATION_IDS.issued(), 0);

    // A failed construction draws nothing
    assert!(Task::new("   ").is_err());
    assert_eq!(Task::new("Primera").unwrap().id(), TaskId(1));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            thread::spawn(move || {
                (0..25)
                    .map(|i| Task::new(&format!("Tarea {}-{}", t, i)).unwrap().id().value())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (2..=101).collect::<Vec<_>>());

    let mut client = Client::new(
        Person::new("Juan", "Pérez", "12345678", "555-0123", "juan@email.com").unwrap(),
    );
    client.attach_pet(Pet::dog("Rex", 3, "Beagle", "Mediano").unwrap()).unwrap();
    let vet = Veterinarian::new(
        Person::new("María", "García", "87654321", "555-0456", "maria@vet.com").unwrap(),
        "Medicina General",
    )
    .unwrap();
    let rex = client.find_pet("Rex").unwrap();
    let first = Consultation::new(&client, rex, &vet, "Control", "Sano").unwrap();
    let second = Consultation::new(&client, rex, &vet, "Control", "Sano").unwrap();
    assert_eq!(first.id(), ConsultationId(1));
    assert_eq!(second.id(), ConsultationId(2));

    // A duplicate rejected through the FFI object draws no task id
    let clinic = open_clinic();
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
    let task = clinic
        .attach_task("11223344".into(), "Inventario".into(), None)
        .unwrap();
    assert_eq!(task.id, 102);
    assert!(clinic
        .attach_task("11223344".into(), " INVENTARIO ".into(), None)
        .is_err());
    let next = clinic
        .attach_task("11223344".into(), "Facturas".into(), None)
        .unwrap();
    assert_eq!(next.id, 103);
    assert_eq!(TASK_IDS.issued(), 103);
}
