//! Property tests for canonicalization and id sequences.

use proptest::prelude::*;
use vet_clinic_core::{DogSize, IdSequence, Person, Pet, Task, TaskStatus};

fn dog_size() -> impl Strategy<Value = DogSize> {
    prop_oneof![
        Just(DogSize::Small),
        Just(DogSize::Medium),
        Just(DogSize::Large)
    ]
}

fn task_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed)
    ]
}

/// Upper- or lowercase each character according to the bits of `mask`.
fn scramble_case(label: &str, mask: u64) -> String {
    label
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 64)) != 0 {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_lowercase().collect::<String>()
            }
        })
        .collect()
}

proptest! {
    /// Property: parsing a canonical size label is a no-op
    #[test]
    fn test_dog_size_canonical_idempotent(size in dog_size(), mask in any::<u64>(), pad in 0usize..3) {
        let input = format!("{}{}{}", " ".repeat(pad), scramble_case(size.as_str(), mask), " ".repeat(pad));
        let parsed: DogSize = input.parse().unwrap();
        prop_assert_eq!(parsed, size);
        prop_assert_eq!(parsed.as_str().parse::<DogSize>().unwrap(), parsed);
    }

    /// Property: parsing a canonical status label is a no-op
    #[test]
    fn test_task_status_canonical_idempotent(status in task_status(), mask in any::<u64>()) {
        let parsed: TaskStatus = scramble_case(status.as_str(), mask).parse().unwrap();
        prop_assert_eq!(parsed, status);
        prop_assert_eq!(parsed.to_string().parse::<TaskStatus>().unwrap(), parsed);
    }

    /// Property: completed_at is set exactly while the status is Completed
    #[test]
    fn test_completed_at_tracks_status(steps in prop::collection::vec(task_status(), 1..20)) {
        let seq = IdSequence::new();
        let mut task = Task::with_sequence(&seq, "Inventario", TaskStatus::Pending).unwrap();
        for status in steps {
            task.set_status(status);
            prop_assert_eq!(task.completed_at().is_some(), task.is_completed());
        }
    }

    /// Property: getters return the trimmed input
    #[test]
    fn test_person_getters_trimmed(first in "[A-Za-zÁÉÍÓÚñ]{1,12}", pad in 0usize..4) {
        let padded = format!("{}{}{}", " ".repeat(pad), first, " ".repeat(pad));
        let person = Person::new(&padded, "García", "1", "555", "a@b.c").unwrap();
        prop_assert_eq!(person.first_name(), first.as_str());

        let pet = Pet::cat(&padded, 1, &padded, true).unwrap();
        prop_assert_eq!(pet.name(), first.as_str());
        prop_assert_eq!(pet.breed(), first.as_str());
    }

    /// Property: ages outside 0..=30 are rejected, inside accepted
    #[test]
    fn test_age_range(age in -100i64..100) {
        let pet = Pet::dog("Rex", age, "Beagle", "Mediano");
        prop_assert_eq!(pet.is_ok(), (0..=30).contains(&age));
    }

    /// Property: a private sequence hands out 1..=n with no gaps
    #[test]
    fn test_sequence_contiguous(n in 1usize..200) {
        let seq = IdSequence::new();
        let ids: Vec<u64> = (0..n).map(|_| seq.next_id()).collect();
        prop_assert_eq!(ids, (1..=n as u64).collect::<Vec<_>>());
        prop_assert_eq!(seq.issued(), n as u64);
    }
}
