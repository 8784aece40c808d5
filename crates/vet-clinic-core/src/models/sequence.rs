//! Process-wide sequential id counters for tasks and consultations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Monotonic counter handing out ids 1, 2, 3, ...
///
/// The process statics [`TASK_IDS`] and [`CONSULTATION_IDS`] live for the
/// whole run and are never reset. Tests that need a predictable sequence
/// create their own `IdSequence` and pass it to the `with_sequence`
/// constructors.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    /// Create a sequence whose first id will be 1.
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Draw the next id.
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// How many ids have been handed out so far.
    pub fn issued(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }

    /// Start over from 1. Only meaningful for sequences the caller owns.
    pub fn reset(&self) {
        self.last.store(0, Ordering::SeqCst);
    }
}

/// Counter shared by every [`Task`](super::Task) in the process.
pub static TASK_IDS: IdSequence = IdSequence::new();

/// Counter shared by every [`Consultation`](super::Consultation) in the process.
pub static CONSULTATION_IDS: IdSequence = IdSequence::new();

/// Sequential task id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Sequential consultation id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConsultationId(pub u64);

impl TaskId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl ConsultationId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ConsultationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let seq = IdSequence::new();
        assert_eq!(seq.issued(), 0);
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn test_reset() {
        let seq = IdSequence::new();
        seq.next_id();
        seq.next_id();
        seq.reset();
        assert_eq!(seq.next_id(), 1);
    }

    #[test]
    fn test_shared_sequence_across_threads() {
        let seq = std::sync::Arc::new(IdSequence::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = seq.clone();
                std::thread::spawn(move || (0..100).map(|_| seq.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();

        // No id is ever handed out twice
        assert_eq!(all.len(), 400);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&400));
    }

    #[test]
    fn test_global_sequence_is_monotonic() {
        let a = TASK_IDS.next_id();
        let b = TASK_IDS.next_id();
        assert!(b > a);
        assert!(TASK_IDS.issued() >= b);
    }
}
