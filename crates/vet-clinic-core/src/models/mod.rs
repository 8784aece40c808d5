//! Domain models for the vet-clinic system.

mod client;
mod consultation;
mod ownership;
mod person;
mod pet;
mod sequence;
mod staff;
mod task;
mod validation;

pub use client::*;
pub use consultation::*;
pub(crate) use ownership::{Owned, OwnedItem};
pub use person::*;
pub use pet::*;
pub use sequence::*;
pub use staff::*;
pub use task::*;
pub use validation::*;
