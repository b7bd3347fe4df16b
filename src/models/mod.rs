// AnimalDex records - wire shapes of the remote API plus the in-memory canvas records

pub mod animal;
pub mod conservation;
pub mod ecosystem;
pub mod habitat;
mod nullable;

pub use animal::{Animal, AnimalSummary, ConservationStatus};
pub use conservation::{ConservationEffort, Solution};
pub use ecosystem::{EcosystemAnimal, Relationship, RelationshipType};
pub use habitat::HabitatSummary;
