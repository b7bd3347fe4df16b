// Core types and primitives shared by the views

pub mod id_generator;
pub mod strong_types;

pub use id_generator::CanvasIdGenerator;
pub use strong_types::{EcosystemId, RelationshipId, SessionId};
