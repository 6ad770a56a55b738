//! Campaign ↔ influencer assignment entities.

pub mod model;

pub use model::{Assignment, AssignmentAck};
