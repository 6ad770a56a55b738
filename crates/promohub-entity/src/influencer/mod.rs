//! Influencer domain entities.

pub mod model;

pub use model::{CreateInfluencer, Influencer};
