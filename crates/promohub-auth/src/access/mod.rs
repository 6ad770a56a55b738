//! Per-procedure authentication requirements.

pub mod policy;
pub mod procedure;

pub use policy::AccessPolicy;
pub use procedure::Procedure;
