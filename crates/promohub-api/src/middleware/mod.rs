//! Request middleware.

pub mod cors;
pub mod identity;
pub mod logging;
