//! # promohub-database
//!
//! PostgreSQL connection management, embedded migrations, seed data, and
//! concrete repository implementations for all PromoHub tables.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod transaction;

pub use connection::DatabasePool;
pub use transaction::PgTx;
