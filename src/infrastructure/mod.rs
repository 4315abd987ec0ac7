//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the capabilities declared in [`crate::domain`].
//!
//! # Modules
//!
//! - [`memory_shortener`] - In-process short link store
//! - [`pg_probe`] - PostgreSQL connectivity probe for the health check

pub mod memory_shortener;
pub mod pg_probe;

pub use memory_shortener::MemoryShortener;
pub use pg_probe::PgProbe;
