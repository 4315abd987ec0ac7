//! Domain layer: the capabilities the HTTP edge depends on.
//!
//! The edge layer never shortens or stores anything itself. It consumes two
//! opaque capabilities defined here and implemented in
//! [`crate::infrastructure`] (or by test stubs):
//!
//! - [`shortener::Shortener`] - `shorten(original) -> short URL`, `resolve(code) -> original`
//! - [`probe::ConnectionProbe`] - "can a connection be opened against the configured DSN"
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the web framework or database driver
//! - Handlers hold the capabilities as trait objects, so any concrete store can
//!   be plugged in and the edge layer can be tested with scripted results

pub mod probe;
pub mod shortener;

pub use probe::{ConnectionProbe, ProbeError};
pub use shortener::{Shortener, ShortenerError};
