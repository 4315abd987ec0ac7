//! HTTP middleware wrapping every request.
//!
//! Applied outermost first: [`access_log`] then [`compression`], so the
//! access log observes the bytes that actually leave the service.

pub mod access_log;
pub mod compression;
