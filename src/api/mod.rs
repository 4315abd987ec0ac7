//! HTTP edge of the service.
//!
//! This layer translates HTTP requests into calls on the
//! [`Shortener`](crate::domain::Shortener) capability and formats responses.
//! Every failure is reported as a bare status code.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access logging and gzip negotiation
//! - [`routes`] - Route configuration and composition
//! - [`writer`] - Response stream wrappers used by the middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod writer;

/// Upper bound on request bodies, before and after decompression.
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;
