//! Utility functions used by handlers and collaborators.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Absolute URL validation

pub mod code_generator;
pub mod url_validator;
