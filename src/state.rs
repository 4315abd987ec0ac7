//! Shared handler state.

use std::sync::Arc;

use crate::domain::{ConnectionProbe, Shortener};

/// Capabilities injected into every handler.
///
/// Cloned per request; the capabilities themselves are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<dyn Shortener>,
    pub probe: Arc<dyn ConnectionProbe>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, probe: Arc<dyn ConnectionProbe>) -> Self {
        Self { shortener, probe }
    }
}
