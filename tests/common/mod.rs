#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};
use std::sync::{Arc, Mutex};
use url_shortener_edge::prelude::*;

/// Shortener returning scripted results and recording every input.
pub struct StubShortener {
    short_url: Option<String>,
    original_url: Option<String>,
    received: Mutex<Vec<String>>,
}

impl StubShortener {
    pub fn shortening_to(short_url: &str) -> Self {
        Self {
            short_url: Some(short_url.to_string()),
            original_url: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn resolving_to(original_url: &str) -> Self {
        Self {
            short_url: None,
            original_url: Some(original_url.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            short_url: None,
            original_url: None,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl Shortener for StubShortener {
    async fn shorten(&self, original_url: &str) -> Result<String, ShortenerError> {
        self.received.lock().unwrap().push(original_url.to_string());
        self.short_url
            .clone()
            .ok_or_else(|| ShortenerError::Storage("scripted failure".to_string()))
    }

    async fn resolve(&self, short_code: &str) -> Result<String, ShortenerError> {
        self.received.lock().unwrap().push(short_code.to_string());
        self.original_url
            .clone()
            .ok_or_else(|| ShortenerError::NotFound(short_code.to_string()))
    }
}

/// Probe with a fixed answer.
pub struct StubProbe {
    healthy: bool,
}

impl StubProbe {
    pub fn healthy() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl ConnectionProbe for StubProbe {
    async fn ping(&self) -> Result<(), ProbeError> {
        if self.healthy {
            Ok(())
        } else {
            Err(ProbeError::Connect("connection refused".to_string()))
        }
    }
}

/// Access logger keeping records in memory.
#[derive(Default)]
pub struct CapturingLogger {
    records: Mutex<Vec<AccessRecord>>,
}

impl CapturingLogger {
    pub fn records(&self) -> Vec<AccessRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl AccessLogger for CapturingLogger {
    fn log(&self, record: &AccessRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

/// Full router backed by the given collaborators.
pub fn create_test_server(
    shortener: Arc<dyn Shortener>,
    probe: Arc<dyn ConnectionProbe>,
) -> (TestServer, Arc<CapturingLogger>) {
    let logger = Arc::new(CapturingLogger::default());
    let state = AppState::new(shortener, probe);

    let app = router(state, logger.clone());
    (TestServer::new(app).unwrap(), logger)
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn gunzip(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}
