//! In-process [`Shortener`] backed by concurrent maps.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::{Shortener, ShortenerError};
use crate::utils::code_generator::generate_code;

/// Attempts at finding an unused code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

type CodeGenerator = fn() -> Result<String, getrandom::Error>;

/// Stores short code mappings in memory for the lifetime of the process.
///
/// Shortening the same URL twice returns the same short URL. Codes are
/// generated randomly and retried on collision.
pub struct MemoryShortener {
    base_url: String,
    by_code: DashMap<String, String>,
    by_url: DashMap<String, String>,
    generate: CodeGenerator,
}

impl MemoryShortener {
    /// Creates an empty store producing short URLs under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_generator(base_url, generate_code)
    }

    /// Creates an empty store with a custom code generator.
    pub fn with_generator(base_url: impl Into<String>, generate: CodeGenerator) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            by_code: DashMap::new(),
            by_url: DashMap::new(),
            generate,
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.by_code.len()
    }

    fn allocate_code(&self, original_url: &str) -> Result<String, ShortenerError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = (self.generate)().map_err(|e| ShortenerError::Storage(e.to_string()))?;

            match self.by_code.entry(code) {
                Entry::Occupied(taken) => {
                    debug!(code = %taken.key(), "Short code collision, retrying");
                }
                Entry::Vacant(slot) => {
                    let code = slot.key().clone();
                    slot.insert(original_url.to_string());
                    return Ok(code);
                }
            }
        }

        Err(ShortenerError::CodeExhausted)
    }
}

#[async_trait]
impl Shortener for MemoryShortener {
    async fn shorten(&self, original_url: &str) -> Result<String, ShortenerError> {
        // Holding the url entry serialises concurrent shortening of the same URL.
        match self.by_url.entry(original_url.to_string()) {
            Entry::Occupied(existing) => Ok(self.short_url(existing.get())),
            Entry::Vacant(slot) => {
                let code = self.allocate_code(original_url)?;
                let short_url = self.short_url(&code);
                slot.insert(code);
                Ok(short_url)
            }
        }
    }

    async fn resolve(&self, short_code: &str) -> Result<String, ShortenerError> {
        self.by_code
            .get(short_code)
            .map(|url| url.value().clone())
            .ok_or_else(|| ShortenerError::NotFound(short_code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_code() -> Result<String, getrandom::Error> {
        Ok("fixed".to_string())
    }

    #[tokio::test]
    async fn test_shorten_then_resolve() {
        let store = MemoryShortener::new("http://localhost:8080");

        let short_url = store.shorten("https://example.com/page").await.unwrap();
        assert!(short_url.starts_with("http://localhost:8080/"));

        let code = short_url.rsplit('/').next().unwrap();
        assert_eq!(code.len(), 12);
        assert_eq!(store.resolve(code).await.unwrap(), "https://example.com/page");
    }

    #[tokio::test]
    async fn test_shorten_same_url_twice_returns_same_short_url() {
        let store = MemoryShortener::new("http://localhost:8080");

        let first = store.shorten("https://dedup.com").await.unwrap();
        let second = store.shorten("https://dedup.com").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_trimmed() {
        let store = MemoryShortener::with_generator("http://short.test/", fixed_code);

        let short_url = store.shorten("https://example.com").await.unwrap();
        assert_eq!(short_url, "http://short.test/fixed");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let store = MemoryShortener::new("http://localhost:8080");

        let result = store.resolve("missing").await;
        assert!(matches!(result, Err(ShortenerError::NotFound(code)) if code == "missing"));
    }

    #[tokio::test]
    async fn test_collisions_exhaust_attempts() {
        let store = MemoryShortener::with_generator("http://short.test", fixed_code);

        store.shorten("https://one.example.com").await.unwrap();
        let result = store.shorten("https://two.example.com").await;

        assert!(matches!(result, Err(ShortenerError::CodeExhausted)));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.resolve("fixed").await.unwrap(),
            "https://one.example.com"
        );
    }
}
