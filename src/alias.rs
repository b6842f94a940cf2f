//! Random alias suggestions and the client-side alias character check.
//!
//! DESIGN
//! ======
//! Suggestions are uniform draws from `0-9a-zA-Z` using the thread RNG; they
//! are not meant to be unguessable. `generate_unique` probes the backend
//! sequentially and, when every probe collides or fails, hands back a longer
//! alias it has NOT checked. The `verified` flag carries that distinction to
//! the caller.

#[cfg(test)]
#[path = "alias_test.rs"]
mod alias_test;

use std::sync::LazyLock;

use rand::Rng;
use rand::rngs::ThreadRng;
use regex::Regex;

use crate::api::ShortenerApi;

pub const ALIAS_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Extra length used for the unchecked fallback.
const FALLBACK_EXTRA_LEN: usize = 2;

static ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("alias pattern compiles"));

/// Whether `alias` uses only letters, digits, `_` and `-` (and is non-empty).
#[must_use]
pub fn is_valid_alias(alias: &str) -> bool {
    ALIAS_PATTERN.is_match(alias)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedAlias {
    pub value: String,
    /// The backend reported this alias unused. `false` for the fallback.
    pub verified: bool,
}

pub struct AliasGenerator<R = ThreadRng> {
    rng: R,
}

impl Default for AliasGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasGenerator<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> AliasGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(ALIAS_ALPHABET[self.rng.random_range(0..ALIAS_ALPHABET.len())]))
            .collect()
    }

    /// First candidate of `len` the backend reports unused, within
    /// `max_attempts` probes; otherwise an unchecked alias of `len + 2`.
    pub async fn generate_unique<A: ShortenerApi + ?Sized>(
        &mut self,
        api: &A,
        len: usize,
        max_attempts: usize,
    ) -> GeneratedAlias {
        for attempt in 1..=max_attempts {
            let candidate = self.generate(len);
            match api.check_alias(&candidate).await {
                Ok(check) if !check.exists => {
                    return GeneratedAlias { value: candidate, verified: true };
                }
                Ok(_) => tracing::debug!(%candidate, attempt, "alias collision"),
                Err(e) => tracing::warn!(%candidate, attempt, error = %e, "alias check failed"),
            }
        }
        let value = self.generate(len + FALLBACK_EXTRA_LEN);
        tracing::warn!(%value, max_attempts, "returning unverified alias");
        GeneratedAlias { value, verified: false }
    }
}
