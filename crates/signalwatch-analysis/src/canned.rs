//! Deterministic offline completion service.
//!
//! `CannedAnalyst` stands in for the real generative API when no credential
//! is available: it recovers the event description from the prompt and wraps
//! it in one of a few fixed operator-report phrasings, chosen by a seeded
//! ChaCha8 RNG. Same seed -> same renderings, always.

use std::sync::Mutex;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::completion::{Completion, CompletionError, CompletionRequest, CompletionService};
use crate::prompt::embedded_description;

const PHRASINGS: [&str; 4] = [
    "Automated analysis: {}.",
    "Monitoring desk reports: {}.",
    "Operator advisory — {}.",
    "Telemetry confirms: {}.",
];

/// Offline, deterministic [`CompletionService`] implementation.
pub struct CannedAnalyst {
    rng: Mutex<ChaCha8Rng>,
    latency: Duration,
}

impl CannedAnalyst {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            latency: Duration::ZERO,
        }
    }

    /// Simulate service latency before each completion resolves.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn render(&self, description: &str) -> String {
        let idx = self.rng.lock().unwrap().gen_range(0..PHRASINGS.len());
        PHRASINGS[idx].replace("{}", description)
    }
}

impl CompletionService for CannedAnalyst {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let description = embedded_description(&request.prompt).ok_or_else(|| {
            CompletionError::ServiceCall("prompt carries no event description".to_string())
        })?;

        Ok(Completion {
            text: self.render(description),
        })
    }
}
