//! Single-firing semantics: the busy guard, status transitions, the delayed
//! Good reset, and the failure path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use signalwatch_analysis::completion::{
    Completion, CompletionError, CompletionRequest, CompletionService,
};
use signalwatch_core::config::SimulatorConfig;
use signalwatch_core::simulator::{FALLBACK_MESSAGE, Firing, LoopState, Simulator};
use signalwatch_types::catalog::{Issue, IssueCatalog};
use signalwatch_types::severity::Severity;

/// Resolves immediately with a numbered reply.
struct EchoAnalyst {
    calls: AtomicU64,
}

impl EchoAnalyst {
    fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
        }
    }
}

impl CompletionService for EchoAnalyst {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, CompletionError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Completion {
            text: format!("analysis {n}"),
        })
    }
}

/// Blocks every completion until released.
struct GatedAnalyst {
    release: Notify,
    reply: &'static str,
}

impl GatedAnalyst {
    fn new(reply: &'static str) -> Self {
        Self {
            release: Notify::new(),
            reply,
        }
    }
}

impl CompletionService for GatedAnalyst {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, CompletionError> {
        self.release.notified().await;
        Ok(Completion {
            text: self.reply.to_string(),
        })
    }
}

/// Always fails.
struct DownAnalyst;

impl CompletionService for DownAnalyst {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, CompletionError> {
        Err(CompletionError::ServiceCall("connection refused".to_string()))
    }
}

const SIGNAL_LOSS: [Issue; 1] = [Issue {
    severity: Severity::Error,
    description: "Critical signal loss detected on primary feed",
}];

const ROUTINE_CHECK: [Issue; 1] = [Issue {
    severity: Severity::Good,
    description: "Scheduled signal check completed, no anomalies",
}];

fn simulator<S: CompletionService + 'static>(service: S) -> Simulator<S> {
    Simulator::new(Arc::new(service), SimulatorConfig::default()).unwrap()
}

#[tokio::test]
async fn test_busy_flag_skips_overlapping_firing() {
    let service = Arc::new(GatedAnalyst::new("slow reply"));
    let sim = Arc::new(
        Simulator::new(Arc::clone(&service), SimulatorConfig::default())
            .unwrap()
            .with_catalog(IssueCatalog::custom(&ROUTINE_CHECK)),
    );

    let first = tokio::spawn({
        let sim = Arc::clone(&sim);
        async move { sim.fire().await }
    });
    tokio::task::yield_now().await;

    // First firing is parked inside the completion call.
    assert_eq!(sim.state(), LoopState::Requesting);

    // A second firing while Requesting is a no-op.
    assert_eq!(sim.fire().await, Firing::Skipped);
    assert!(sim.log().is_empty());

    service.release.notify_one();
    assert_eq!(first.await.unwrap(), Firing::Completed);

    // Guard cleared, exactly one entry recorded.
    assert_eq!(sim.state(), LoopState::Idle);
    assert_eq!(sim.log().len(), 1);
}

#[tokio::test]
async fn test_non_good_status_set_before_resolution() {
    let service = Arc::new(GatedAnalyst::new("Uplink failure on transponder 4"));
    let sim = Arc::new(
        Simulator::new(Arc::clone(&service), SimulatorConfig::default())
            .unwrap()
            .with_catalog(IssueCatalog::custom(&SIGNAL_LOSS)),
    );

    let firing = tokio::spawn({
        let sim = Arc::clone(&sim);
        async move { sim.fire().await }
    });
    tokio::task::yield_now().await;

    // The badge reacts before the text completes.
    assert_eq!(sim.status().current(), Severity::Error);
    assert!(sim.log().is_empty());
    assert_eq!(sim.display().badge.label, "CRITICAL");
    assert!(sim.display().requesting);

    service.release.notify_one();
    firing.await.unwrap();

    let entry = sim.log().latest().unwrap();
    assert_eq!(entry.severity, Severity::Error);
    assert_eq!(entry.message, "Uplink failure on transponder 4");
    assert_eq!(sim.display().badge.label, "CRITICAL");
}

#[tokio::test(start_paused = true)]
async fn test_good_completion_resets_status_after_one_second() {
    let sim = simulator(EchoAnalyst::new()).with_catalog(IssueCatalog::custom(&ROUTINE_CHECK));

    // A warning is showing when the Good event lands.
    sim.status().set(Severity::Warning);
    assert_eq!(sim.fire().await, Firing::Completed);

    // Transient stays visible until the reset delay elapses.
    assert_eq!(sim.status().current(), Severity::Warning);
    tokio::time::sleep(Duration::from_millis(999)).await;
    assert_eq!(sim.status().current(), Severity::Warning);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(sim.status().current(), Severity::Good);
    assert_eq!(sim.display().badge.label, "OPERATIONAL");
}

#[tokio::test(start_paused = true)]
async fn test_intervening_event_suppresses_good_reset() {
    let sim = simulator(EchoAnalyst::new()).with_catalog(IssueCatalog::custom(&ROUTINE_CHECK));

    sim.fire().await;

    // Another event moves the status before the reset lands.
    sim.status().set(Severity::Error);
    tokio::time::sleep(Duration::from_millis(1_100)).await;

    assert_eq!(sim.status().current(), Severity::Error);
}

#[tokio::test]
async fn test_service_failure_appends_fallback_and_goes_critical() {
    let sim = simulator(DownAnalyst).with_catalog(IssueCatalog::custom(&ROUTINE_CHECK));

    assert_eq!(sim.fire().await, Firing::Completed);

    assert_eq!(sim.log().len(), 1);
    let entry = sim.log().latest().unwrap();
    assert_eq!(entry.severity, Severity::Error);
    assert_eq!(entry.message, FALLBACK_MESSAGE);

    assert_eq!(sim.status().current(), Severity::Error);
    assert_eq!(sim.display().badge.label, "CRITICAL");

    // Guard cleared even on the failure branch.
    assert_eq!(sim.state(), LoopState::Idle);
}

#[tokio::test]
async fn test_entries_resolve_in_issue_order() {
    let sim = simulator(EchoAnalyst::new());

    for _ in 0..3 {
        sim.fire().await;
    }

    let entries = sim.log().snapshot();
    let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["analysis 0", "analysis 1", "analysis 2"]);

    for pair in entries.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}
