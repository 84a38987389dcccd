//! The event simulator loop.
//!
//! A two-state machine (`Idle` / `Requesting`) driven by a re-arm-on-fire
//! timer. Each firing samples one issue from the catalog, flips the global
//! status for non-Good severities before the completion resolves, awaits the
//! completion service, and appends exactly one log entry — the rendered text
//! on success, the fixed fallback on any service failure. An `AtomicBool`
//! busy flag guarantees at most one request in flight: a timer firing that
//! lands while a request is outstanding is skipped, never queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use signalwatch_analysis::completion::{CompletionRequest, CompletionService};
use signalwatch_analysis::prompt::analysis_prompt;
use signalwatch_types::alert::AlertLog;
use signalwatch_types::catalog::IssueCatalog;
use signalwatch_types::severity::Severity;

use crate::config::{ConfigError, SimulatorConfig};
use crate::status::StatusBoard;

/// Fixed text of the bootstrap entry. Appended directly, without a
/// completion call.
pub const INIT_MESSAGE: &str = "Broadcast monitoring initialized. All signals nominal.";

/// Fixed text appended when the completion call fails, whatever the cause.
pub const FALLBACK_MESSAGE: &str = "Failed to get analysis from AI. Check API connection.";

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Requesting,
}

/// Outcome of a single timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Firing {
    /// The request/response cycle ran to completion (either branch).
    Completed,
    /// A request was already in flight; this firing was a no-op.
    Skipped,
}

/// The simulator: owns the alert log and status board exclusively, shares
/// them read-only with the display projection.
pub struct Simulator<S> {
    service: Arc<S>,
    log: Arc<AlertLog>,
    status: Arc<StatusBoard>,
    busy: AtomicBool,
    rng: Mutex<ChaCha8Rng>,
    catalog: IssueCatalog,
    config: SimulatorConfig,
}

impl<S: CompletionService + 'static> Simulator<S> {
    pub fn new(service: Arc<S>, config: SimulatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            service,
            log: Arc::new(AlertLog::new()),
            status: Arc::new(StatusBoard::new()),
            busy: AtomicBool::new(false),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(config.seed)),
            catalog: IssueCatalog::builtin(),
            config,
        })
    }

    /// Replace the sampling universe. Tests use single-issue catalogs to
    /// pin down which severity a firing carries.
    pub fn with_catalog(mut self, catalog: IssueCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn log(&self) -> &AlertLog {
        &self.log
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        if self.busy.load(Ordering::SeqCst) {
            LoopState::Requesting
        } else {
            LoopState::Idle
        }
    }

    /// Append the fixed initialization entry. Runs once, ~1.5 s after
    /// start, regardless of random timer state.
    pub fn bootstrap(&self) {
        let entry = self.log.append(Severity::Good, INIT_MESSAGE);
        info!(id = entry.id, "monitoring initialized");
    }

    /// One timer firing: the full request/response cycle, or a no-op if a
    /// request is already in flight.
    pub async fn fire(&self) -> Firing {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("firing skipped, request already in flight");
            return Firing::Skipped;
        }

        let issue = {
            let mut rng = self.rng.lock().unwrap();
            self.catalog.sample(&mut *rng)
        };
        debug!(severity = %issue.severity, description = issue.description, "issue sampled");

        // The badge reacts before the text completes.
        if !issue.severity.is_good() {
            self.status.set(issue.severity);
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: analysis_prompt(issue.description),
        };

        match self.service.complete(request).await {
            Ok(completion) => {
                let entry = self.log.append(issue.severity, completion.text);
                info!(id = entry.id, severity = %entry.severity, "alert recorded");
                if issue.severity.is_good() {
                    self.schedule_good_reset();
                }
            }
            Err(err) => {
                warn!(error = %err, "completion failed");
                self.status.set(Severity::Error);
                self.log.append(Severity::Error, FALLBACK_MESSAGE);
            }
        }

        // Both branches land here: the guard never stays set.
        self.busy.store(false, Ordering::SeqCst);
        Firing::Completed
    }

    /// Uniform random re-arm delay in `[min_interval_ms, max_interval_ms)`.
    fn next_interval(&self) -> Duration {
        let mut rng = self.rng.lock().unwrap();
        let millis = rng.gen_range(self.config.min_interval_ms..self.config.max_interval_ms);
        Duration::from_millis(millis)
    }

    /// A Good completion restores the Good badge 1 s later, unless an
    /// intervening event moved the status first.
    fn schedule_good_reset(&self) {
        let status = Arc::clone(&self.status);
        let generation = status.generation();
        let delay = Duration::from_millis(self.config.good_reset_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            status.reset_if_unchanged(generation);
        });
    }
}

/// Handle to a running simulator loop.
pub struct SimulatorHandle {
    loop_task: JoinHandle<()>,
    in_flight: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SimulatorHandle {
    pub fn is_running(&self) -> bool {
        !self.loop_task.is_finished()
    }

    /// Tear the loop down. The timer is cleared and any in-flight completion
    /// is dropped at its suspension point; a late result is never applied.
    pub fn shutdown(self) {
        self.loop_task.abort();
        if let Some(task) = self.in_flight.lock().unwrap().take() {
            task.abort();
        }
    }
}

/// Start the loop: bootstrap after the configured delay, then fire on a
/// uniformly random interval, re-armed after every firing. Firings run on
/// their own tasks so a slow completion skips later firings instead of
/// delaying the timer.
pub fn spawn<S: CompletionService + 'static>(simulator: Arc<Simulator<S>>) -> SimulatorHandle {
    let in_flight: Arc<Mutex<Option<JoinHandle<()>>>> = Arc::new(Mutex::new(None));
    let loop_task = tokio::spawn(run_loop(simulator, Arc::clone(&in_flight)));
    SimulatorHandle {
        loop_task,
        in_flight,
    }
}

async fn run_loop<S: CompletionService + 'static>(
    sim: Arc<Simulator<S>>,
    in_flight: Arc<Mutex<Option<JoinHandle<()>>>>,
) {
    tokio::time::sleep(Duration::from_millis(sim.config.bootstrap_delay_ms)).await;
    sim.bootstrap();

    loop {
        let delay = sim.next_interval();
        debug!(delay_ms = delay.as_millis() as u64, "timer armed");
        tokio::time::sleep(delay).await;

        let firing = Arc::clone(&sim);
        let task = tokio::spawn(async move {
            firing.fire().await;
        });

        // Keep the handle of the earliest unfinished firing: that is the one
        // actually in flight (later ones skip on the busy guard).
        let mut slot = in_flight.lock().unwrap();
        if slot.as_ref().map_or(true, |t| t.is_finished()) {
            *slot = Some(task);
        }
    }
}
