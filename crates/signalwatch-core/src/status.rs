use std::sync::Mutex;

use tracing::info;

use signalwatch_types::severity::Severity;

/// Process-wide signal status.
///
/// Holds the severity of the most recent non-Good event. Every explicit set
/// bumps a generation counter; the delayed Good reset scheduled after a
/// Good-severity completion applies only if the generation is unchanged, so
/// an intervening event is never clobbered by a stale reset.
pub struct StatusBoard {
    inner: Mutex<BoardInner>,
}

struct BoardInner {
    status: Severity,
    generation: u64,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BoardInner {
                status: Severity::Good,
                generation: 0,
            }),
        }
    }

    pub fn current(&self) -> Severity {
        self.inner.lock().unwrap().status
    }

    /// Generation of the most recent explicit set.
    pub fn generation(&self) -> u64 {
        self.inner.lock().unwrap().generation
    }

    /// Set the status, bumping the generation. Returns the new generation.
    pub fn set(&self, severity: Severity) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.status = severity;
        inner.generation += 1;
        info!(status = %severity, generation = inner.generation, "signal status changed");
        inner.generation
    }

    /// Restore Good, but only if no set happened since `generation` was
    /// observed. Returns whether the reset applied.
    pub fn reset_if_unchanged(&self, generation: u64) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            return false;
        }
        inner.status = Severity::Good;
        info!("signal status reset to good");
        true
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}
