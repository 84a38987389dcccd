use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::severity::Severity;

/// One entry in the broadcast event log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    /// Unique monotonic token, derived from creation time in epoch millis.
    pub id: u64,
    /// Human-readable "HH:MM:SS" UTC time of creation.
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
}

/// Append-only, ordered alert sequence for the session.
///
/// Entries are never removed or mutated; the log grows unbounded for the
/// session lifetime. The simulator loop is the only writer; the display
/// layer reads snapshots.
pub struct AlertLog {
    inner: Mutex<LogInner>,
}

struct LogInner {
    entries: Vec<AlertMessage>,
    last_id: u64,
}

impl AlertLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LogInner {
                entries: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// Append a new entry stamped with the current wall clock.
    /// Ids are strictly increasing even when two appends land in the same
    /// millisecond.
    pub fn append(&self, severity: Severity, message: impl Into<String>) -> AlertMessage {
        let now = clock::now_millis();
        let mut inner = self.inner.lock().unwrap();
        let id = now.max(inner.last_id + 1);
        inner.last_id = id;

        let entry = AlertMessage {
            id,
            timestamp: clock::wall_clock_label(now),
            severity,
            message: message.into(),
        };
        inner.entries.push(entry.clone());
        entry
    }

    /// Clone of the full sequence, oldest first (newest-at-bottom order).
    pub fn snapshot(&self) -> Vec<AlertMessage> {
        self.inner.lock().unwrap().entries.clone()
    }

    /// Clone of the most recent entry, if any.
    pub fn latest(&self) -> Option<AlertMessage> {
        self.inner.lock().unwrap().entries.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new()
    }
}
