//! Read-only projection for the display surface.
//!
//! Rendering is out of scope; this module only shapes the data: the status
//! badge, the alert sequence newest-at-bottom, and the loading affordance
//! flag shown while a request is in flight.

use serde::Serialize;

use signalwatch_types::alert::{AlertLog, AlertMessage};
use signalwatch_types::severity::Severity;

use signalwatch_analysis::completion::CompletionService;

use crate::simulator::{LoopState, Simulator};
use crate::status::StatusBoard;

/// The colored badge reflecting the current signal status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub severity: Severity,
    pub label: &'static str,
}

impl StatusBadge {
    pub fn for_status(severity: Severity) -> Self {
        Self {
            severity,
            label: severity.badge_label(),
        }
    }
}

/// Everything the rendering layer needs, cloned at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct DisplaySnapshot {
    pub badge: StatusBadge,
    /// Oldest first; the surface renders newest-at-bottom and auto-scrolls
    /// to the last entry.
    pub alerts: Vec<AlertMessage>,
    /// Loading affordance: a request is currently in flight.
    pub requesting: bool,
}

/// Project the shared state into a display snapshot.
pub fn project(status: &StatusBoard, log: &AlertLog, state: LoopState) -> DisplaySnapshot {
    DisplaySnapshot {
        badge: StatusBadge::for_status(status.current()),
        alerts: log.snapshot(),
        requesting: state == LoopState::Requesting,
    }
}

impl<S: CompletionService + 'static> Simulator<S> {
    /// Convenience projection over this simulator's own state.
    pub fn display(&self) -> DisplaySnapshot {
        project(self.status(), self.log(), self.state())
    }
}
