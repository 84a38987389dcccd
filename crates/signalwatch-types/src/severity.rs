use serde::{Deserialize, Serialize};

/// Classification shared by simulated issues and log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Nominal operation.
    Good,
    /// Degraded but on-air.
    Warning,
    /// Service-affecting fault.
    Error,
}

impl Severity {
    /// Badge text shown by the display surface for this severity.
    pub fn badge_label(self) -> &'static str {
        match self {
            Severity::Good => "OPERATIONAL",
            Severity::Warning => "WARNING",
            Severity::Error => "CRITICAL",
        }
    }

    pub fn is_good(self) -> bool {
        matches!(self, Severity::Good)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}
