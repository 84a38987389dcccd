use rand::Rng;

use crate::severity::Severity;

/// One simulated broadcast issue: the severity it carries and the raw
/// description handed to the analysis prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub description: &'static str,
}

/// The built-in sampling universe: six canned issues covering all three
/// severities. Constant for the process lifetime.
pub const BUILTIN_ISSUES: [Issue; 6] = [
    Issue {
        severity: Severity::Good,
        description: "Signal integrity verified across all transponders",
    },
    Issue {
        severity: Severity::Warning,
        description: "Intermittent audio dropout detected on channel 2",
    },
    Issue {
        severity: Severity::Warning,
        description: "Video bitrate fluctuation exceeding nominal range",
    },
    Issue {
        severity: Severity::Error,
        description: "Critical signal loss detected on primary feed",
    },
    Issue {
        severity: Severity::Warning,
        description: "Closed caption stream lagging behind video",
    },
    Issue {
        severity: Severity::Good,
        description: "Scheduled signal check completed, no anomalies",
    },
];

/// Fixed, read-only, ordered issue list the simulator samples from.
#[derive(Debug, Clone, Copy)]
pub struct IssueCatalog {
    issues: &'static [Issue],
}

impl IssueCatalog {
    /// The six built-in broadcast issues.
    pub fn builtin() -> Self {
        Self {
            issues: &BUILTIN_ISSUES,
        }
    }

    /// A custom universe. Panics on an empty slice — sampling from nothing
    /// has no meaning.
    pub fn custom(issues: &'static [Issue]) -> Self {
        assert!(!issues.is_empty(), "issue catalog must not be empty");
        Self { issues }
    }

    /// Uniform random selection.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &'static Issue {
        &self.issues[rng.gen_range(0..self.issues.len())]
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Issue> {
        self.issues.iter()
    }
}

impl Default for IssueCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
