//! Core data model for the signalwatch broadcast monitor.
//!
//! Everything here is passive: severities, alert messages, the append-only
//! alert log, the fixed issue catalog, and wall-clock helpers. The simulator
//! loop in `signalwatch-core` is the only writer; the display layer reads.

pub mod alert;
pub mod catalog;
pub mod clock;
pub mod severity;
