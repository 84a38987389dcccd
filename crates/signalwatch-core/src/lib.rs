//! The signalwatch event simulator loop.
//!
//! One stateful component lives here: a timer-driven loop that samples
//! canned broadcast issues, asks the completion service to render them as
//! operator-readable text, and appends the results to the session alert
//! log while maintaining the global signal status. Everything else —
//! camera acquisition and the display projection — is a collaborator seam
//! or a read-only view.

pub mod camera;
pub mod config;
pub mod display;
pub mod simulator;
pub mod status;
