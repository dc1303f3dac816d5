//! Onboarding diagnostics port
//!
//! The onboarding store never surfaces storage failures to its callers. Each
//! swallowed failure is reported here instead so that silent data loss stays
//! observable.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Store operation during which a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOperation {
    Read,
    SaveAnswer,
    SetJourneyType,
    MarkCompleted,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Underlying storage was unavailable or failed
    Storage,
    /// Persisted payload could not be decoded
    Decode,
    /// Record could not be encoded
    Encode,
    /// Operation needs an existing record and there was none
    MissingRecord,
    /// Store worker is no longer running
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingDiagnostic {
    pub operation: StoreOperation,
    pub kind: DiagnosticKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

pub trait OnboardingEventPort: Send + Sync {
    /// Publish a diagnostic. Must not block and must not fail the caller.
    fn emit(&self, diagnostic: OnboardingDiagnostic);
}
