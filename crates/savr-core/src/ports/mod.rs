//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `savr-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `savr-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

mod clock;
pub mod key_value;
pub mod onboarding;
pub mod onboarding_event;

pub use clock::*;
pub use key_value::KeyValueStoragePort;
pub use onboarding::{OnboardingRecordPort, RecordStoreError};
pub use onboarding_event::{
    DiagnosticKind, OnboardingDiagnostic, OnboardingEventPort, StoreOperation,
};
