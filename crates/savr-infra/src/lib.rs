pub mod diagnostics;
pub mod onboarding_record;
pub mod storage;
pub mod time;

pub use diagnostics::BroadcastOnboardingEvents;
pub use onboarding_record::KeyValueOnboardingRepository;
pub use storage::{FileKeyValueStorage, InMemoryKeyValueStorage};
pub use time::SystemClock;
