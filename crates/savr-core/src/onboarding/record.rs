//! Persisted onboarding record

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::answer::AnswerValue;
use crate::journey::JourneyType;

/// Answer key for the app-permission decision taken after `delivery-app`
pub const PERMISSION_ANSWER_KEY: &str = "app-permission-granted";

/// Onboarding answers and completion state.
///
/// Every field reads with a default, so records written by older builds that
/// lack a field still load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    /// Whether onboarding has been completed
    #[serde(default)]
    pub completed: bool,
    /// Unknown or malformed tags read as the default journey
    #[serde(default, deserialize_with = "journey_or_default")]
    pub journey_type: JourneyType,
    /// Answers keyed by question id
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerValue>,
    /// Set only when `completed` becomes true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn journey_or_default<'de, D>(deserializer: D) -> Result<JourneyType, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = serde_json::Value::deserialize(deserializer)?;
    Ok(tag
        .as_str()
        .and_then(|tag| tag.parse().ok())
        .unwrap_or_default())
}

impl OnboardingRecord {
    pub fn new(journey_type: JourneyType) -> Self {
        Self {
            journey_type,
            ..Default::default()
        }
    }

    pub fn answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Store an answer, replacing any previous value for the same id.
    ///
    /// Answering re-opens onboarding: `completed` and `completed_at` are cleared.
    pub fn record_answer(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.answers.insert(question_id.into(), value);
        self.reopen();
    }

    /// Switch journey, keeping answers. Re-opens onboarding.
    pub fn choose_journey(&mut self, journey_type: JourneyType) {
        self.journey_type = journey_type;
        self.reopen();
    }

    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }

    fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}
