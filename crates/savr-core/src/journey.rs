//! Journey types
//!
//! A journey is the path a user picks on the first onboarding screen. Each
//! journey owns its own ordered list of questions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Onboarding journey chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyType {
    /// Reduce food delivery orders
    #[default]
    OrderLess,
    /// Cook at home more frequently
    CookMore,
}

impl JourneyType {
    pub const ALL: [JourneyType; 2] = [JourneyType::OrderLess, JourneyType::CookMore];

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyType::OrderLess => "order-less",
            JourneyType::CookMore => "cook-more",
        }
    }
}

impl fmt::Display for JourneyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown journey type: {0}")]
pub struct UnknownJourneyType(pub String);

impl FromStr for JourneyType {
    type Err = UnknownJourneyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order-less" => Ok(JourneyType::OrderLess),
            "cook-more" => Ok(JourneyType::CookMore),
            other => Err(UnknownJourneyType(other.to_string())),
        }
    }
}
