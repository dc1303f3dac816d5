use serde::{ser, Deserialize, Serialize, Serializer};

/// A single onboarding answer.
///
/// Serialized untagged so the persisted JSON keeps the plain shape a renderer
/// produces: `"3"`, `100`, `true` or `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Yes/no decision, e.g. a permission prompt
    Flag(bool),
    /// Whole slider value
    Number(i64),
    /// Fractional numeric value. Must be finite to be stored.
    Decimal(#[serde(serialize_with = "serialize_finite")] f64),
    /// Selected option id, or free text for `text` questions
    Choice(String),
    /// Selected option ids for `multi-choice` questions
    Choices(Vec<String>),
}

// JSON has no NaN or infinity; serde_json would write `null`, which no
// variant reads back.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(ser::Error::custom(format!(
            "non-finite decimal answer {value} cannot be stored"
        )))
    }
}

impl AnswerValue {
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(id) => Some(id),
            _ => None,
        }
    }

    /// Numeric view of the answer, if it is numeric at all.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n as f64),
            AnswerValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Decimal(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Choice(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Choice(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Choices(value)
    }
}
