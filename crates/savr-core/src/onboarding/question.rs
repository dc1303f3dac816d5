//! Question definitions
//!
//! A question is one onboarding step. Its `type` tells the renderer which input
//! widget to show and tells [`Question::validate_answer`] which answer shapes
//! are acceptable.

use serde::Serialize;
use thiserror::Error;

use super::answer::AnswerValue;

/// Input widget kind for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    SingleChoice,
    MultiChoice,
    Slider,
    ScrollPicker,
    LogoChoice,
    Text,
}

impl QuestionType {
    /// Whether answers are a single option id picked from `options`.
    pub fn is_single_pick(&self) -> bool {
        matches!(
            self,
            QuestionType::SingleChoice | QuestionType::ScrollPicker | QuestionType::LogoChoice
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Asset reference for logo-based options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_ref: Option<String>,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subtitle: None,
            icon: None,
            logo_ref: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_logo(mut self, logo_ref: impl Into<String>) -> Self {
        self.logo_ref = Some(logo_ref.into());
        self
    }
}

/// Numeric bounds of a slider question.
///
/// Invariants: `step > 0`, `min <= max`, `min <= default_value <= max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderBounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl SliderBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }

    /// Whether `value` lies on the step grid starting at `min`.
    pub fn is_on_step(&self, value: f64) -> bool {
        if value.fract() != 0.0 {
            return false;
        }
        (value as i64 - self.min) % self.step == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(flatten)]
    pub slider: Option<SliderBounds>,
    /// Ask for an app-permission decision once this question is answered
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub permission_prompt: bool,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("question '{question_id}' expects a {expected:?} answer")]
    WrongShape {
        question_id: String,
        expected: QuestionType,
    },
    #[error("question '{question_id}' has no option '{option_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },
    #[error("option '{option_id}' selected more than once for '{question_id}'")]
    DuplicateOption {
        question_id: String,
        option_id: String,
    },
    #[error("{value} is outside {min}..={max} for '{question_id}'")]
    OutOfRange {
        question_id: String,
        value: f64,
        min: i64,
        max: i64,
    },
    #[error("{value} is not a multiple of step {step} for '{question_id}'")]
    OffStep {
        question_id: String,
        value: f64,
        step: i64,
    },
    #[error("answer to '{question_id}' must not be empty")]
    Empty { question_id: String },
}

impl Question {
    fn base(id: &str, kind: QuestionType, title: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            options: Vec::new(),
            slider: None,
            permission_prompt: false,
        }
    }

    pub fn choice(
        id: &str,
        kind: QuestionType,
        title: &str,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            options,
            ..Self::base(id, kind, title)
        }
    }

    pub fn slider(id: &str, title: &str, bounds: SliderBounds) -> Self {
        Self {
            slider: Some(bounds),
            ..Self::base(id, QuestionType::Slider, title)
        }
    }

    pub fn text(id: &str, title: &str) -> Self {
        Self::base(id, QuestionType::Text, title)
    }

    pub fn with_permission_prompt(mut self) -> Self {
        self.permission_prompt = true;
        self
    }

    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Value a renderer should preselect: the stored answer, else the slider
    /// default, else nothing.
    pub fn initial_value(&self, existing: Option<&AnswerValue>) -> Option<AnswerValue> {
        if let Some(answer) = existing {
            return Some(answer.clone());
        }
        match (&self.kind, &self.slider) {
            (QuestionType::Slider, Some(bounds)) => bounds.default_value.map(AnswerValue::Number),
            _ => None,
        }
    }

    /// Check that `value` is an acceptable answer for this question.
    pub fn validate_answer(&self, value: &AnswerValue) -> Result<(), AnswerError> {
        match self.kind {
            kind if kind.is_single_pick() => {
                let option_id = value.as_choice().ok_or_else(|| self.wrong_shape())?;
                self.require_option(option_id)
            }
            QuestionType::MultiChoice => {
                let AnswerValue::Choices(ids) = value else {
                    return Err(self.wrong_shape());
                };
                for (i, option_id) in ids.iter().enumerate() {
                    self.require_option(option_id)?;
                    if ids[..i].contains(option_id) {
                        return Err(AnswerError::DuplicateOption {
                            question_id: self.id.clone(),
                            option_id: option_id.clone(),
                        });
                    }
                }
                Ok(())
            }
            QuestionType::Slider => {
                let number = value.as_f64().ok_or_else(|| self.wrong_shape())?;
                let Some(bounds) = &self.slider else {
                    return Ok(());
                };
                if !bounds.contains(number) {
                    return Err(AnswerError::OutOfRange {
                        question_id: self.id.clone(),
                        value: number,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
                if !bounds.is_on_step(number) {
                    return Err(AnswerError::OffStep {
                        question_id: self.id.clone(),
                        value: number,
                        step: bounds.step,
                    });
                }
                Ok(())
            }
            QuestionType::Text => {
                let text = value.as_choice().ok_or_else(|| self.wrong_shape())?;
                if text.trim().is_empty() {
                    return Err(AnswerError::Empty {
                        question_id: self.id.clone(),
                    });
                }
                Ok(())
            }
            _ => Err(self.wrong_shape()),
        }
    }

    fn require_option(&self, option_id: &str) -> Result<(), AnswerError> {
        if self.option(option_id).is_some() {
            Ok(())
        } else {
            Err(AnswerError::UnknownOption {
                question_id: self.id.clone(),
                option_id: option_id.to_string(),
            })
        }
    }

    fn wrong_shape(&self) -> AnswerError {
        AnswerError::WrongShape {
            question_id: self.id.clone(),
            expected: self.kind,
        }
    }
}
