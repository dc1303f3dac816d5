//! Onboarding navigation state machine.
//!
//! Defines a pure state transition function for the onboarding screens: the
//! journey picker, one screen per catalog question, the app-permission prompt
//! and completion. Persistence is expressed as [`OnboardingAction`]s that the
//! caller executes.

use thiserror::Error;

use super::answer::AnswerValue;
use super::catalog::{flow_for, total_steps};
use super::question::{AnswerError, Question};
use super::record::PERMISSION_ANSWER_KEY;
use crate::journey::JourneyType;

/// Current onboarding screen.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingStage {
    /// Journey picker ("Order Less" or "Cook More").
    ChooseJourney,
    /// Question screen at a 0-based step of the journey.
    Question {
        journey: JourneyType,
        step: usize,
        error: Option<FlowError>,
    },
    /// Permission prompt shown after a question with `permission_prompt`.
    PermissionPrompt {
        journey: JourneyType,
        step: usize,
        selection: AnswerValue,
    },
    /// Onboarding finished.
    Done,
}

/// Events that drive the onboarding screens.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingEvent {
    ChooseJourney(JourneyType),
    /// Submit the selected value for the current question.
    Submit(AnswerValue),
    RespondPermission { granted: bool },
    Back,
}

/// Side-effects produced by transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    PersistJourney(JourneyType),
    PersistAnswer {
        question_id: String,
        value: AnswerValue,
    },
    MarkCompleted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),
    #[error("journey {journey} has no step {step}")]
    UnknownStep { journey: JourneyType, step: usize },
}

/// Where the app should land on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRoute {
    Onboarding,
    Dashboard,
}

impl LaunchRoute {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            LaunchRoute::Dashboard
        } else {
            LaunchRoute::Onboarding
        }
    }
}

impl OnboardingStage {
    pub fn question(journey: JourneyType, step: usize) -> Self {
        OnboardingStage::Question {
            journey,
            step,
            error: None,
        }
    }

    /// `(current step, total steps)` while a journey is in progress.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self {
            OnboardingStage::Question { journey, step, .. }
            | OnboardingStage::PermissionPrompt { journey, step, .. } => {
                Some((*step, total_steps(*journey)))
            }
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self {
            OnboardingStage::Question { journey, step, .. }
            | OnboardingStage::PermissionPrompt { journey, step, .. } => {
                flow_for(*journey).get(*step)
            }
            _ => None,
        }
    }
}

/// Pure onboarding state machine.
pub struct OnboardingFlowMachine;

impl OnboardingFlowMachine {
    pub fn transition(
        stage: OnboardingStage,
        event: OnboardingEvent,
    ) -> (OnboardingStage, Vec<OnboardingAction>) {
        match (stage, event) {
            (OnboardingStage::ChooseJourney, OnboardingEvent::ChooseJourney(journey)) => (
                OnboardingStage::question(journey, 0),
                vec![OnboardingAction::PersistJourney(journey)],
            ),
            (OnboardingStage::Question { journey, step, .. }, OnboardingEvent::Submit(value)) => {
                let Some(question) = flow_for(journey).get(step) else {
                    return (
                        OnboardingStage::Question {
                            journey,
                            step,
                            error: Some(FlowError::UnknownStep { journey, step }),
                        },
                        Vec::new(),
                    );
                };
                if let Err(err) = question.validate_answer(&value) {
                    return (
                        OnboardingStage::Question {
                            journey,
                            step,
                            error: Some(err.into()),
                        },
                        Vec::new(),
                    );
                }
                if question.permission_prompt {
                    return (
                        OnboardingStage::PermissionPrompt {
                            journey,
                            step,
                            selection: value,
                        },
                        Vec::new(),
                    );
                }
                let actions = vec![OnboardingAction::PersistAnswer {
                    question_id: question.id.clone(),
                    value,
                }];
                Self::advance(journey, step, actions)
            }
            (
                OnboardingStage::PermissionPrompt {
                    journey,
                    step,
                    selection,
                },
                OnboardingEvent::RespondPermission { granted },
            ) => {
                let Some(question) = flow_for(journey).get(step) else {
                    return (OnboardingStage::question(journey, step), Vec::new());
                };
                let actions = vec![
                    OnboardingAction::PersistAnswer {
                        question_id: question.id.clone(),
                        value: selection,
                    },
                    OnboardingAction::PersistAnswer {
                        question_id: PERMISSION_ANSWER_KEY.to_string(),
                        value: AnswerValue::Flag(granted),
                    },
                ];
                Self::advance(journey, step, actions)
            }
            (OnboardingStage::PermissionPrompt { journey, step, .. }, OnboardingEvent::Back) => {
                (OnboardingStage::question(journey, step), Vec::new())
            }
            (OnboardingStage::Question { step: 0, .. }, OnboardingEvent::Back) => {
                (OnboardingStage::ChooseJourney, Vec::new())
            }
            (OnboardingStage::Question { journey, step, .. }, OnboardingEvent::Back) => {
                (OnboardingStage::question(journey, step - 1), Vec::new())
            }
            (stage, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?stage, event = ?_event, "onboarding event ignored in current stage");
                (stage, Vec::new())
            }
        }
    }

    fn advance(
        journey: JourneyType,
        step: usize,
        mut actions: Vec<OnboardingAction>,
    ) -> (OnboardingStage, Vec<OnboardingAction>) {
        if step + 1 >= total_steps(journey) {
            actions.push(OnboardingAction::MarkCompleted);
            (OnboardingStage::Done, actions)
        } else {
            (OnboardingStage::question(journey, step + 1), actions)
        }
    }
}
