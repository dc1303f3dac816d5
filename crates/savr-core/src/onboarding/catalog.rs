//! Onboarding flow catalog
//!
//! Static, ordered question lists for the "Order Less" and "Cook More"
//! journeys. The tables are built once on first access and never change.

use once_cell::sync::Lazy;

use super::question::{Question, QuestionOption, QuestionType, SliderBounds};
use crate::journey::JourneyType;

static COOK_MORE_FLOW: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        cooking_identity(),
        Question::choice(
            "shopping-frequency",
            QuestionType::SingleChoice,
            "When do you typically shop for groceries?",
            vec![
                QuestionOption::new("beginning", "Beginning of the Week").with_icon("calendar-week"),
                QuestionOption::new("weekends", "Weekends").with_icon("calendar-day"),
                QuestionOption::new("monthly", "Monthly").with_icon("calendar-alt"),
                QuestionOption::new("whenever", "Whenever I can!").with_icon("calendar-check"),
            ],
        ),
        Question::slider(
            "grocery-spend",
            "How much do you spend on groceries every time you shop?",
            SliderBounds {
                min: 50,
                max: 150,
                step: 1,
                default_value: Some(100),
                unit: Some("$".to_string()),
            },
        ),
        weekly_commitment(
            "cooking-commitment",
            "How many times do you want to commit to cooking this week?",
        ),
    ]
});

static ORDER_LESS_FLOW: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::choice(
            "order-type",
            QuestionType::SingleChoice,
            "Do you order more...",
            vec![
                QuestionOption::new("late-night", "Late Night Delivery").with_icon("moon"),
                QuestionOption::new("weekly-meals", "Weekly Meals").with_icon("calendar-week"),
            ],
        ),
        Question::choice(
            "delivery-app",
            QuestionType::LogoChoice,
            "Which app do you use most often?",
            vec![
                QuestionOption::new("ubereats", "Uber Eats").with_logo("images/ubereats.png"),
                QuestionOption::new("doordash", "DoorDash").with_logo("images/doordash.png"),
                QuestionOption::new("postmates", "Postmates").with_logo("images/postmates.png"),
                QuestionOption::new("grubhub", "GrubHub").with_logo("images/grubhub.png"),
            ],
        )
        .with_permission_prompt(),
        Question::slider(
            "app-spend",
            "How much do you spend on that app every week?",
            SliderBounds {
                min: 0,
                max: 100,
                step: 1,
                default_value: Some(50),
                unit: Some("$".to_string()),
            },
        ),
        Question::slider(
            "delivery-wait-time",
            "How long do you usually wait for your delivery?",
            SliderBounds {
                min: 15,
                max: 120,
                step: 5,
                default_value: Some(60),
                unit: Some("min".to_string()),
            },
        ),
        cooking_identity(),
        weekly_commitment(
            "ordering-commitment",
            "How many times do you want to commit to ordering this week?",
        ),
    ]
});

// Shared by both journeys; answers are keyed by id, so both write the same slot.
fn cooking_identity() -> Question {
    Question::choice(
        "cooking-identity",
        QuestionType::SingleChoice,
        "Which identity speaks to you most?",
        vec![
            QuestionOption::new("cereal-burner", "Cereal Burner")
                .with_subtitle("(can't make anything well)")
                .with_icon("fire"),
            QuestionOption::new("instant-ramen", "Instant Ramen Maker")
                .with_subtitle("(Low effort meals)")
                .with_icon("bowl-rice"),
            QuestionOption::new("bulk-meal-prepper", "Bulk Meal Prepper")
                .with_subtitle("(Low effort, repetitive meals)")
                .with_icon("box"),
            QuestionOption::new("aspiring-chef", "Aspiring Chef")
                .with_subtitle("(Medium effort, Medium creativity)")
                .with_icon("user-chef"),
            QuestionOption::new("michelin-chef", "Michelin Chef")
                .with_subtitle("(High effort, Complex meals)")
                .with_icon("award"),
        ],
    )
}

fn weekly_commitment(id: &str, title: &str) -> Question {
    let options = (1..=5)
        .map(|n| QuestionOption::new(n.to_string(), format!("{n}x")))
        .collect();
    Question::choice(id, QuestionType::ScrollPicker, title, options)
}

/// Full ordered question list for a journey. Never empty.
pub fn flow_for(journey: JourneyType) -> &'static [Question] {
    match journey {
        JourneyType::CookMore => COOK_MORE_FLOW.as_slice(),
        JourneyType::OrderLess => ORDER_LESS_FLOW.as_slice(),
    }
}

pub fn total_steps(journey: JourneyType) -> usize {
    flow_for(journey).len()
}

/// Question at a 0-based step, or `None` when the index is out of range.
pub fn question_at(journey: JourneyType, index: i64) -> Option<&'static Question> {
    let index = usize::try_from(index).ok()?;
    flow_for(journey).get(index)
}
