use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::StressLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TherapyKind {
    Music,
    Yoga,
    Chatbot,
}

/// Follow-up suggested to the user after an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyRecommendation {
    pub primary: TherapyKind,
    pub message: String,
    pub therapies: Vec<String>,
}

pub fn recommend_therapy(level: StressLevel) -> TherapyRecommendation {
    let (primary, message, therapies): (_, _, &[&str]) = match level {
        StressLevel::Low => (
            TherapyKind::Music,
            "Your stress level is low. Enjoy some calming music to maintain your peace.",
            &["Music Therapy", "Light Meditation"],
        ),
        StressLevel::Moderate => (
            TherapyKind::Yoga,
            "Your stress level is moderate. Try yoga or breathing exercises to relax.",
            &["Yoga Therapy", "Breathing Exercises", "Music Therapy"],
        ),
        StressLevel::High => (
            TherapyKind::Chatbot,
            "Your stress level is high. Let's talk with our AI assistant for support.",
            &[
                "AI Chatbot Support",
                "Guided Meditation",
                "Breathing Exercises",
            ],
        ),
    };

    TherapyRecommendation {
        primary,
        message: message.to_string(),
        therapies: therapies.iter().map(|t| t.to_string()).collect(),
    }
}
