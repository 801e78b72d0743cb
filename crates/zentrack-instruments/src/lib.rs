//! zentrack-instruments
//!
//! Self-assessment questionnaires and the engine that walks a user through
//! one. Pure logic with no I/O: each questionnaire defines its questions,
//! answer labels and severity bands, and [`engine::AssessmentEngine`] owns
//! the state of a single run.

pub mod engine;
pub mod error;
pub mod instruments;
pub mod scoring;

use scoring::{Question, SeverityScale, ANSWER_MAX};
use zentrack_core::models::severity::Severity;

/// Trait implemented by each questionnaire variant.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "ham_a", "zen15").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "HAM-A").
    fn name(&self) -> &str;

    /// Questions in presentation order.
    fn questions(&self) -> &[Question];

    /// Labels for answer values 0 through 4.
    fn option_labels(&self) -> &[&'static str];

    /// Score-to-severity bands.
    fn scale(&self) -> &SeverityScale;

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Highest achievable total, used as the percentage denominator.
    fn max_score(&self) -> u32 {
        u32::try_from(self.question_count())
            .unwrap_or(u32::MAX)
            .saturating_mul(u32::from(ANSWER_MAX))
    }

    fn classify(&self, total: u32) -> Severity {
        self.scale().classify(total)
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(instruments::ham_a::HamA),
        Box::new(instruments::zen15::Zen15),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
