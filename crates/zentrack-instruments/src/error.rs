use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("unknown unset policy '{0}' (expected count_as_zero or reject_incomplete)")]
    UnknownUnsetPolicy(String),
}

/// Failures reported by [`crate::engine::AssessmentEngine`].
///
/// Every variant is caused by the caller and is not retryable. The engine
/// never applies part of an operation that fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("answer {value} is outside [0, 4]")]
    InvalidAnswer { value: i32 },

    #[error("invalid state: {0}")]
    InvalidState(#[from] StateViolation),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("no assessment run is active")]
    NoActiveRun,

    #[error("the run is completed; reset or start a new one")]
    AlreadyCompleted,

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("the last question has not been answered")]
    NotReadyToScore,

    #[error("unanswered questions: {indices:?}")]
    UnansweredQuestions { indices: Vec<usize> },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("cursor {cursor} is outside a {len}-question run")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("questionnaire '{0}' has no questions")]
    EmptyQuestionnaire(String),
}
