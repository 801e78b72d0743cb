//! The assessment run state machine.
//!
//! ```text
//!            start                 answer last question        compute_score
//! [no run] -------> InProgress ---------------------> ReadyToScore -------------> Completed
//!                       ^                                  |                          |
//!                       +------- go_to_previous -----------+                          |
//!                       +---------------------------- reset / start -----------------+
//! ```
//!
//! One engine instance owns exactly one run at a time. Callers that need
//! several concurrent runs (one per user, say) create one engine each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use zentrack_core::models::score::ScoreResult;

use crate::error::{AssessmentError, InstrumentError, StateViolation};
use crate::scoring::{self, Question};
use crate::Questionnaire;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Completion {
    InProgress,
    ReadyToScore,
    Completed,
}

/// How `compute_score` treats questions that were never answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetPolicy {
    /// Unanswered questions contribute 0 to the total.
    #[default]
    CountAsZero,
    /// Scoring fails while any question is unanswered.
    RejectIncomplete,
}

impl FromStr for UnsetPolicy {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count_as_zero" => Ok(UnsetPolicy::CountAsZero),
            "reject_incomplete" => Ok(UnsetPolicy::RejectIncomplete),
            other => Err(InstrumentError::UnknownUnsetPolicy(other.to_string())),
        }
    }
}

/// Read-only view of a run, suitable for rendering the current question.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct EngineSnapshot {
    pub questionnaire_id: String,
    pub questionnaire_name: String,
    pub question_count: usize,
    pub cursor: usize,
    pub completion: Completion,
    pub answers: Vec<Option<u8>>,
    pub current_question: Question,
    /// Answer previously chosen for the current question, if any.
    pub selected: Option<u8>,
    pub option_labels: Vec<String>,
    pub can_go_back: bool,
}

struct Run {
    questionnaire: Box<dyn Questionnaire>,
    answers: Vec<Option<u8>>,
    cursor: usize,
    completion: Completion,
}

impl Run {
    fn fresh(questionnaire: Box<dyn Questionnaire>) -> Self {
        let len = questionnaire.question_count();
        Self {
            questionnaire,
            answers: vec![None; len],
            cursor: 0,
            completion: Completion::InProgress,
        }
    }

    fn last_index(&self) -> usize {
        self.answers.len().saturating_sub(1)
    }
}

#[derive(Default)]
pub struct AssessmentEngine {
    policy: UnsetPolicy,
    run: Option<Run>,
}

impl fmt::Debug for AssessmentEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("AssessmentEngine");
        s.field("policy", &self.policy);
        if let Some(run) = &self.run {
            s.field("questionnaire", &run.questionnaire.id())
                .field("cursor", &run.cursor)
                .field("completion", &run.completion)
                .field("answers", &run.answers);
        }
        s.finish()
    }
}

impl AssessmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnsetPolicy) -> Self {
        Self { policy, run: None }
    }

    pub fn policy(&self) -> UnsetPolicy {
        self.policy
    }

    /// Begin a fresh run, discarding any run already in progress.
    pub fn start(&mut self, questionnaire: Box<dyn Questionnaire>) {
        tracing::debug!(
            questionnaire = questionnaire.id(),
            questions = questionnaire.question_count(),
            "assessment started"
        );
        self.run = Some(Run::fresh(questionnaire));
    }

    /// Rebuild a run from saved progress: the answer vector and the
    /// question the user was on.
    ///
    /// The run is ready to score when the cursor is on the last question
    /// and that question is answered. Earlier slots may still be unset;
    /// [`UnsetPolicy`] decides how scoring treats them.
    pub fn resume(
        &mut self,
        questionnaire: Box<dyn Questionnaire>,
        saved: &[Option<i32>],
        cursor: usize,
    ) -> Result<(), AssessmentError> {
        let expected = questionnaire.question_count();
        if expected == 0 {
            return Err(
                StateViolation::EmptyQuestionnaire(questionnaire.id().to_string()).into(),
            );
        }
        if saved.len() != expected {
            return Err(StateViolation::AnswerCountMismatch {
                expected,
                actual: saved.len(),
            }
            .into());
        }
        if cursor >= expected {
            return Err(StateViolation::CursorOutOfRange {
                cursor,
                len: expected,
            }
            .into());
        }

        let answers = saved
            .iter()
            .map(|slot| match slot {
                Some(value) => scoring::answer_value(*value)
                    .map(Some)
                    .ok_or(AssessmentError::InvalidAnswer { value: *value }),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let last_answered = answers.get(cursor).is_some_and(Option::is_some);
        let completion = if cursor == expected - 1 && last_answered {
            Completion::ReadyToScore
        } else {
            Completion::InProgress
        };

        tracing::debug!(
            questionnaire = questionnaire.id(),
            cursor,
            ?completion,
            "assessment resumed"
        );
        self.run = Some(Run {
            questionnaire,
            answers,
            cursor,
            completion,
        });
        Ok(())
    }

    /// Record an answer for the current question and move forward.
    pub fn select_answer(&mut self, value: i32) -> Result<(), AssessmentError> {
        let answer =
            scoring::answer_value(value).ok_or(AssessmentError::InvalidAnswer { value })?;
        let run = self.run.as_mut().ok_or(StateViolation::NoActiveRun)?;
        if run.completion == Completion::Completed {
            return Err(StateViolation::AlreadyCompleted.into());
        }

        let last = run.last_index();
        let slot = run
            .answers
            .get_mut(run.cursor)
            .ok_or_else(|| {
                StateViolation::EmptyQuestionnaire(run.questionnaire.id().to_string())
            })?;
        *slot = Some(answer);

        if run.cursor < last {
            run.cursor += 1;
        } else {
            run.completion = Completion::ReadyToScore;
            tracing::debug!(questionnaire = run.questionnaire.id(), "assessment ready to score");
        }
        Ok(())
    }

    /// Step back one question. Leaving the last question un-readies the run.
    pub fn go_to_previous(&mut self) -> Result<(), AssessmentError> {
        let run = self.run.as_mut().ok_or(StateViolation::NoActiveRun)?;
        if run.completion == Completion::Completed {
            return Err(StateViolation::AlreadyCompleted.into());
        }
        if run.cursor == 0 {
            return Err(StateViolation::AtFirstQuestion.into());
        }

        run.cursor -= 1;
        if run.completion == Completion::ReadyToScore {
            run.completion = Completion::InProgress;
        }
        Ok(())
    }

    /// Score the run and mark it completed.
    pub fn compute_score(&mut self) -> Result<ScoreResult, AssessmentError> {
        let policy = self.policy;
        let run = self.run.as_mut().ok_or(StateViolation::NoActiveRun)?;
        match run.completion {
            Completion::ReadyToScore => {}
            Completion::Completed => return Err(StateViolation::AlreadyCompleted.into()),
            Completion::InProgress => return Err(StateViolation::NotReadyToScore.into()),
        }

        if policy == UnsetPolicy::RejectIncomplete {
            let indices: Vec<usize> = run
                .answers
                .iter()
                .enumerate()
                .filter(|(_, a)| a.is_none())
                .map(|(i, _)| i)
                .collect();
            if !indices.is_empty() {
                return Err(StateViolation::UnansweredQuestions { indices }.into());
            }
        }

        let total: u32 = run.answers.iter().map(|a| u32::from(a.unwrap_or(0))).sum();
        let max_score = run.questionnaire.max_score();
        let result = ScoreResult {
            questionnaire_id: run.questionnaire.id().to_string(),
            total,
            max_score,
            percentage: scoring::percentage(total, max_score),
            severity: run.questionnaire.classify(total),
        };
        run.completion = Completion::Completed;

        tracing::info!(
            questionnaire = %result.questionnaire_id,
            total = result.total,
            percentage = result.percentage,
            severity = %result.severity,
            "assessment scored"
        );
        Ok(result)
    }

    /// Restart the current questionnaire from the first question.
    pub fn reset(&mut self) -> Result<(), AssessmentError> {
        let run = self.run.take().ok_or(StateViolation::NoActiveRun)?;
        self.start(run.questionnaire);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    pub fn completion(&self) -> Option<Completion> {
        self.run.as_ref().map(|r| r.completion)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.run.as_ref().map(|r| r.cursor)
    }

    pub fn answers(&self) -> Option<&[Option<u8>]> {
        self.run.as_ref().map(|r| r.answers.as_slice())
    }

    pub fn questionnaire(&self) -> Option<&dyn Questionnaire> {
        self.run.as_ref().map(|r| r.questionnaire.as_ref())
    }

    /// Whether the UI should keep the user on the assessment screen: a run
    /// has been started and not yet scored.
    pub fn blocks_navigation(&self) -> bool {
        self.completion()
            .is_some_and(|c| c != Completion::Completed)
    }

    pub fn snapshot(&self) -> Option<EngineSnapshot> {
        let run = self.run.as_ref()?;
        let questionnaire = run.questionnaire.as_ref();
        let current_question = questionnaire.questions().get(run.cursor)?.clone();

        Some(EngineSnapshot {
            questionnaire_id: questionnaire.id().to_string(),
            questionnaire_name: questionnaire.name().to_string(),
            question_count: run.answers.len(),
            cursor: run.cursor,
            completion: run.completion,
            answers: run.answers.clone(),
            current_question,
            selected: run.answers.get(run.cursor).copied().flatten(),
            option_labels: questionnaire
                .option_labels()
                .iter()
                .map(|l| l.to_string())
                .collect(),
            can_go_back: run.cursor > 0 && run.completion != Completion::Completed,
        })
    }
}
