use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use zentrack_instruments::error::InstrumentError;
use zentrack_instruments::scoring::{Question, SeverityScale};
use zentrack_instruments::{all_questionnaires, get_questionnaire};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    id: String,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    id: String,
    name: String,
    max_score: u32,
    option_labels: Vec<String>,
    questions: Vec<Question>,
    scale: SeverityScale,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires: Vec<QuestionnaireSummary> = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            name: q.name().to_string(),
            question_count: q.question_count(),
        })
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire =
        get_questionnaire(&id).ok_or(InstrumentError::UnknownQuestionnaire(id))?;

    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        name: questionnaire.name().to_string(),
        max_score: questionnaire.max_score(),
        option_labels: questionnaire
            .option_labels()
            .iter()
            .map(|l| l.to_string())
            .collect(),
        questions: questionnaire.questions().to_vec(),
        scale: questionnaire.scale().clone(),
    }))
}
