use serde_json::{json, Value};

use zentrack_instruments::engine::{AssessmentEngine, Completion, UnsetPolicy};
use zentrack_instruments::get_questionnaire;

#[test]
fn completion_uses_snake_case() {
    let encoded: Vec<Value> = [
        Completion::InProgress,
        Completion::ReadyToScore,
        Completion::Completed,
    ]
    .iter()
    .map(|c| serde_json::to_value(c).unwrap())
    .collect();
    assert_eq!(encoded, [json!("in_progress"), json!("ready_to_score"), json!("completed")]);

    let parsed: Completion = serde_json::from_str("\"ready_to_score\"").unwrap();
    assert_eq!(parsed, Completion::ReadyToScore);
    assert_eq!(
        serde_json::to_value(UnsetPolicy::RejectIncomplete).unwrap(),
        json!("reject_incomplete")
    );
}

#[test]
fn snapshot_wire_form() {
    let mut engine = AssessmentEngine::new();
    engine.start(get_questionnaire("zen15").unwrap());
    engine.select_answer(3).unwrap();
    engine.go_to_previous().unwrap();

    let value = serde_json::to_value(engine.snapshot().unwrap()).unwrap();
    assert_eq!(value["questionnaire_id"], "zen15");
    assert_eq!(value["question_count"], 15);
    assert_eq!(value["cursor"], 0);
    assert_eq!(value["completion"], "in_progress");
    assert_eq!(value["selected"], 3);
    assert_eq!(value["can_go_back"], false);
    assert_eq!(value["answers"][0], 3);
    assert_eq!(value["answers"][1], Value::Null);
    assert_eq!(value["option_labels"].as_array().unwrap().len(), 5);
    assert!(value["current_question"]["text"].is_string());
}
