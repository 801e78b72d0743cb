use zentrack_core::models::severity::Severity;

use crate::scoring::{Question, SeverityBand, SeverityScale};
use crate::Questionnaire;

/// ZenTrack quick check: a simplified 15-item anxiety self-report.
/// Each item rated by frequency, 0–4. Total 0–60.
pub struct Zen15;

const LABELS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];

impl Questionnaire for Zen15 {
    fn id(&self) -> &str {
        "zen15"
    }

    fn name(&self) -> &str {
        "ZenTrack Quick Check"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("nervous", "I feel nervous, anxious, or on edge."),
                ("worry_control", "I find it hard to stop or control worrying."),
                ("worry_many", "I worry too much about different things."),
                ("relaxing", "I have trouble relaxing."),
                ("restless", "I am so restless that it is hard to sit still."),
                ("irritable", "I become easily annoyed or irritable."),
                ("dread", "I feel afraid, as if something awful might happen."),
                ("sleep", "I have trouble falling or staying asleep."),
                ("concentration", "I find it difficult to concentrate."),
                ("heartbeat", "I notice my heart racing or pounding."),
                ("breathing", "I feel short of breath or tight in the chest."),
                ("muscle_tension", "My muscles feel tense or sore."),
                ("stomach", "I get stomach aches or nausea when stressed."),
                ("overwhelmed", "I feel overwhelmed by my daily responsibilities."),
                ("avoidance", "I avoid situations because they make me anxious."),
            ];

            items
                .iter()
                .map(|(id, text)| Question {
                    id: id.to_string(),
                    text: text.to_string(),
                    description: None,
                })
                .collect()
        });
        &QUESTIONS
    }

    fn option_labels(&self) -> &[&'static str] {
        &LABELS
    }

    fn scale(&self) -> &SeverityScale {
        static SCALE: std::sync::LazyLock<SeverityScale> = std::sync::LazyLock::new(|| {
            SeverityScale {
                bands: vec![
                    SeverityBand {
                        max_total: 10,
                        severity: Severity::Low,
                    },
                    SeverityBand {
                        max_total: 22,
                        severity: Severity::Mild,
                    },
                    SeverityBand {
                        max_total: 35,
                        severity: Severity::Moderate,
                    },
                ],
                above: Severity::High,
            }
        });
        &SCALE
    }
}
