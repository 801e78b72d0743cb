use zentrack_core::models::severity::Severity;

use crate::scoring::{Question, SeverityBand, SeverityScale};
use crate::Questionnaire;

/// HAM-A: Hamilton Anxiety Rating Scale.
/// 14 items, each rated 0–4. Total 0–56.
pub struct HamA;

const LABELS: [&str; 5] = ["Not present", "Mild", "Moderate", "Severe", "Very Severe"];

impl Questionnaire for HamA {
    fn id(&self) -> &str {
        "ham_a"
    }

    fn name(&self) -> &str {
        "HAM-A"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "anxious_mood",
                    "Anxious mood",
                    "Worries, anticipation of the worst, fearful anticipation, irritability",
                ),
                (
                    "tension",
                    "Tension",
                    "Feelings of tension, fatigability, startle response, moved to tears easily, trembling, restlessness",
                ),
                (
                    "fears",
                    "Fears",
                    "Of dark, of strangers, of being left alone, of animals, of traffic, of crowds",
                ),
                (
                    "insomnia",
                    "Insomnia",
                    "Difficulty falling asleep, broken sleep, unsatisfying sleep, fatigue on waking, nightmares",
                ),
                (
                    "intellectual",
                    "Intellectual",
                    "Difficulty in concentration, poor memory",
                ),
                (
                    "depressed_mood",
                    "Depressed mood",
                    "Loss of interest, lack of pleasure in hobbies, depression, early waking",
                ),
                (
                    "somatic_muscular",
                    "Somatic (muscular)",
                    "Pains and aches, twitching, stiffness, grinding of teeth, unsteady voice",
                ),
                (
                    "somatic_sensory",
                    "Somatic (sensory)",
                    "Tinnitus, blurring of vision, hot and cold flushes, feelings of weakness, pricking sensation",
                ),
                (
                    "cardiovascular",
                    "Cardiovascular symptoms",
                    "Tachycardia, palpitations, pain in chest, throbbing of vessels, fainting feelings",
                ),
                (
                    "respiratory",
                    "Respiratory symptoms",
                    "Pressure or constriction in chest, choking feelings, sighing, dyspnea",
                ),
                (
                    "gastrointestinal",
                    "Gastrointestinal symptoms",
                    "Difficulty swallowing, abdominal pain, nausea, vomiting, loss of weight, constipation",
                ),
                (
                    "genitourinary",
                    "Genitourinary symptoms",
                    "Frequency or urgency of micturition, amenorrhea, menorrhagia, loss of libido",
                ),
                (
                    "autonomic",
                    "Autonomic symptoms",
                    "Dry mouth, flushing, pallor, tendency to sweat, giddiness, tension headache",
                ),
                (
                    "behavior_at_interview",
                    "Behavior at interview",
                    "Fidgeting, restlessness or pacing, tremor of hands, furrowed brow, strained face",
                ),
            ];

            items
                .iter()
                .map(|(id, text, description)| Question {
                    id: id.to_string(),
                    text: text.to_string(),
                    description: Some(description.to_string()),
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
                        max_total: 17,
                        severity: Severity::Low,
                    },
                    SeverityBand {
                        max_total: 24,
                        severity: Severity::Mild,
                    },
                    SeverityBand {
                        max_total: 30,
                        severity: Severity::Moderate,
                    },
                ],
                above: Severity::High,
            }
        });
        &SCALE
    }
}
