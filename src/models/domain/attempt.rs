use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grading result for a single question within an attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttemptQuestion {
    pub question_index: usize,
    pub submitted_answer: String,
    pub is_correct: bool,
}

/// A graded quiz attempt. The score is the fraction of correctly answered
/// questions in `[0, 1]`; an empty question set scores exactly zero.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub score: f64,
    pub correct_count: usize,
    pub question_count: usize,
    pub question_results: Vec<QuizAttemptQuestion>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_attempt_serializes_score_and_results() {
        let attempt = QuizAttempt {
            id: Uuid::new_v4(),
            score: 0.6,
            correct_count: 3,
            question_count: 5,
            question_results: vec![QuizAttemptQuestion {
                question_index: 0,
                submitted_answer: "mitochondria".to_string(),
                is_correct: true,
            }],
            submitted_at: Utc::now(),
        };

        let json = serde_json::to_string(&attempt).expect("attempt should serialize");
        let parsed: QuizAttempt = serde_json::from_str(&json).expect("attempt should deserialize");

        assert_eq!(attempt, parsed);
        assert_eq!(parsed.correct_count, 3);
    }
}
