#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{AnswerEntry, QuizQuestion};
    use crate::models::dto::request::StudyTask;

    pub const BIOLOGY_NOTES: &str =
        "The mitochondria is the powerhouse of the cell. Mitochondria produce ATP through \
         respiration. An important concept is that enzymes accelerate respiration. \
         Photosynthesis is the key process plants use to capture energy.";

    /// One task per progress percentage, untitled and unprioritized.
    pub fn study_tasks(progress: &[f64]) -> Vec<StudyTask> {
        progress
            .iter()
            .map(|p| StudyTask {
                title: String::new(),
                progress: *p,
                due: None,
                priority: None,
            })
            .collect()
    }

    pub fn short_answer(answer: &str) -> QuizQuestion {
        QuizQuestion::ShortAnswer {
            prompt: format!("Explain '{}'", answer),
            answer: answer.to_string(),
            explanation: String::new(),
        }
    }

    pub fn free_text(value: &str) -> AnswerEntry {
        AnswerEntry::FreeText {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_study_tasks() {
        let tasks = study_tasks(&[10.0, 90.0]);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].progress, 90.0);
    }

    #[test]
    fn test_fixtures_biology_notes_have_sentences() {
        use crate::services::TextAnalyzer;

        assert!(TextAnalyzer::extract_sentences(BIOLOGY_NOTES).len() >= 4);
    }

    #[test]
    fn test_fixtures_question_pair() {
        let question = short_answer("mitochondria");
        let answer = free_text("mitochondria");

        assert_eq!(question.answer(), answer.value());
    }
}
