use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AnswerEntry, QuizQuestion};

fn default_num_questions() -> i16 {
    5
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_max_length() -> usize {
    200
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 50000))]
    pub notes: String,

    #[serde(default)]
    pub topic: String,

    #[serde(default = "default_difficulty")]
    pub difficulty: String,

    #[validate(range(min = 1, max = 10))]
    #[serde(default = "default_num_questions")]
    pub num_questions: i16,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SummarizeNotesRequest {
    #[validate(length(min = 1, max = 50000))]
    pub notes: String,

    #[validate(range(min = 20, max = 500))]
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 10000))]
    pub message: String,

    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyTask {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub progress: f64,

    #[serde(default)]
    pub due: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProgress {
    #[serde(default)]
    pub accuracy: Option<f64>,

    #[serde(default)]
    pub efficiency: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudyPlanRequest {
    #[validate(length(max = 100))]
    pub tasks: Vec<StudyTask>,

    #[serde(default)]
    pub user_progress: UserProgress,
}

/// Answers are positional: `answers[i]` responds to `questions[i]`. Missing
/// trailing entries grade as unanswered.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GradeQuizRequest {
    #[validate(length(max = 50))]
    pub questions: Vec<QuizQuestion>,

    #[validate(length(max = 50))]
    pub answers: Vec<AnswerEntry>,
}
