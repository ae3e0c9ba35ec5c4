use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestion;

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Monday-to-Friday schedule of study activities. Also deserialized from
/// model output, so every day defaults to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub monday: Vec<String>,
    #[serde(default)]
    pub tuesday: Vec<String>,
    #[serde(default)]
    pub wednesday: Vec<String>,
    #[serde(default)]
    pub thursday: Vec<String>,
    #[serde(default)]
    pub friday: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanResponse {
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub schedule: WeeklySchedule,
}
