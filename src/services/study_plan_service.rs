use crate::models::dto::request::{StudyTask, UserProgress};
use crate::models::dto::response::{StudyPlanResponse, WeeklySchedule};

/// A task at or beyond this progress counts as completed.
const COMPLETED_THRESHOLD: f64 = 80.0;

/// Rule-based study planning used when no inference backend is available.
/// Recommendations are tiered on the share of completed tasks.
pub struct StudyPlanService;

impl StudyPlanService {
    pub fn fallback_plan(tasks: &[StudyTask], _progress: &UserProgress) -> StudyPlanResponse {
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|t| t.progress >= COMPLETED_THRESHOLD)
            .count();
        let completion_rate = if total > 0 {
            completed as f64 / total as f64
        } else {
            0.0
        };

        let recommendations: Vec<String> = if completion_rate < 0.3 {
            vec![
                "Focus on completing high-priority tasks first",
                "Break large tasks into smaller, manageable chunks",
                "Use the Pomodoro technique: 25 min study + 5 min break",
                "Set specific daily goals to build momentum",
            ]
        } else if completion_rate < 0.7 {
            vec![
                "Great progress! Maintain your study rhythm",
                "Review completed material to reinforce learning",
                "Take practice quizzes to test understanding",
                "Identify and strengthen weak areas",
            ]
        } else {
            vec![
                "Excellent work! You're on track",
                "Focus on final review and practice tests",
                "Teach concepts to others for deeper understanding",
                "Plan your exam strategy and time management",
            ]
        }
        .into_iter()
        .map(str::to_string)
        .collect();

        let mut schedule = Self::default_schedule();

        if let Some(task) = tasks
            .iter()
            .find(|t| t.priority.as_deref() == Some("High"))
        {
            let title = if task.title.is_empty() {
                "priority task"
            } else {
                &task.title
            };
            schedule.monday[0] = format!("Focus on: {}", title);
        }

        StudyPlanResponse {
            recommendations,
            schedule,
        }
    }

    fn default_schedule() -> WeeklySchedule {
        WeeklySchedule {
            monday: vec![
                "Morning: Review high-priority material".to_string(),
                "Afternoon: Practice problems and exercises".to_string(),
            ],
            tuesday: vec![
                "Morning: Focus on challenging topics".to_string(),
                "Afternoon: Take practice quiz".to_string(),
            ],
            wednesday: vec![
                "Morning: Work on pending assignments".to_string(),
                "Afternoon: Group study or review session".to_string(),
            ],
            thursday: vec![
                "Morning: Review completed topics".to_string(),
                "Afternoon: Prepare for upcoming deadlines".to_string(),
            ],
            friday: vec![
                "Morning: Weekly review and consolidation".to_string(),
                "Afternoon: Light study and plan next week".to_string(),
            ],
        }
    }
}
