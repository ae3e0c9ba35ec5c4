pub mod chat_service;
pub mod model_helpers;
pub mod model_service;
pub mod quiz_attempt_service;
pub mod quiz_engine;
pub mod study_plan_service;
pub mod text_analyzer;

pub use chat_service::ChatService;
pub use model_service::{InferenceBackend, ModelService, OpenAiBackend};
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_engine::QuizEngine;
pub use study_plan_service::StudyPlanService;
pub use text_analyzer::TextAnalyzer;
