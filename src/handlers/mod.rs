pub mod chat_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod study_plan_handler;
pub mod summary_handler;

pub use chat_handler::chat;
pub use health_handler::{health_check, root};
pub use quiz_handler::{generate_quiz, grade_quiz};
pub use study_plan_handler::study_recommendations;
pub use summary_handler::summarize_notes;
