pub mod attempt;
pub mod question;

pub use attempt::{QuizAttempt, QuizAttemptQuestion};
pub use question::{AnswerEntry, QuizQuestion};
