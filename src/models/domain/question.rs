use serde::{Deserialize, Serialize};

/// A generated quiz item. True/false and term-enumeration items share the
/// `ShortAnswer` variant: their gold answers are the literal `"True"` and a
/// comma-joined term list respectively.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizQuestion {
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        answer: String,
        explanation: String,
    },
    ShortAnswer {
        prompt: String,
        answer: String,
        explanation: String,
    },
}

impl QuizQuestion {
    pub fn prompt(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { prompt, .. } => prompt,
            QuizQuestion::ShortAnswer { prompt, .. } => prompt,
        }
    }

    /// The gold answer used for grading.
    pub fn answer(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { answer, .. } => answer,
            QuizQuestion::ShortAnswer { answer, .. } => answer,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            QuizQuestion::MultipleChoice { explanation, .. } => explanation,
            QuizQuestion::ShortAnswer { explanation, .. } => explanation,
        }
    }
}

/// A submitted answer for one question, matched to questions by position.
/// The variant is decided by the question it answers, not sniffed from the
/// submitted value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerEntry {
    SelectedOption { value: String },
    FreeText { value: String },
}

impl AnswerEntry {
    pub fn value(&self) -> &str {
        match self {
            AnswerEntry::SelectedOption { value } => value,
            AnswerEntry::FreeText { value } => value,
        }
    }
}
