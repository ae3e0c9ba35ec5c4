use chrono::Utc;
use uuid::Uuid;

use crate::models::domain::{AnswerEntry, QuizAttempt, QuizAttemptQuestion, QuizQuestion};

/// Edit-distance tolerance for short-answer grading.
const MAX_EDIT_DISTANCE: usize = 2;

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade one answer against one question. Multiple choice requires an
    /// exact normalized match; short answers also pass on substring
    /// containment in either direction or a small edit distance.
    pub fn grade_question(question: &QuizQuestion, user_answer: &str) -> bool {
        let gold = question.answer().trim().to_lowercase();
        let user = user_answer.trim().to_lowercase();

        if user.is_empty() {
            return false;
        }

        match question {
            QuizQuestion::MultipleChoice { .. } => user == gold,
            QuizQuestion::ShortAnswer { .. } => {
                user.contains(&gold)
                    || gold.contains(&user)
                    || Self::levenshtein(&user, &gold) <= MAX_EDIT_DISTANCE
            }
        }
    }

    /// Unit-cost edit distance. Case-sensitive; grading passes in already
    /// normalized strings.
    pub fn levenshtein(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut prev: Vec<usize> = (0..=b.len()).collect();
        let mut curr = vec![0; b.len() + 1];

        for (i, ca) in a.iter().enumerate() {
            curr[0] = i + 1;
            for (j, cb) in b.iter().enumerate() {
                let substitution = prev[j] + usize::from(ca != cb);
                curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[b.len()]
    }

    /// Fraction of questions answered correctly, with absent positional
    /// answers treated as empty. An empty question set scores zero rather
    /// than dividing by zero.
    pub fn score_attempt(questions: &[QuizQuestion], answers: &[AnswerEntry]) -> f64 {
        if questions.is_empty() {
            return 0.0;
        }

        let correct = questions
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                let submitted = answers.get(*index).map(AnswerEntry::value).unwrap_or("");
                Self::grade_question(question, submitted)
            })
            .count();

        correct as f64 / questions.len() as f64
    }

    /// Grade a full attempt, producing per-question results and a
    /// timestamped attempt record.
    pub fn grade_attempt(questions: &[QuizQuestion], answers: &[AnswerEntry]) -> QuizAttempt {
        let question_results: Vec<QuizAttemptQuestion> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let submitted = answers.get(index).map(AnswerEntry::value).unwrap_or("");
                QuizAttemptQuestion {
                    question_index: index,
                    submitted_answer: submitted.to_string(),
                    is_correct: Self::grade_question(question, submitted),
                }
            })
            .collect();

        let correct_count = question_results.iter().filter(|r| r.is_correct).count();
        let score = if questions.is_empty() {
            0.0
        } else {
            correct_count as f64 / questions.len() as f64
        };

        QuizAttempt {
            id: Uuid::new_v4(),
            score,
            correct_count,
            question_count: questions.len(),
            question_results,
            submitted_at: Utc::now(),
        }
    }
}
