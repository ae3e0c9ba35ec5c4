use rand::Rng;

use crate::models::domain::QuizQuestion;
use crate::services::text_analyzer::TextAnalyzer;

/// Hard cap on the size of a generated question set.
const MAX_QUESTIONS: usize = 6;
/// Generation budget per question kind, applied in order.
const MAX_BLANK_QUESTIONS: usize = 3;
const MAX_TERM_QUESTIONS: usize = 2;
/// Key terms considered for blanks, distractors and enumeration.
const KEY_TERM_LIMIT: usize = 10;
/// Sentences at or below this length are too thin to question.
const MIN_QUESTION_SENTENCE_LEN: usize = 10;
/// Option count for a blank-completion question, correct answer included.
const MAX_OPTIONS: usize = 4;

const BLANK_MARKER: &str = "_____";

/// Heuristic quiz synthesis over raw note text. This is the local fallback
/// path when no inference backend is configured; the output shape matches
/// what the model path produces.
pub struct QuizEngine;

impl QuizEngine {
    /// Generate up to six questions: blank-completion multiple choice first,
    /// then explain-this-term items, one true/false item, and one
    /// term-enumeration item.
    pub fn generate(text: &str) -> Vec<QuizQuestion> {
        Self::generate_with_rng(text, &mut rand::rng())
    }

    /// Same as [`generate`](Self::generate) with the true/false sentence draw
    /// taken from the caller's RNG, for deterministic tests.
    pub fn generate_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<QuizQuestion> {
        let key_terms = TextAnalyzer::extract_key_terms(text, KEY_TERM_LIMIT);
        let sentences: Vec<String> = TextAnalyzer::extract_sentences(text)
            .into_iter()
            .filter(|s| s.chars().count() > MIN_QUESTION_SENTENCE_LEN)
            .collect();

        let mut questions = Vec::new();

        for sentence in &sentences {
            if questions.len() >= MAX_BLANK_QUESTIONS {
                break;
            }
            if let Some(question) = Self::blank_question(sentence, &key_terms) {
                questions.push(question);
            }
        }

        for term in key_terms.iter().take(MAX_TERM_QUESTIONS) {
            questions.push(QuizQuestion::ShortAnswer {
                prompt: format!("Explain the significance of '{}' in these notes.", term),
                answer: term.clone(),
                explanation: format!(
                    "'{}' appears frequently in your notes, so it is likely a core idea.",
                    term
                ),
            });
        }

        // Every true/false item affirms a sentence verbatim; false statements
        // are never generated.
        if !sentences.is_empty() {
            let sentence = &sentences[rng.random_range(0..sentences.len())];
            questions.push(QuizQuestion::ShortAnswer {
                prompt: format!("True or False: {}", sentence),
                answer: "True".to_string(),
                explanation: "The statement is taken directly from your notes.".to_string(),
            });
        }

        if key_terms.len() >= 3 {
            questions.push(QuizQuestion::ShortAnswer {
                prompt: "Name three key terms covered by these notes.".to_string(),
                answer: key_terms[..3].join(", "),
                explanation: "These are the most frequent terms in your notes.".to_string(),
            });
        }

        questions.truncate(MAX_QUESTIONS);
        questions
    }

    /// Blank the first key-term word of a sentence and surround the answer
    /// with distractors drawn from the other key terms. Returns `None` when
    /// no word of the sentence cleans to a key term.
    fn blank_question(sentence: &str, key_terms: &[String]) -> Option<QuizQuestion> {
        let word = sentence.split_whitespace().find(|word| {
            let clean = TextAnalyzer::clean_token(word).to_lowercase();
            key_terms.contains(&clean)
        })?;

        // Original casing from the sentence; distractors stay lowercase, so
        // the option list can be mixed-case.
        let correct = TextAnalyzer::clean_token(word);
        let correct_lower = correct.to_lowercase();

        let mut options = vec![correct.clone()];
        options.extend(
            key_terms
                .iter()
                .filter(|term| **term != correct_lower)
                .take(MAX_OPTIONS - 1)
                .cloned(),
        );
        options.truncate(MAX_OPTIONS);
        options.sort();

        Some(QuizQuestion::MultipleChoice {
            prompt: format!("Complete: {}", sentence.replacen(word, BLANK_MARKER, 1)),
            options,
            answer: correct.clone(),
            explanation: format!("'{}' is a key concept in your notes.", correct),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const MITOCHONDRIA_NOTES: &str = "The mitochondria is the powerhouse of the cell. \
                                      Mitochondria produce ATP through respiration.";

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn generate_never_exceeds_six_questions() {
        let text = "Photosynthesis converts sunlight into energy inside chloroplasts. \
                    Chlorophyll absorbs sunlight during photosynthesis. \
                    Glucose stores the captured energy for later use. \
                    Respiration releases energy from glucose molecules. \
                    Enzymes accelerate respiration inside every living cell. \
                    Chloroplasts contain chlorophyll and enzymes together.";
        let questions = QuizEngine::generate_with_rng(text, &mut seeded());

        assert!(questions.len() <= 6);
        assert_eq!(questions.len(), 6);
    }

    #[test]
    fn generate_on_empty_text_is_empty() {
        assert!(QuizEngine::generate_with_rng("", &mut seeded()).is_empty());
    }

    #[test]
    fn blank_question_lists_correct_term_among_sorted_options() {
        let questions = QuizEngine::generate_with_rng(MITOCHONDRIA_NOTES, &mut seeded());

        let (options, answer) = questions
            .iter()
            .find_map(|q| match q {
                QuizQuestion::MultipleChoice {
                    options, answer, ..
                } => Some((options, answer)),
                _ => None,
            })
            .expect("at least one multiple choice question");

        assert!(answer.eq_ignore_ascii_case("mitochondria"));
        assert!(options.len() <= 4);
        assert!(options.contains(answer));
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(*options, sorted);
    }

    #[test]
    fn blank_question_prompt_contains_marker() {
        let questions = QuizEngine::generate_with_rng(MITOCHONDRIA_NOTES, &mut seeded());

        let prompt = questions
            .iter()
            .find_map(|q| match q {
                QuizQuestion::MultipleChoice { prompt, .. } => Some(prompt),
                _ => None,
            })
            .expect("at least one multiple choice question");

        assert!(prompt.contains("_____"));
        assert!(prompt.starts_with("Complete: "));
    }

    #[test]
    fn options_never_duplicate_the_correct_answer() {
        let questions = QuizEngine::generate_with_rng(MITOCHONDRIA_NOTES, &mut seeded());

        for question in &questions {
            if let QuizQuestion::MultipleChoice {
                options, answer, ..
            } = question
            {
                let matches = options
                    .iter()
                    .filter(|o| o.to_lowercase() == answer.to_lowercase())
                    .count();
                assert_eq!(matches, 1);
            }
        }
    }

    #[test]
    fn true_false_item_always_affirms() {
        let questions = QuizEngine::generate_with_rng(MITOCHONDRIA_NOTES, &mut seeded());

        let answer = questions
            .iter()
            .find_map(|q| match q {
                QuizQuestion::ShortAnswer { prompt, answer, .. }
                    if prompt.starts_with("True or False:") =>
                {
                    Some(answer)
                }
                _ => None,
            })
            .expect("a true/false question");

        assert_eq!(answer, "True");
    }

    #[test]
    fn enumeration_item_joins_top_three_terms() {
        let questions = QuizEngine::generate_with_rng(MITOCHONDRIA_NOTES, &mut seeded());

        let answer = questions
            .iter()
            .find_map(|q| match q {
                QuizQuestion::ShortAnswer { prompt, answer, .. }
                    if prompt.starts_with("Name three") =>
                {
                    Some(answer)
                }
                _ => None,
            })
            .expect("an enumeration question");

        assert!(answer.starts_with("mitochondria, "));
        assert_eq!(answer.split(", ").count(), 3);
    }

    #[test]
    fn no_enumeration_with_fewer_than_three_key_terms() {
        // only "zzzz" and "wwww" qualify as key terms
        let questions = QuizEngine::generate_with_rng("zzzz and wwww go far", &mut seeded());

        assert!(!questions
            .iter()
            .any(|q| q.prompt().starts_with("Name three")));
    }

    #[test]
    fn no_true_false_without_sentences() {
        // every sentence is at or below the minimum question length
        let questions = QuizEngine::generate_with_rng("Short. Tiny. Ok.", &mut seeded());

        assert!(!questions
            .iter()
            .any(|q| q.prompt().starts_with("True or False:")));
    }

    #[test]
    fn explain_term_items_target_most_frequent_terms() {
        let questions = QuizEngine::generate_with_rng(MITOCHONDRIA_NOTES, &mut seeded());

        let explain_answers: Vec<&str> = questions
            .iter()
            .filter_map(|q| match q {
                QuizQuestion::ShortAnswer { prompt, answer, .. }
                    if prompt.starts_with("Explain") =>
                {
                    Some(answer.as_str())
                }
                _ => None,
            })
            .collect();

        assert_eq!(explain_answers.len(), 2);
        assert_eq!(explain_answers[0], "mitochondria");
    }
}
