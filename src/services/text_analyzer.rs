use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?\n]+").expect("sentence boundary pattern is valid"));

/// Signal words that mark a sentence as summary-worthy study material.
const SUMMARY_KEYWORDS: [&str; 10] = [
    "definition",
    "important",
    "key",
    "concept",
    "algorithm",
    "time complexity",
    "example",
    "steps",
    "note",
    "summary",
];

/// Minimum number of characters a token must exceed to count as a key term.
const MIN_TERM_LEN: usize = 3;

/// Stateless text analysis over raw study notes. Every function is total:
/// degenerate input produces an empty result, never an error.
pub struct TextAnalyzer;

impl TextAnalyzer {
    /// Split text into trimmed sentences on runs of `.`, `!`, `?` or newline.
    pub fn extract_sentences(text: &str) -> Vec<String> {
        SENTENCE_BOUNDARY
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Strip a surface token down to its alphanumeric characters.
    pub fn clean_token(token: &str) -> String {
        token.chars().filter(|c| c.is_alphanumeric()).collect()
    }

    /// The `limit` most frequent cleaned lowercase tokens longer than three
    /// characters, ordered by descending count. Ties keep first-seen order.
    pub fn extract_key_terms(text: &str, limit: usize) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for token in text.to_lowercase().split_whitespace() {
            let clean = Self::clean_token(token);
            if clean.chars().count() <= MIN_TERM_LEN {
                continue;
            }
            match counts.get_mut(&clean) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(clean.clone(), 1);
                    first_seen.push(clean);
                }
            }
        }

        // sort_by is stable, so equal counts preserve first-seen order
        let mut terms = first_seen;
        terms.sort_by(|a, b| counts[b].cmp(&counts[a]));
        terms.truncate(limit);
        terms
    }

    /// Relevance heuristic: signal-word hits weigh double, sentence length
    /// stands in for information density but is capped so it cannot dominate.
    pub fn score_sentence_for_summary(sentence: &str) -> f64 {
        let lower = sentence.to_lowercase();
        let keyword_hits = SUMMARY_KEYWORDS
            .iter()
            .filter(|keyword| lower.contains(*keyword))
            .count();
        let length_bonus = (sentence.chars().count() as f64 / 80.0).min(3.0);

        2.0 * keyword_hits as f64 + length_bonus
    }

    /// Top-ranked sentences, between 3 and 6 depending on input size, with
    /// case-insensitive duplicates dropped. The selection is never re-filled
    /// after deduplication.
    pub fn summarize(text: &str) -> Vec<String> {
        let sentences = Self::extract_sentences(text);
        if sentences.is_empty() {
            return Vec::new();
        }

        let target = (sentences.len() / 6).clamp(3, 6);

        let mut ranked = sentences;
        ranked.sort_by(|a, b| {
            Self::score_sentence_for_summary(b)
                .partial_cmp(&Self::score_sentence_for_summary(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut seen: HashSet<String> = HashSet::new();
        ranked
            .into_iter()
            .take(target)
            .filter(|sentence| seen.insert(sentence.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_sentences_splits_on_terminators_and_newlines() {
        let text = "First sentence. Second one! Third?\nFourth line";
        let sentences = TextAnalyzer::extract_sentences(text);

        assert_eq!(
            sentences,
            vec!["First sentence", "Second one", "Third", "Fourth line"]
        );
    }

    #[test]
    fn extract_sentences_drops_empty_spans() {
        let sentences = TextAnalyzer::extract_sentences("... !!! \n\n");

        assert!(sentences.is_empty());
    }

    #[test]
    fn extract_key_terms_ranks_by_frequency() {
        let text = "The mitochondria is the powerhouse of the cell. \
                    Mitochondria produce ATP through respiration.";
        let terms = TextAnalyzer::extract_key_terms(text, 10);

        assert_eq!(terms.first(), Some(&"mitochondria".to_string()));
        assert!(terms.contains(&"powerhouse".to_string()));
        // "the", "is", "of" are too short to qualify
        assert!(!terms.contains(&"the".to_string()));
    }

    #[test]
    fn extract_key_terms_breaks_ties_by_first_occurrence() {
        let terms = TextAnalyzer::extract_key_terms("zebra apple zebra apple banana", 10);

        assert_eq!(terms[0], "zebra");
        assert_eq!(terms[1], "apple");
        assert_eq!(terms[2], "banana");
    }

    #[test]
    fn extract_key_terms_strips_punctuation_and_lowercases() {
        let terms = TextAnalyzer::extract_key_terms("Sorting, sorting; SORTING!", 10);

        assert_eq!(terms, vec!["sorting".to_string()]);
    }

    #[test]
    fn extract_key_terms_respects_limit() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliett kilo lima";
        let terms = TextAnalyzer::extract_key_terms(text, 10);

        assert_eq!(terms.len(), 10);
    }

    #[test]
    fn score_rewards_keywords_over_length() {
        let keyword_sentence = "An important concept to note";
        let long_sentence = "a".repeat(400);

        let keyword_score = TextAnalyzer::score_sentence_for_summary(keyword_sentence);
        let length_score = TextAnalyzer::score_sentence_for_summary(&long_sentence);

        // three keyword hits at 2.0 each beat the capped length bonus
        assert!(keyword_score > length_score);
        assert_eq!(length_score, 3.0);
    }

    #[test]
    fn summarize_returns_empty_for_empty_input() {
        assert!(TextAnalyzer::summarize("").is_empty());
        assert!(TextAnalyzer::summarize("   \n  ").is_empty());
    }

    #[test]
    fn summarize_prefers_keyword_heavy_sentences() {
        let text = "Cats nap\n\
                    The key concept here is an important algorithm definition\n\
                    Dogs bark\n\
                    Birds sing\n\
                    Fish swim";
        let summary = TextAnalyzer::summarize(text);

        assert_eq!(summary.len(), 3);
        assert_eq!(
            summary[0],
            "The key concept here is an important algorithm definition"
        );
    }

    #[test]
    fn summarize_dedupes_case_insensitively_without_refill() {
        let text = "An important concept\nAN IMPORTANT CONCEPT\nan important concept\n\
                    filler one\nfiller two\nfiller three";
        let summary = TextAnalyzer::summarize(text);

        // target is 3, duplicates are dropped and never topped back up
        assert_eq!(summary, vec!["An important concept".to_string()]);
    }
}
