use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static PROMPT_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[/?INST\]|</?s>").expect("prompt marker pattern is valid"));

static JSON_CANDIDATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // an object that visibly carries a "questions" array
        Regex::new(r#"(?s)\{[^{}]*"questions"[^{}]*\[[^\]]*\][^{}]*\}"#)
            .expect("questions pattern is valid"),
        Regex::new(r"(?s)\{.*\}").expect("object pattern is valid"),
    ]
});

/// Lines a model keeps repeating past this length are probably real content,
/// not echo.
const SHORT_LINE_LEN: usize = 120;

/// Strip obvious repeated lines and echoed prompt markers from model output.
/// Local models in particular tend to repeat themselves when pushed past
/// their context.
pub fn clean_repeated_lines(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");

    let mut cleaned: Vec<String> = Vec::new();
    let mut prev: Option<String> = None;

    for raw in normalized.split('\n') {
        let line = raw.trim_end();

        if line.trim().is_empty() {
            if prev.is_some() && cleaned.last().is_some_and(|l| !l.trim().is_empty()) {
                cleaned.push(String::new());
            }
            prev = Some(String::new());
            continue;
        }

        if prev.as_deref() == Some(line) {
            continue;
        }

        let stripped = PROMPT_MARKERS.replace_all(line, "");
        let stripped = stripped.trim();
        if !stripped.is_empty() {
            cleaned.push(stripped.to_string());
        }
        prev = Some(line.to_string());
    }

    // collapse any short duplicates that survived marker stripping
    let mut final_lines: Vec<String> = Vec::new();
    for line in cleaned {
        if final_lines.last() == Some(&line) && line.chars().count() < SHORT_LINE_LEN {
            continue;
        }
        final_lines.push(line);
    }

    final_lines.join("\n").trim().to_string()
}

/// Pull a JSON object out of text that may contain surrounding prose. Tries a
/// direct parse first, then scans for embedded candidates.
pub fn extract_json_object(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if value.is_object() {
            return Some(value);
        }
    }

    for pattern in JSON_CANDIDATES.iter() {
        for candidate in pattern.find_iter(text) {
            if let Ok(value) = serde_json::from_str::<Value>(candidate.as_str()) {
                if value.is_object() {
                    return Some(value);
                }
            }
        }
    }

    None
}

/// Truncate to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
