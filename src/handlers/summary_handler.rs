use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::SummarizeNotesRequest,
    models::dto::response::SummaryResponse,
    services::{model_helpers::truncate_chars, TextAnalyzer},
};

#[post("/api/summarize-notes")]
pub async fn summarize_notes(
    state: web::Data<AppState>,
    request: web::Json<SummarizeNotesRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let summary = match state
        .model_service
        .summarize_notes(&request.notes, request.max_length)
        .await
    {
        Ok(summary) => summary,
        Err(err) => {
            log::warn!("falling back to heuristic summarization: {}", err);
            heuristic_summary(&request.notes, request.max_length)
        }
    };

    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

fn heuristic_summary(notes: &str, max_length: usize) -> String {
    let sentences = TextAnalyzer::summarize(notes);
    if sentences.is_empty() {
        return truncate_chars(notes, max_length).to_string();
    }
    format!("{}.", sentences.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_summary_joins_ranked_sentences() {
        let notes = "An important definition opens the topic\n\
                     Filler line one goes here\n\
                     Filler line two goes here\n\
                     Filler line three goes here";
        let summary = heuristic_summary(notes, 200);

        assert!(summary.starts_with("An important definition opens the topic"));
        assert!(summary.ends_with('.'));
    }

    #[test]
    fn heuristic_summary_degrades_to_truncated_notes() {
        let summary = heuristic_summary("???", 200);

        assert_eq!(summary, "???");
    }
}
