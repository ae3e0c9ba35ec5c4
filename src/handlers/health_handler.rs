use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "model_backend_configured": state.model_service.is_configured(),
        "chat_model": state.config.chat_model,
        "summarization_model": state.config.summarization_model,
    }))
}

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Revision Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/generate-quiz",
            "/api/grade-quiz",
            "/api/summarize-notes",
            "/api/chat",
            "/api/study-recommendations",
            "/health",
        ],
    }))
}
