use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::ChatRequest,
    models::dto::response::ChatResponse,
    services::ChatService,
};

#[post("/api/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = match state
        .model_service
        .chat(&request.message, &request.context)
        .await
    {
        Ok(response) => response,
        Err(err) => {
            log::warn!("falling back to keyword tutor responses: {}", err);
            ChatService::fallback_response(&request.message)
        }
    };

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}
