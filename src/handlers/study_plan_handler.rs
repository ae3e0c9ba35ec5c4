use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::StudyPlanRequest,
    services::StudyPlanService,
};

#[post("/api/study-recommendations")]
pub async fn study_recommendations(
    state: web::Data<AppState>,
    request: web::Json<StudyPlanRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let plan = match state.model_service.study_plan(&request).await {
        Ok(plan) => plan,
        Err(err) => {
            log::warn!("falling back to rule-based study plan: {}", err);
            StudyPlanService::fallback_plan(&request.tasks, &request.user_progress)
        }
    };

    Ok(HttpResponse::Ok().json(plan))
}
