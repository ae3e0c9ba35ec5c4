use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, GradeQuizRequest},
    models::dto::response::QuizResponse,
    services::{QuizAttemptService, QuizEngine},
};

#[post("/api/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let num_questions = request.num_questions as usize;
    let questions = match state
        .model_service
        .generate_quiz(&request.notes, num_questions)
        .await
    {
        Ok(questions) => questions,
        Err(err) => {
            log::warn!("falling back to heuristic quiz generation: {}", err);
            let mut questions = QuizEngine::generate(&request.notes);
            questions.truncate(num_questions);
            questions
        }
    };

    Ok(HttpResponse::Ok().json(QuizResponse { questions }))
}

#[post("/api/grade-quiz")]
pub async fn grade_quiz(request: web::Json<GradeQuizRequest>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    if request.answers.len() > request.questions.len() {
        return Err(AppError::BadRequest(
            "more answers than questions".to_string(),
        ));
    }

    let attempt = QuizAttemptService::grade_attempt(&request.questions, &request.answers);
    Ok(HttpResponse::Ok().json(attempt))
}
