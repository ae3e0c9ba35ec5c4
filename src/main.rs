use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use revise_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::generate_quiz)
            .service(handlers::grade_quiz)
            .service(handlers::summarize_notes)
            .service(handlers::chat)
            .service(handlers::study_recommendations)
            .service(handlers::health_check)
            .service(handlers::root)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
