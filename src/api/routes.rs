use actix_web::web;

use super::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health)).service(
        web::scope("/api/early-warning")
            .route("/score", web::post().to(handlers::score))
            .route("/dashboard", web::post().to(handlers::dashboard))
            .route("/predictions/{patient_id}", web::get().to(handlers::predictions)),
    );
}
