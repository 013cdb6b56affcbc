pub mod consent_handlers;
pub mod contact_handlers;
pub mod page_handlers;
pub mod team_handlers;

use actix_web::{middleware, web};

use crate::security::json_guard::require_json_content_type;

/// Site routes. Static assets and the 404 fallback are registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(page_handlers::home))
        .route("/seminare/grid", web::get().to(page_handlers::seminar_grid))
        .route("/seminar", web::get().to(page_handlers::seminar_detail))
        .route("/team", web::get().to(team_handlers::directory))
        .route("/kontakt", web::get().to(contact_handlers::page))
        .route("/kontakt", web::post().to(contact_handlers::submit_form))
        .route("/impressum", web::get().to(page_handlers::imprint))
        .route("/datenschutz", web::get().to(page_handlers::privacy))
        .route("/consent", web::post().to(consent_handlers::choose))
        .route("/cookie-einstellungen", web::get().to(consent_handlers::settings))
        .service(
            web::scope("/api")
                .wrap(middleware::from_fn(require_json_content_type))
                .route("/contact", web::post().to(contact_handlers::api_submit)),
        );
}
