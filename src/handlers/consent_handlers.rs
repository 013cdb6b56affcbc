use std::time::Instant;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::security::csrf::validate_csrf;
use crate::session::{SessionConsentStore, request_consent_settings};
use crate::ui::{ConsentBanner, ConsentChoice};

#[derive(Deserialize)]
pub struct ConsentForm {
    pub choice: String,
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

#[derive(Deserialize)]
pub struct ReturnQuery {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Local absolute path to go back to; anything else goes home.
fn safe_return_path(raw: Option<&str>) -> &str {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => "/",
    }
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

/// POST /consent - store the banner choice and go back.
pub async fn choose(session: Session, form: web::Form<ConsentForm>) -> Result<HttpResponse, AppError> {
    validate_csrf(&session, &form.csrf_token)?;
    let choice: ConsentChoice = form
        .choice
        .parse()
        .map_err(|e| AppError::BadRequest(format!("{e}")))?;

    let mut banner = ConsentBanner::load(SessionConsentStore::new(&session), Instant::now());
    let state = banner.choose(choice, chrono::Utc::now())?;
    log::info!(
        "Cookie consent stored: analytics={} marketing={}",
        state.analytics,
        state.marketing
    );

    Ok(see_other(safe_return_path(form.return_to.as_deref())))
}

/// GET /cookie-einstellungen - show the banner again on the next page.
pub async fn settings(session: Session, query: web::Query<ReturnQuery>) -> HttpResponse {
    request_consent_settings(&session);
    see_other(safe_return_path(query.return_to.as_deref()))
}
