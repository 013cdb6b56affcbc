//! Shared test infrastructure for the HTTP-level tests.
//!
//! - `test_app!(mailer)` - the full route table with a cookie session and
//!   the 404 fallback, ready for `actix_web::test::init_service`.
//! - `RecordingMailer` / `FailingMailer` - mail doubles.
//! - helpers for session cookies and CSRF tokens scraped from pages.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use async_trait::async_trait;
use regex::Regex;

use wtm_site::mail::{MailError, MailMessage, Mailer};

pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// APP FACTORY
// ============================================================================

/// Build the application around `$mailer` (an `Arc<dyn Mailer>`).
/// Test files pull it in with `#[macro_use] mod common;`.
macro_rules! test_app {
    ($mailer:expr) => {{
        use actix_session::{SessionMiddleware, storage::CookieSessionStore};
        use actix_web::{App, cookie::Key, web};

        let content = wtm_site::content::SiteContent::load().expect("fixtures load");
        let mailer: std::sync::Arc<dyn wtm_site::mail::Mailer> = $mailer;
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                    .cookie_secure(false)
                    .cookie_http_only(true)
                    .build(),
            )
            .app_data(web::Data::new(content))
            .app_data(web::Data::new(wtm_site::config::AppConfig::default()))
            .app_data(web::Data::from(mailer))
            .configure(wtm_site::handlers::configure)
            .default_service(web::to(|| async { wtm_site::errors::not_found() }))
    }};
}

// ============================================================================
// MAIL DOUBLES
// ============================================================================

/// Keeps every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().expect("mailer lock").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        self.sent.lock().expect("mailer lock").push(message.clone());
        Ok(())
    }
}

/// Every send fails as if the relay were unreachable.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &MailMessage) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

/// The session cookie set by `resp`, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// The CSRF token embedded in a rendered page.
pub fn csrf_token(body: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("regex");
    re.captures(body)
        .map(|c| c[1].to_string())
        .expect("page carries a CSRF token")
}

/// Number of seminar cards in a rendered page or fragment.
pub fn card_count(body: &str) -> usize {
    let re = Regex::new(r#"<article class="seminar-card[ "]"#).expect("regex");
    re.find_iter(body).count()
}
