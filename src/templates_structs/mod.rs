// Template context structures for Askama templates, one module per page group.

use std::time::Instant;

use actix_session::Session;
use actix_web::HttpRequest;
use chrono::Datelike;

use crate::security::csrf;
use crate::session::{SessionConsentStore, take_consent_settings};
use crate::ui::ConsentBanner;
use crate::ui::consent::SHOW_DELAY;

mod contact;
mod pages;
mod team;

pub use contact::*;
pub use pages::*;
pub use team::*;

pub struct NavLink {
    pub label: &'static str,
    pub url: &'static str,
    pub is_active: bool,
}

const NAV: [(&str, &str); 4] = [
    ("Start", "/"),
    ("Seminare", "/#seminare"),
    ("Team", "/team"),
    ("Kontakt", "/kontakt"),
];

fn navigation(current_path: &str) -> Vec<NavLink> {
    NAV.iter()
        .map(|&(label, url)| NavLink {
            label,
            url,
            is_active: url.split('#').next() == Some(current_path) && !url.contains('#'),
        })
        .collect()
}

fn request_target(req: &HttpRequest) -> String {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string())
}

/// Common context shared by all pages.
/// Templates access these as `ctx.nav`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub site_name: &'static str,
    pub nav: Vec<NavLink>,
    /// Path plus query of the request, so forms can return to the same state.
    pub current_path: String,
    pub csrf_token: String,
    pub show_cookie_banner: bool,
    pub banner_delay_ms: u128,
    pub year: i32,
}

impl PageContext {
    pub fn build(session: &Session, req: &HttpRequest) -> Self {
        let mut banner = ConsentBanner::load(SessionConsentStore::new(session), Instant::now());
        if take_consent_settings(session) {
            banner.open_settings(Instant::now());
        }
        Self {
            site_name: "WTM Management Consulting",
            nav: navigation(req.path()),
            current_path: request_target(req),
            csrf_token: csrf::get_or_create_token(session),
            show_cookie_banner: banner.should_show(),
            banner_delay_ms: SHOW_DELAY.as_millis(),
            year: chrono::Local::now().year(),
        }
    }
}
