/// HTTP-level tests for the cookie-consent banner: first visit, storing a
/// choice through `POST /consent`, and re-opening it via the settings link.

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header::{self, ContentType}};
use actix_web::test;
use regex::Regex;

#[macro_use]
mod common;
use common::{RecordingMailer, csrf_token, session_cookie};

const BANNER: &str = r#"id="cookie-banner""#;

fn consent_form(choice: &str, token: &str, return_to: &str) -> String {
    serde_urlencoded::to_string([
        ("choice", choice),
        ("csrf_token", token),
        ("return_to", return_to),
    ])
    .expect("encode form")
}

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_first_visit_shows_banner_with_delay() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    assert!(page.contains(BANNER));
    assert!(page.contains(r#"data-show-delay-ms="500""#));
}

#[actix_web::test]
async fn test_accept_all_hides_banner_on_next_page() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/team").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    let token = csrf_token(&page);

    let req = test::TestRequest::post()
        .uri("/consent")
        .cookie(cookie)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(consent_form("all", &token, "/team"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/team");
    let cookie = session_cookie(&resp).expect("updated session cookie");

    let req = test::TestRequest::get().uri("/team").cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    assert!(!page.contains(BANNER));
}

/// The `return_to` value a rendered banner posts back.
fn banner_return_to(page: &str) -> String {
    let re = Regex::new(r#"name="return_to" value="([^"]*)""#).expect("regex");
    re.captures(page)
        .map(|c| c[1].replace("&amp;", "&"))
        .expect("banner carries return_to")
}

#[actix_web::test]
async fn test_consent_from_seminar_detail_returns_to_same_seminar() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;

    let req = test::TestRequest::get().uri("/seminar?id=leadership-basics").to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    let token = csrf_token(&page);
    let return_to = banner_return_to(&page);
    assert_eq!(return_to, "/seminar?id=leadership-basics");

    let settings_link = Regex::new(r#"/cookie-einstellungen\?return_to=[^"]*leadership-basics"#).expect("regex");
    assert!(settings_link.is_match(&page));

    let req = test::TestRequest::post()
        .uri("/consent")
        .cookie(cookie)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(consent_form("all", &token, &return_to))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let target = location(&resp);
    assert_eq!(target, "/seminar?id=leadership-basics");
    let cookie = session_cookie(&resp).expect("updated session cookie");

    let req = test::TestRequest::get().uri(&target).cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    assert!(page.contains("<h1>Leadership Basics</h1>"));
    assert!(!page.contains(BANNER));
}

#[actix_web::test]
async fn test_banner_keeps_team_modal_state() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;
    let req = test::TestRequest::get().uri("/team?mitglied=2").to_request();
    let resp = test::call_service(&app, req).await;
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    assert_eq!(banner_return_to(&page), "/team?mitglied=2");
}

#[actix_web::test]
async fn test_consent_redirect_stays_on_site() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    let token = csrf_token(&page);

    let req = test::TestRequest::post()
        .uri("/consent")
        .cookie(cookie)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(consent_form("essential", &token, "https://evil.example/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[actix_web::test]
async fn test_consent_requires_valid_token() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");

    let req = test::TestRequest::post()
        .uri("/consent")
        .cookie(cookie)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(consent_form("all", "forged", "/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_consent_rejects_unknown_choice() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    let token = csrf_token(&page);

    let req = test::TestRequest::post()
        .uri("/consent")
        .cookie(cookie)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(consent_form("marketing-only", &token, "/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_settings_link_reopens_banner_once() {
    let app = test::init_service(test_app!(RecordingMailer::new())).await;

    // Consent first
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    let token = csrf_token(&page);
    let req = test::TestRequest::post()
        .uri("/consent")
        .cookie(cookie)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(consent_form("essential", &token, "/datenschutz"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie: Cookie<'static> = session_cookie(&resp).expect("session cookie");

    // Ask for the settings again
    let req = test::TestRequest::get()
        .uri("/cookie-einstellungen?return_to=/datenschutz")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/datenschutz");
    let cookie = session_cookie(&resp).expect("session cookie with marker");

    let req = test::TestRequest::get().uri("/datenschutz").cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp).expect("session cookie without marker");
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    assert!(page.contains(BANNER));

    // The marker is consumed by the page that showed the banner
    let req = test::TestRequest::get().uri("/datenschutz").cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf-8");
    assert!(!page.contains(BANNER));
}
