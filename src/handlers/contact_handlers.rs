use std::time::Instant;

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::content::SiteContent;
use crate::errors::{AppError, render};
use crate::mail::compose::Inquiry;
use crate::mail::{MailError, Mailer};
use crate::security::csrf::validate_csrf;
use crate::security::validate::{
    COMPANY_MAX, MESSAGE_MAX, NAME_MAX, SUBJECT_MAX, validate_email, validate_optional, validate_required,
};
use crate::templates_structs::{
    ContactFormPost, ContactSubmission, ContactTemplate, PageContext, subject_options,
};
use crate::ui::contact_form::{ContactRequest, ServerReply, TransportError};
use crate::ui::{Accordion, ContactForm, ContactTransport};

pub const SENT_MESSAGE: &str = "Nachricht erfolgreich gesendet";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const VALIDATION_FAILED: &str = "Validation failed";
pub const SEND_FAILED: &str = "Fehler beim Senden der Nachricht";
/// Section id of the FAQ on the contact page.
pub const FAQ_ANCHOR: &str = "faq";

#[derive(Deserialize)]
pub struct FaqQuery {
    pub frage: Option<String>,
}

/// Why an inquiry was not forwarded.
#[derive(Debug)]
pub enum ContactFailure {
    MissingFields,
    Invalid(Vec<String>),
    Delivery(MailError),
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Validate a submission and send both contact mails.
pub async fn process_contact(
    submission: ContactSubmission,
    mailer: &dyn Mailer,
    config: &AppConfig,
) -> Result<Inquiry, ContactFailure> {
    let (Some(name), Some(email), Some(message)) = (
        present(&submission.name),
        present(&submission.email),
        present(&submission.message),
    ) else {
        return Err(ContactFailure::MissingFields);
    };
    let company = submission.company.as_deref().unwrap_or_default().trim();
    let subject = submission.subject.as_deref().unwrap_or_default().trim();

    let errors: Vec<String> = [
        validate_required(name, "Name", NAME_MAX),
        validate_optional(company, "Unternehmen", COMPANY_MAX),
        validate_email(email),
        validate_optional(subject, "Betreff", SUBJECT_MAX),
        validate_required(message, "Nachricht", MESSAGE_MAX),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !errors.is_empty() {
        return Err(ContactFailure::Invalid(errors));
    }

    let inquiry = Inquiry {
        name: name.to_string(),
        company: company.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    };

    let office = inquiry.office_notification(&config.mail_sender, &config.contact_recipient);
    mailer.send(&office).await.map_err(ContactFailure::Delivery)?;
    let confirmation = inquiry.sender_confirmation(&config.mail_sender);
    mailer.send(&confirmation).await.map_err(ContactFailure::Delivery)?;

    log::info!("Contact inquiry forwarded: {:?} from {}", inquiry.subject_text(), inquiry.email);
    Ok(inquiry)
}

/// Status and JSON body the contact API answers with.
pub fn reply_parts(result: &Result<Inquiry, ContactFailure>) -> (StatusCode, Value) {
    match result {
        Ok(_) => (StatusCode::OK, json!({ "message": SENT_MESSAGE })),
        Err(ContactFailure::MissingFields) => (StatusCode::BAD_REQUEST, json!({ "error": MISSING_FIELDS })),
        Err(ContactFailure::Invalid(errors)) => (
            StatusCode::BAD_REQUEST,
            json!({ "error": VALIDATION_FAILED, "details": errors.join("; ") }),
        ),
        Err(ContactFailure::Delivery(e)) => {
            log::error!("Error sending email: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": SEND_FAILED }))
        }
    }
}

/// Runs the contact pipeline inside the server for the HTML form post.
pub struct InProcessTransport<'a> {
    mailer: &'a dyn Mailer,
    config: &'a AppConfig,
}

impl<'a> InProcessTransport<'a> {
    pub fn new(mailer: &'a dyn Mailer, config: &'a AppConfig) -> Self {
        Self { mailer, config }
    }
}

#[async_trait]
impl<'a> ContactTransport for InProcessTransport<'a> {
    async fn send(&self, request: &ContactRequest) -> Result<ServerReply, TransportError> {
        let submission = ContactSubmission::from(request.clone());
        let result = process_contact(submission, self.mailer, self.config).await;
        let (status, body) = reply_parts(&result);
        Ok(ServerReply { status: status.as_u16(), body })
    }
}

/// Validation messages carried by a rejected reply.
fn reply_details(result: &Result<ServerReply, TransportError>) -> Vec<String> {
    match result {
        Ok(reply) if !reply.is_success() => reply
            .body
            .get("details")
            .and_then(Value::as_str)
            .map(|d| d.split("; ").map(String::from).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn contact_page(
    req: &HttpRequest,
    session: &Session,
    form: &ContactForm,
    errors: Vec<String>,
    faq: &Accordion,
) -> Result<HttpResponse, AppError> {
    let tmpl = ContactTemplate {
        ctx: PageContext::build(session, req),
        form: form.fields().clone(),
        subjects: subject_options(&form.fields().subject),
        button: form.button().clone(),
        alert: form.alert(),
        errors,
        faq: faq.items("/kontakt", FAQ_ANCHOR),
    };
    render(tmpl)
}

/// GET /kontakt - form and FAQ; `?frage=<n>` renders that answer expanded.
pub async fn page(
    req: HttpRequest,
    session: Session,
    content: web::Data<SiteContent>,
    query: web::Query<FaqQuery>,
) -> Result<HttpResponse, AppError> {
    let mut faq = Accordion::new(&content.sections.faq);
    if let Some(raw) = query.frage.as_deref() {
        faq.toggle_raw(raw);
    }
    contact_page(&req, &session, &ContactForm::default(), Vec::new(), &faq)
}

/// POST /kontakt - form fallback, answered with the page in its post-submit state.
pub async fn submit_form(
    req: HttpRequest,
    session: Session,
    content: web::Data<SiteContent>,
    mailer: web::Data<dyn Mailer>,
    config: web::Data<AppConfig>,
    form: web::Form<ContactFormPost>,
) -> Result<HttpResponse, AppError> {
    let post = form.into_inner();
    validate_csrf(&session, &post.csrf_token)?;

    let mut contact = ContactForm::default();
    *contact.fields_mut() = post.into_request();

    let transport = InProcessTransport::new(mailer.get_ref(), config.get_ref());
    let request = contact.begin_submit();
    let result = transport.send(&request).await;
    let errors = reply_details(&result);
    contact.finish(result, Instant::now());
    contact.release();

    let faq = Accordion::new(&content.sections.faq);
    contact_page(&req, &session, &contact, errors, &faq)
}

/// POST /api/contact
pub async fn api_submit(
    body: web::Bytes,
    mailer: web::Data<dyn Mailer>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let submission: ContactSubmission = serde_json::from_slice(&body)?;
    let result = process_contact(submission, mailer.get_ref(), config.get_ref()).await;
    let (status, reply) = reply_parts(&result);
    Ok(HttpResponse::build(status).json(reply))
}
