use askama::Template;
use serde::Deserialize;

use crate::ui::accordion::FaqItemView;
use crate::ui::contact_form::{ContactRequest, SubmitButton};

use super::PageContext;

/// Subject codes offered in the contact form, in display order.
pub const SUBJECT_CODES: [&str; 5] = ["training", "coaching", "inhouse", "ausbildung", "other"];

pub struct SubjectOption {
    pub code: &'static str,
    pub label: String,
    pub selected: bool,
}

pub fn subject_options(selected: &str) -> Vec<SubjectOption> {
    SUBJECT_CODES
        .iter()
        .map(|&code| SubjectOption {
            code,
            label: crate::mail::compose::subject_text(code),
            selected: code == selected,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub form: ContactRequest,
    pub subjects: Vec<SubjectOption>,
    pub button: SubmitButton,
    pub alert: Option<&'static str>,
    pub errors: Vec<String>,
    pub faq: Vec<FaqItemView>,
}

/// JSON body of `POST /api/contact`. Every field may be missing.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ContactRequest> for ContactSubmission {
    fn from(r: ContactRequest) -> Self {
        ContactSubmission {
            name: Some(r.name),
            company: Some(r.company),
            email: Some(r.email),
            subject: Some(r.subject),
            message: Some(r.message),
        }
    }
}

/// Form-encoded contact post from the HTML page.
#[derive(Deserialize, Debug, Clone)]
pub struct ContactFormPost {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    pub csrf_token: String,
}

impl ContactFormPost {
    pub fn into_request(self) -> ContactRequest {
        ContactRequest {
            name: self.name,
            company: self.company,
            email: self.email,
            subject: self.subject,
            message: self.message,
        }
    }
}
