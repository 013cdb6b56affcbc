use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::timer::Timeout;

/// The submit control returns to its original state this long after a
/// submission completed, whatever the outcome.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

pub const SUBMIT_LABEL: &str = "Nachricht senden";
pub const BUSY_LABEL: &str = "Wird gesendet...";
pub const SUCCESS_LABEL: &str = "Nachricht gesendet ✓";
pub const ERROR_LABEL: &str = "Fehler aufgetreten";
pub const NETWORK_ERROR_LABEL: &str = "Netzwerkfehler";

pub const REJECTED_ALERT: &str =
    "Es gab einen Fehler beim Senden. Bitte versuchen Sie es später erneut.";
pub const NETWORK_ALERT: &str =
    "Es gab einen Fehler beim Senden. Bitte überprüfen Sie Ihre Internetverbindung.";

/// Payload posted to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Status and JSON body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ServerReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> Result<ServerReply, TransportError>;
}

/// Posts the form as JSON to `<base>/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, request: &ContactRequest) -> Result<ServerReply, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        // An unreadable error body is still a server answer.
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Ok(ServerReply { status, body })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Normal,
    Busy,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
    pub tone: ButtonTone,
}

impl SubmitButton {
    fn idle(label: &str) -> Self {
        Self { label: label.to_string(), enabled: true, tone: ButtonTone::Normal }
    }

    pub fn css_class(&self) -> &'static str {
        match self.tone {
            ButtonTone::Normal => "btn-primary",
            ButtonTone::Busy => "btn-primary is-busy",
            ButtonTone::Success => "btn-primary is-success",
            ButtonTone::Error => "btn-primary is-error",
        }
    }

    fn set(&mut self, label: &str, tone: ButtonTone) {
        self.label = label.to_string();
        self.tone = tone;
    }
}

/// Contact form: field values, submit control, and the timed reset.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactRequest,
    original_label: String,
    button: SubmitButton,
    reset: Timeout,
    alert: Option<&'static str>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

impl ContactForm {
    pub fn new(label: &str) -> Self {
        Self {
            fields: ContactRequest::default(),
            original_label: label.to_string(),
            button: SubmitButton::idle(label),
            reset: Timeout::new(RESET_DELAY),
            alert: None,
        }
    }

    pub fn fields(&self) -> &ContactRequest {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactRequest {
        &mut self.fields
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Message to surface to the user after a failed submission.
    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    /// Enter the busy state and hand out the payload to send.
    ///
    /// A reset still pending from an earlier submission is dropped; the new
    /// submission owns the control from here on.
    pub fn begin_submit(&mut self) -> ContactRequest {
        self.reset.cancel();
        self.alert = None;
        self.button.set(BUSY_LABEL, ButtonTone::Busy);
        self.button.enabled = false;
        self.fields.clone()
    }

    /// Record the outcome of the single call and arm the reset.
    pub fn finish(
        &mut self,
        result: Result<ServerReply, TransportError>,
        now: Instant,
    ) -> Option<&'static str> {
        match result {
            Ok(reply) if reply.is_success() => {
                self.button.set(SUCCESS_LABEL, ButtonTone::Success);
                self.fields = ContactRequest::default();
                self.alert = None;
            }
            Ok(reply) => {
                log::error!("Submission error ({}): {}", reply.status, reply.body);
                self.button.set(ERROR_LABEL, ButtonTone::Error);
                self.alert = Some(REJECTED_ALERT);
            }
            Err(e) => {
                log::error!("Network error: {e}");
                self.button.set(NETWORK_ERROR_LABEL, ButtonTone::Error);
                self.alert = Some(NETWORK_ALERT);
            }
        }
        self.reset.arm(now);
        self.alert
    }

    /// Submit once through `transport`. No retries.
    pub async fn submit<T>(&mut self, transport: &T) -> Option<&'static str>
    where
        T: ContactTransport + ?Sized,
    {
        let request = self.begin_submit();
        let result = transport.send(&request).await;
        self.finish(result, Instant::now())
    }

    /// Restore the original label once the reset delay has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.reset.fire(now) {
            return false;
        }
        self.button = SubmitButton::idle(&self.original_label);
        true
    }

    /// Re-enable the control and keep the outcome label. A page rendered
    /// after the submission cannot wait for the reset timer to do it.
    pub fn release(&mut self) {
        self.button.enabled = true;
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_armed()
    }

    pub fn teardown(&mut self) {
        self.reset.cancel();
    }
}
