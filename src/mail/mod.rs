//! Outgoing mail for the contact form.

pub mod compose;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug)]
pub enum MailError {
    Transport(String),
    Rejected(u16),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Transport(e) => write!(f, "Mail transport error: {e}"),
            MailError::Rejected(status) => write!(f, "Mail relay rejected message with status {status}"),
        }
    }
}

impl std::error::Error for MailError {}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}

/// Writes messages to the log instead of delivering them.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        log::info!(
            "Mail (not delivered, no relay configured) to={} subject={:?}",
            message.to,
            message.subject
        );
        log::debug!("Mail body:\n{}", message.body);
        Ok(())
    }
}

/// Hands messages to an HTTP mail relay as JSON.
#[derive(Debug, Clone)]
pub struct RelayMailer {
    client: reqwest::Client,
    url: String,
}

impl RelayMailer {
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), url: url.into() }
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(MailError::Rejected(response.status().as_u16()));
        }
        log::info!("Mail relayed to={} subject={:?}", message.to, message.subject);
        Ok(())
    }
}

/// Relay mailer when `MAIL_RELAY_URL` is set, log mailer otherwise.
pub fn from_config(config: &AppConfig) -> Arc<dyn Mailer> {
    match &config.mail_relay_url {
        Some(url) => {
            log::info!("Mail relay: {url}");
            Arc::new(RelayMailer::new(url.clone()))
        }
        None => {
            log::warn!("No MAIL_RELAY_URL set, contact mails are only logged");
            Arc::new(LogMailer)
        }
    }
}
