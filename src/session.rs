use actix_session::Session;

use crate::ui::consent::{CONSENT_KEY, ConsentState, ConsentStore, StoreError};

const SETTINGS_MARKER: &str = "consent_settings";

/// Consent persisted in the signed session cookie under [`CONSENT_KEY`].
pub struct SessionConsentStore<'a> {
    session: &'a Session,
}

impl<'a> SessionConsentStore<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl ConsentStore for SessionConsentStore<'_> {
    fn load(&self) -> Option<ConsentState> {
        match self.session.get::<ConsentState>(CONSENT_KEY) {
            Ok(state) => state,
            Err(e) => {
                // An unreadable record counts as no decision; the banner asks again.
                log::warn!("Discarding unreadable consent record: {e}");
                None
            }
        }
    }

    fn save(&self, state: &ConsentState) -> Result<(), StoreError> {
        self.session
            .insert(CONSENT_KEY, state)
            .map_err(|e| StoreError(e.to_string()))
    }
}

/// Ask for the banner on the next rendered page.
pub fn request_consent_settings(session: &Session) {
    if let Err(e) = session.insert(SETTINGS_MARKER, true) {
        log::warn!("Failed to store consent settings marker: {e}");
    }
}

/// One-shot: true if the banner was requested since the last page.
pub fn take_consent_settings(session: &Session) -> bool {
    let requested = session.get::<bool>(SETTINGS_MARKER).unwrap_or(None).unwrap_or(false);
    if requested {
        session.remove(SETTINGS_MARKER);
    }
    requested
}
