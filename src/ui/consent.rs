use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::timer::Timeout;

/// Storage key of the persisted consent record.
pub const CONSENT_KEY: &str = "wtm-cookie-consent";

/// Delay before the banner slides in.
pub const SHOW_DELAY: Duration = Duration::from_millis(500);

/// The user's cookie choice. `essential` is always true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentState {
    pub essential: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub timestamp: String,
}

impl ConsentState {
    pub fn from_choice(choice: ConsentChoice, at: DateTime<Utc>) -> Self {
        let all = choice == ConsentChoice::All;
        Self {
            essential: true,
            analytics: all,
            marketing: all,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    All,
    EssentialOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown consent choice '{}'", self.0)
    }
}

impl FromStr for ConsentChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(ConsentChoice::All),
            "essential" => Ok(ConsentChoice::EssentialOnly),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "consent store error: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Where the consent record lives between visits.
pub trait ConsentStore {
    fn load(&self) -> Option<ConsentState>;
    fn save(&self, state: &ConsentState) -> Result<(), StoreError>;
}

/// In-memory store, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    value: RefCell<Option<ConsentState>>,
}

impl MemoryConsentStore {
    pub fn with(state: ConsentState) -> Self {
        Self { value: RefCell::new(Some(state)) }
    }

    pub fn get(&self) -> Option<ConsentState> {
        self.value.borrow().clone()
    }
}

impl ConsentStore for MemoryConsentStore {
    fn load(&self) -> Option<ConsentState> {
        self.get()
    }

    fn save(&self, state: &ConsentState) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(state.clone());
        Ok(())
    }
}

/// Cookie banner: shown after a short delay while no consent is stored.
#[derive(Debug)]
pub struct ConsentBanner<S: ConsentStore> {
    store: S,
    visible: bool,
    show: Timeout,
}

impl<S: ConsentStore> ConsentBanner<S> {
    pub fn load(store: S, now: Instant) -> Self {
        let mut show = Timeout::new(SHOW_DELAY);
        if store.load().is_none() {
            show.arm(now);
        }
        Self { store, visible: false, show }
    }

    /// Make the banner visible once the show delay has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.show.fire(now) {
            self.visible = true;
            return true;
        }
        false
    }

    pub fn accept_all(&mut self) -> Result<ConsentState, StoreError> {
        self.choose(ConsentChoice::All, Utc::now())
    }

    pub fn essential_only(&mut self) -> Result<ConsentState, StoreError> {
        self.choose(ConsentChoice::EssentialOnly, Utc::now())
    }

    pub fn choose(&mut self, choice: ConsentChoice, at: DateTime<Utc>) -> Result<ConsentState, StoreError> {
        let state = ConsentState::from_choice(choice, at);
        self.store.save(&state)?;
        log::debug!("Consent stored: analytics={}, marketing={}", state.analytics, state.marketing);
        self.hide();
        Ok(state)
    }

    /// Show the banner again so the user can reconsider.
    pub fn open_settings(&mut self, now: Instant) {
        self.show.arm(now);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.show.cancel();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visible now or about to become visible.
    pub fn should_show(&self) -> bool {
        self.visible || self.show.is_armed()
    }

    pub fn consent(&self) -> Option<ConsentState> {
        self.store.load()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn teardown(&mut self) {
        self.show.cancel();
    }
}
