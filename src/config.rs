use actix_web::cookie::Key;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub assets_dir: String,
    pub contact_recipient: String,
    pub mail_sender: String,
    pub mail_relay_url: Option<String>,
    pub cookie_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            session_key: None,
            assets_dir: "./assets".to_string(),
            contact_recipient: "Kontakt@wtm-consulting.de".to_string(),
            mail_sender: "noreply@wtm-consulting.de".to_string(),
            mail_relay_url: None,
            cookie_secure: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_key: get("SESSION_KEY"),
            assets_dir: get("ASSETS_DIR").unwrap_or(defaults.assets_dir),
            contact_recipient: get("CONTACT_RECIPIENT").unwrap_or(defaults.contact_recipient),
            mail_sender: get("MAIL_DEFAULT_SENDER").unwrap_or(defaults.mail_sender),
            mail_relay_url: get("MAIL_RELAY_URL"),
            cookie_secure: get("COOKIE_SECURE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.cookie_secure),
        }
    }

    /// Session signing key. A missing or short SESSION_KEY falls back to a
    /// random key, which invalidates stored consent on every restart.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (consent lost on restart)");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000");
        assert_eq!(cfg.contact_recipient, "Kontakt@wtm-consulting.de");
        assert!(cfg.mail_relay_url.is_none());
        assert!(!cfg.cookie_secure);
    }

    #[test]
    fn environment_overrides_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("MAIL_RELAY_URL", "http://relay.internal/send"),
            ("COOKIE_SECURE", "True"),
            ("ASSETS_DIR", "  "),
        ]));
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.mail_relay_url.as_deref(), Some("http://relay.internal/send"));
        assert!(cfg.cookie_secure);
        assert_eq!(cfg.assets_dir, "./assets", "blank values keep the default");
    }

    #[test]
    fn long_session_key_is_used_verbatim() {
        let key = "k".repeat(64);
        let cfg = AppConfig::from_lookup(lookup(&[("SESSION_KEY", key.as_str())]));
        assert_eq!(cfg.session_key().master(), Key::from(key.as_bytes()).master());
    }
}
