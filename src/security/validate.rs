//! Field checks for the contact form. Each returns `Some(message)` on failure.

pub const NAME_MAX: usize = 120;
pub const COMPANY_MAX: usize = 160;
pub const SUBJECT_MAX: usize = 120;
pub const MESSAGE_MAX: usize = 5000;

/// Required text field with a maximum length (in characters).
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} ist ein Pflichtfeld"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} darf höchstens {max_len} Zeichen lang sein"));
    }
    None
}

/// Optional text field; empty is fine.
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    if value.trim().chars().count() > max_len {
        return Some(format!("{field_name} darf höchstens {max_len} Zeichen lang sein"));
    }
    None
}

/// Must contain '@' and a '.' after it, max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("E-Mail ist ein Pflichtfeld".to_string());
    }
    if trimmed.len() > 254 {
        return Some("E-Mail darf höchstens 254 Zeichen lang sein".to_string());
    }
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid || trimmed.contains(char::is_whitespace) {
        return Some("Bitte geben Sie eine gültige E-Mail-Adresse an".to_string());
    }
    None
}
