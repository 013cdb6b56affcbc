use super::MailMessage;

/// Display text for a subject code from the contact form's select box.
/// Unknown codes are passed through unchanged.
pub fn subject_text(code: &str) -> String {
    match code.trim() {
        "training" => "Anfrage zu Trainings",
        "coaching" => "Anfrage zu Coaching",
        "inhouse" => "Inhouse-Anfrage",
        "ausbildung" => "Ausbildungsprogramme",
        "other" => "Sonstiges",
        "" => "Kein Betreff",
        other => other,
    }
    .to_string()
}

/// A validated contact inquiry, ready to be mailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub company: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry {
    pub fn subject_text(&self) -> String {
        subject_text(&self.subject)
    }

    /// Notification for the office inbox.
    pub fn office_notification(&self, from: &str, office: &str) -> MailMessage {
        let subject = self.subject_text();
        MailMessage {
            from: from.to_string(),
            to: office.to_string(),
            subject: format!("Neue Kontaktanfrage: {subject} von {}", self.name),
            body: format!(
                "Neue Nachricht über das Kontaktformular:\n\n\
                 Name: {}\nUnternehmen: {}\nE-Mail: {}\nBetreff: {subject}\n\n\
                 Nachricht:\n{}\n",
                self.name, self.company, self.email, self.message
            ),
        }
    }

    /// Confirmation for the sender.
    pub fn sender_confirmation(&self, from: &str) -> MailMessage {
        MailMessage {
            from: from.to_string(),
            to: self.email.clone(),
            subject: "Ihre Anfrage bei WTM Management Consulting".to_string(),
            body: format!(
                "Hallo {},\n\n\
                 vielen Dank für Ihre Nachricht. Wir haben Ihre Anfrage erhalten \
                 und melden uns so bald wie möglich bei Ihnen.\n\n\
                 Ihre Anfrage im Überblick:\nBetreff: {}\nNachricht:\n{}\n\n\
                 Herzliche Grüße\nIhr Team von WTM Management Consulting\n",
                self.name,
                self.subject_text(),
                self.message
            ),
        }
    }
}
