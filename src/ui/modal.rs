use crate::content::{TeamDirectory, TeamMemberRecord};

/// Anchor the contact call-to-action hands off to.
pub const CONTACT_ANCHOR: &str = "/kontakt#kontakt";

/// Fields shown in the team overlay for one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberView {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub tags: Vec<String>,
    pub bio: Vec<String>,
    pub qualifications: Vec<String>,
    /// `None` renders the placeholder graphic.
    pub photo: Option<String>,
}

impl MemberView {
    pub fn photo_src(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Alt text for the photo.
    pub fn photo_alt(&self) -> &str {
        &self.name
    }
}

impl From<&TeamMemberRecord> for MemberView {
    fn from(m: &TeamMemberRecord) -> Self {
        MemberView {
            id: m.id,
            name: m.name.clone(),
            role: m.role.clone(),
            tags: m.tags.clone(),
            bio: m.bio.clone(),
            qualifications: m.qualifications.clone(),
            photo: m.photo().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTrigger {
    CloseButton,
    Backdrop,
    Escape,
    ContactCta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    None,
    Closed,
    /// Closed, and the page should continue at [`CONTACT_ANCHOR`].
    GoToContact,
}

/// Overlay showing one team member's profile.
#[derive(Debug, Clone)]
pub struct TeamModal<'a> {
    directory: &'a TeamDirectory,
    view: Option<MemberView>,
    scroll_locked: bool,
}

impl<'a> TeamModal<'a> {
    pub fn new(directory: &'a TeamDirectory) -> Self {
        Self { directory, view: None, scroll_locked: false }
    }

    /// Populate and show the overlay. Unknown ids leave it untouched.
    pub fn open(&mut self, id: u32) -> bool {
        let Some(member) = self.directory.get(id) else {
            log::debug!("Team modal: no member with id {id}");
            return false;
        };
        self.view = Some(MemberView::from(member));
        self.scroll_locked = true;
        true
    }

    /// Open from a raw trigger attribute; malformed ids are ignored.
    pub fn open_raw(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<u32>() {
            Ok(id) => self.open(id),
            Err(_) => false,
        }
    }

    pub fn close(&mut self) {
        self.view = None;
        self.scroll_locked = false;
    }

    pub fn handle(&mut self, trigger: ModalTrigger) -> ModalEffect {
        match trigger {
            ModalTrigger::Escape if !self.is_open() => ModalEffect::None,
            ModalTrigger::CloseButton | ModalTrigger::Backdrop | ModalTrigger::Escape => {
                self.close();
                ModalEffect::Closed
            }
            ModalTrigger::ContactCta => {
                self.close();
                ModalEffect::GoToContact
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&MemberView> {
        self.view.as_ref()
    }

    pub fn into_view(self) -> Option<MemberView> {
        self.view
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> TeamDirectory {
        TeamDirectory::new(vec![
            TeamMemberRecord {
                id: 1,
                name: "Dr. A".into(),
                role: "Geschäftsführer".into(),
                photo: Some("assets/team/a.jpg".into()),
                tags: vec!["Coaching".into(), "Führung".into()],
                bio: vec!["Erster Absatz.".into(), "Zweiter Absatz.".into()],
                qualifications: vec!["Coach".into()],
            },
            TeamMemberRecord {
                id: 2,
                name: "B".into(),
                role: "Trainerin".into(),
                photo: Some(String::new()),
                tags: vec![],
                bio: vec![],
                qualifications: vec![],
            },
        ])
    }

    #[test]
    fn open_known_member_populates_every_field() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        assert!(modal.open(1));
        let view = modal.view().unwrap();
        assert_eq!(view.name, "Dr. A");
        assert_eq!(view.role, "Geschäftsführer");
        assert_eq!(view.tags, vec!["Coaching", "Führung"]);
        assert_eq!(view.bio.len(), 2);
        assert_eq!(view.qualifications, vec!["Coach"]);
        assert_eq!(view.photo_src(), Some("assets/team/a.jpg"));
        assert_eq!(view.photo_alt(), "Dr. A");
        assert!(modal.scroll_locked());
    }

    #[test]
    fn empty_photo_uses_placeholder() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        modal.open(2);
        assert_eq!(modal.view().unwrap().photo_src(), None);
    }

    #[test]
    fn unknown_or_malformed_id_leaves_modal_closed() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        assert!(!modal.open(99));
        assert!(!modal.open_raw("abc"));
        assert!(!modal.open_raw(""));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn close_is_idempotent() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        modal.open(1);
        modal.close();
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn escape_only_acts_when_open() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        assert_eq!(modal.handle(ModalTrigger::Escape), ModalEffect::None);
        modal.open_raw(" 1 ");
        assert_eq!(modal.handle(ModalTrigger::Escape), ModalEffect::Closed);
        assert!(!modal.is_open());
    }

    #[test]
    fn backdrop_and_close_button_close() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        for trigger in [ModalTrigger::Backdrop, ModalTrigger::CloseButton] {
            modal.open(1);
            assert_eq!(modal.handle(trigger), ModalEffect::Closed);
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn contact_cta_closes_and_hands_off() {
        let dir = directory();
        let mut modal = TeamModal::new(&dir);
        modal.open(1);
        assert_eq!(modal.handle(ModalTrigger::ContactCta), ModalEffect::GoToContact);
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }
}
