use askama::Template;

use crate::content::TeamMemberRecord;
use crate::ui::counter::StatView;
use crate::ui::modal::MemberView;

use super::PageContext;

/// Directory card; clicking it opens the modal for `id`.
pub struct MemberCard {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub photo: Option<String>,
    pub tags: Vec<String>,
}

impl From<&TeamMemberRecord> for MemberCard {
    fn from(m: &TeamMemberRecord) -> Self {
        MemberCard {
            id: m.id,
            name: m.name.clone(),
            role: m.role.clone(),
            photo: m.photo().map(str::to_string),
            tags: m.tags.clone(),
        }
    }
}

impl MemberCard {
    pub fn photo_src(&self) -> Option<&str> {
        self.photo.as_deref()
    }
}

#[derive(Template)]
#[template(path = "team.html")]
pub struct TeamTemplate {
    pub ctx: PageContext,
    pub members: Vec<MemberCard>,
    pub modal: Option<MemberView>,
    pub contact_href: &'static str,
    pub stats: Vec<StatView>,
    pub count_duration_ms: u128,
}
