use serde::{Deserialize, Serialize};

/// One directory entry describing a staff profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberRecord {
    pub id: u32,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub tags: Vec<String>,
    pub bio: Vec<String>,
    pub qualifications: Vec<String>,
}

impl TeamMemberRecord {
    /// Photo path, treating an empty string as "no photo".
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Team members in authored order, looked up by numeric id.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    members: Vec<TeamMemberRecord>,
}

impl TeamDirectory {
    pub fn new(members: Vec<TeamMemberRecord>) -> Self {
        Self { members }
    }

    pub fn get(&self, id: u32) -> Option<&TeamMemberRecord> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn members(&self) -> &[TeamMemberRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
