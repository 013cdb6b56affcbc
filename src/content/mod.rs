//! Static site content: seminar catalog, team directory, testimonials and
//! the smaller page sections (methodology, FAQ, team figures).
//!
//! The fixtures are authored as JSON under `data/` and embedded at compile
//! time. They are parsed once at startup and shared read-only afterwards.

pub mod extras;
pub mod seminar;
pub mod team;
pub mod testimonial;

use std::collections::HashSet;
use std::fmt;

pub use extras::{FaqEntry, MethodStep, PageSections, TeamStat};
pub use seminar::{Category, SeminarContent, SeminarRecord};
pub use team::{TeamDirectory, TeamMemberRecord};
pub use testimonial::Testimonial;

const SEMINAR_FIXTURE: &str = include_str!("../../data/seminars.json");
const TEAM_FIXTURE: &str = include_str!("../../data/team.json");
const TESTIMONIAL_FIXTURE: &str = include_str!("../../data/testimonials.json");
const PAGE_FIXTURE: &str = include_str!("../../data/pages.json");

#[derive(Debug)]
pub enum ContentError {
    Parse { label: &'static str, source: serde_json::Error },
    DuplicateSeminar(String),
    DuplicateMember(u32),
    DuplicateMethod(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Parse { label, source } => write!(f, "Bad {label} fixture: {source}"),
            ContentError::DuplicateSeminar(id) => write!(f, "Duplicate seminar id '{id}'"),
            ContentError::DuplicateMember(id) => write!(f, "Duplicate team member id {id}"),
            ContentError::DuplicateMethod(id) => write!(f, "Duplicate methodology tab '{id}'"),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// All content the site renders, in authored order.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub seminars: Vec<SeminarRecord>,
    pub team: TeamDirectory,
    pub testimonials: Vec<Testimonial>,
    pub sections: PageSections,
}

impl SiteContent {
    /// Parse the embedded fixtures.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SEMINAR_FIXTURE, TEAM_FIXTURE, TESTIMONIAL_FIXTURE)?.with_sections(PAGE_FIXTURE)
    }

    /// Attach the methodology, FAQ and team-figure sections.
    pub fn with_sections(mut self, json: &str) -> Result<Self, ContentError> {
        let sections: PageSections =
            serde_json::from_str(json).map_err(|source| ContentError::Parse { label: "page", source })?;
        let mut ids = HashSet::new();
        if let Some(dup) = sections.methods.iter().find(|m| !ids.insert(m.id.as_str())) {
            return Err(ContentError::DuplicateMethod(dup.id.clone()));
        }
        log::info!(
            "Page sections loaded: methods={}, faq={}, team_stats={}",
            sections.methods.len(),
            sections.faq.len(),
            sections.team_stats.len()
        );
        self.sections = sections;
        Ok(self)
    }

    pub fn from_json(seminars: &str, team: &str, testimonials: &str) -> Result<Self, ContentError> {
        let seminars: Vec<SeminarRecord> = parse(seminars, "seminar")?;
        let members: Vec<TeamMemberRecord> = parse(team, "team")?;
        let testimonials: Vec<Testimonial> = parse(testimonials, "testimonial")?;

        // Fixtures are authored content: a repeated key is an authoring
        // mistake, not something to merge.
        let mut slugs = HashSet::new();
        if let Some(dup) = seminars.iter().find(|s| !slugs.insert(s.id.as_str())) {
            return Err(ContentError::DuplicateSeminar(dup.id.clone()));
        }
        let mut ids = HashSet::new();
        if let Some(dup) = members.iter().find(|m| !ids.insert(m.id)) {
            return Err(ContentError::DuplicateMember(dup.id));
        }

        log::info!(
            "Content loaded: seminars={}, team={}, testimonials={}",
            seminars.len(),
            members.len(),
            testimonials.len()
        );

        Ok(Self {
            seminars,
            team: TeamDirectory::new(members),
            testimonials,
            sections: PageSections::default(),
        })
    }

    pub fn seminar(&self, id: &str) -> Option<&SeminarRecord> {
        self.seminars.iter().find(|s| s.id == id)
    }
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, label: &'static str) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { label, source })
}
