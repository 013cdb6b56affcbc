use serde::{Deserialize, Serialize};

/// One step of the consulting approach, shown as a tab on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodStep {
    pub id: String,
    pub label: String,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Key figure on the team page, counted up from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStat {
    pub target: u32,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

/// Smaller page sections: methodology tabs, FAQ, team figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSections {
    #[serde(default)]
    pub methods: Vec<MethodStep>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    #[serde(default)]
    pub team_stats: Vec<TeamStat>,
}
