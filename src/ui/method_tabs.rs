use crate::content::MethodStep;

/// A methodology step with its tab state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodPanel {
    pub id: String,
    pub label: String,
    pub title: String,
    pub text: String,
    pub points: Vec<String>,
    pub is_active: bool,
}

/// Tabs over the consulting approach. Exactly one step is active; the
/// first one on load.
#[derive(Debug, Clone)]
pub struct MethodTabs<'a> {
    steps: &'a [MethodStep],
    active: usize,
}

impl<'a> MethodTabs<'a> {
    /// `None` when there is nothing to show.
    pub fn new(steps: &'a [MethodStep]) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self { steps, active: 0 })
    }

    /// Activate the step with `id`. Unknown ids keep the current tab.
    pub fn select(&mut self, id: &str) -> bool {
        match self.steps.iter().position(|s| s.id == id.trim()) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                log::debug!("Method tabs: unknown step {id:?}");
                false
            }
        }
    }

    pub fn active_id(&self) -> &str {
        &self.steps[self.active].id
    }

    pub fn panels(&self) -> Vec<MethodPanel> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| MethodPanel {
                id: step.id.clone(),
                label: step.label.clone(),
                title: step.title.clone(),
                text: step.text.clone(),
                points: step.points.clone(),
                is_active: index == self.active,
            })
            .collect()
    }
}
