use std::time::Instant;

use crate::content::{Category, SeminarRecord};

use super::catalog::CatalogGrid;

/// One category tab as rendered in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub category: Category,
    pub slug: &'static str,
    pub label: &'static str,
    pub is_active: bool,
}

/// Tracks the active category and drives the catalog grid.
#[derive(Debug, Clone)]
pub struct TabController<'a> {
    seminars: &'a [SeminarRecord],
    active: Category,
    grid: CatalogGrid,
}

impl<'a> TabController<'a> {
    /// Activate `initial` and render it, as on page load.
    pub fn mount(seminars: &'a [SeminarRecord], initial: Category, now: Instant) -> Self {
        let mut grid = CatalogGrid::new();
        grid.render(seminars, initial, now);
        Self { seminars, active: initial, grid }
    }

    pub fn select(&mut self, category: Category, now: Instant) {
        self.active = category;
        self.grid.render(self.seminars, category, now);
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn tabs(&self) -> Vec<Tab> {
        Category::ALL
            .into_iter()
            .map(|category| Tab {
                category,
                slug: category.slug(),
                label: category.label(),
                is_active: category == self.active,
            })
            .collect()
    }

    pub fn grid(&self) -> &CatalogGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut CatalogGrid {
        &mut self.grid
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.grid.tick(now)
    }

    pub fn into_grid(self) -> CatalogGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn default_category_is_active_on_mount() {
        let content = SiteContent::load().unwrap();
        let tabs = TabController::mount(&content.seminars, Category::default(), Instant::now());
        assert_eq!(tabs.active(), Category::Leadership);
        let active: Vec<Category> = tabs.tabs().iter().filter(|t| t.is_active).map(|t| t.category).collect();
        assert_eq!(active, vec![Category::Leadership]);
        assert!(!tabs.grid().view().cards().is_empty());
    }

    #[test]
    fn selecting_a_tab_deactivates_the_others_and_rerenders() {
        let content = SiteContent::load().unwrap();
        let mut tabs = TabController::mount(&content.seminars, Category::Leadership, Instant::now());
        tabs.select(Category::Health, Instant::now());

        let all = tabs.tabs();
        assert_eq!(all.iter().filter(|t| t.is_active).count(), 1);
        assert!(all.iter().any(|t| t.is_active && t.category == Category::Health));

        let expected: Vec<&str> = content
            .seminars
            .iter()
            .filter(|s| s.category == Category::Health)
            .map(|s| s.id.as_str())
            .collect();
        let rendered: Vec<&str> = tabs.grid().view().cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(rendered, expected);
    }
}
