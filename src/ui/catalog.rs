use std::time::{Duration, Instant};

use crate::content::{Category, SeminarRecord};

use super::timer::Timeout;

/// Cards are forced visible this long after insertion, independent of
/// scroll position.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

pub const NO_RESULTS: &str = "Für diese Kategorie sind aktuell keine Seminare gelistet.";

/// A seminar as shown in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeminarCard {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub badge: String,
    pub details: Vec<String>,
    pub icon_svg: &'static str,
    pub href: String,
    pub revealed: bool,
}

impl From<&SeminarRecord> for SeminarCard {
    fn from(s: &SeminarRecord) -> Self {
        SeminarCard {
            id: s.id.clone(),
            title: s.title.clone(),
            short_description: s.short_description.clone(),
            badge: s.badge.clone(),
            details: s.details.clone(),
            icon_svg: s.category.icon_svg(),
            href: s.detail_href(),
            revealed: false,
        }
    }
}

impl SeminarCard {
    /// Entrance-animation classes; `visible` once the card has been revealed.
    pub fn reveal_class(&self) -> &'static str {
        if self.revealed { "reveal visible" } else { "reveal" }
    }
}

/// Result of rendering one category: cards, or the single placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    Cards(Vec<SeminarCard>),
    Empty,
}

impl CatalogView {
    pub fn cards(&self) -> &[SeminarCard] {
        match self {
            CatalogView::Cards(cards) => cards,
            CatalogView::Empty => &[],
        }
    }

    /// Delay after which the page forces every card visible.
    pub fn reveal_delay_ms(&self) -> u128 {
        REVEAL_DELAY.as_millis()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            CatalogView::Cards(_) => None,
            CatalogView::Empty => Some(NO_RESULTS),
        }
    }
}

/// Seminars of `category`, in fixture order.
pub fn filter_by_category(
    seminars: &[SeminarRecord],
    category: Category,
) -> impl Iterator<Item = &SeminarRecord> {
    seminars.iter().filter(move |s| s.category == category)
}

pub fn render(seminars: &[SeminarRecord], category: Category) -> CatalogView {
    let cards: Vec<SeminarCard> = filter_by_category(seminars, category)
        .map(SeminarCard::from)
        .collect();
    if cards.is_empty() {
        CatalogView::Empty
    } else {
        CatalogView::Cards(cards)
    }
}

/// The seminar grid: current view plus its entrance-animation state.
#[derive(Debug, Clone)]
pub struct CatalogGrid {
    view: CatalogView,
    reveal: Timeout,
}

impl Default for CatalogGrid {
    fn default() -> Self {
        Self {
            view: CatalogView::Cards(Vec::new()),
            reveal: Timeout::new(REVEAL_DELAY),
        }
    }
}

impl CatalogGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid contents with the cards of `category`.
    pub fn render(&mut self, seminars: &[SeminarRecord], category: Category, now: Instant) {
        self.view = render(seminars, category);
        if self.view.cards().is_empty() {
            self.reveal.cancel();
        } else {
            self.reveal.arm(now);
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn into_view(self) -> CatalogView {
        self.view
    }

    /// Force all cards visible once the reveal delay has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.reveal.fire(now) {
            return false;
        }
        if let CatalogView::Cards(cards) = &mut self.view {
            cards.iter_mut().for_each(|c| c.revealed = true);
        }
        true
    }

    /// A card scrolled into view before the reveal delay elapsed.
    pub fn on_intersect(&mut self, id: &str) {
        if let CatalogView::Cards(cards) = &mut self.view {
            if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
                card.revealed = true;
            }
        }
    }

    pub fn pending_reveal(&self) -> bool {
        self.reveal.is_armed()
    }

    pub fn teardown(&mut self) {
        self.reveal.cancel();
    }
}
