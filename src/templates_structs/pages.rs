use askama::Template;

use crate::content::{SeminarRecord, Testimonial};
use crate::ui::carousel::{Carousel, Dot};
use crate::ui::catalog::CatalogView;
use crate::ui::method_tabs::MethodPanel;
use crate::ui::tabs::Tab;

use super::PageContext;

/// One testimonial as rendered in the carousel track.
pub struct SlideView {
    pub quote: String,
    pub author: String,
    pub position: String,
    pub is_active: bool,
}

/// Carousel markup state: slides, dots and prev/next targets.
pub struct CarouselView {
    pub slides: Vec<SlideView>,
    pub dots: Vec<Dot>,
    pub offset_percent: usize,
    pub prev_index: usize,
    pub next_index: usize,
}

impl CarouselView {
    pub fn new(carousel: &Carousel, testimonials: &[Testimonial]) -> Self {
        let index = carousel.index();
        let len = carousel.len();
        Self {
            slides: testimonials
                .iter()
                .enumerate()
                .map(|(i, t)| SlideView {
                    quote: t.quote.clone(),
                    author: t.author.clone(),
                    position: t.position.clone(),
                    is_active: i == index,
                })
                .collect(),
            dots: carousel.dots(),
            offset_percent: carousel.offset_percent(),
            prev_index: (index + len - 1) % len,
            next_index: (index + 1) % len,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub tabs: Vec<Tab>,
    pub catalog: CatalogView,
    pub carousel: Option<CarouselView>,
    pub methods: Vec<MethodPanel>,
}

/// Catalog grid alone, swapped in when a tab is selected.
#[derive(Template)]
#[template(path = "partials/seminar_grid.html")]
pub struct SeminarGridTemplate {
    pub catalog: CatalogView,
}

#[derive(Template)]
#[template(path = "seminar.html")]
pub struct SeminarDetailTemplate {
    pub ctx: PageContext,
    pub seminar: SeminarRecord,
    pub category_label: &'static str,
    pub category_slug: &'static str,
}

#[derive(Template)]
#[template(path = "legal.html")]
pub struct LegalTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub show_cookie_settings: bool,
}
