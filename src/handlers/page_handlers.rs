use std::time::Instant;

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::content::{Category, SiteContent};
use crate::errors::{AppError, render};
use crate::templates_structs::{
    CarouselView, HomeTemplate, LegalTemplate, PageContext, SeminarDetailTemplate, SeminarGridTemplate,
};
use crate::ui::{Carousel, MethodTabs, TabController};

#[derive(Deserialize)]
pub struct HomeQuery {
    pub kategorie: Option<String>,
    pub slide: Option<String>,
    pub methode: Option<String>,
}

#[derive(Deserialize)]
pub struct GridQuery {
    pub kategorie: Option<String>,
}

#[derive(Deserialize)]
pub struct SeminarQuery {
    pub id: Option<String>,
}

/// GET / - hero, seminar tabs, methodology, testimonials.
pub async fn home(
    req: HttpRequest,
    content: web::Data<SiteContent>,
    session: Session,
    query: web::Query<HomeQuery>,
) -> Result<HttpResponse, AppError> {
    let now = Instant::now();
    let ctx = PageContext::build(&session, &req);

    let mut tabs = TabController::mount(&content.seminars, Category::default(), now);
    let requested = Category::parse_or_default(query.kategorie.as_deref());
    if requested != tabs.active() {
        tabs.select(requested, now);
    }
    let tab_list = tabs.tabs();
    let catalog = tabs.into_grid().into_view();

    // Malformed slide numbers are ignored like any other bad trigger.
    let carousel = Carousel::new(content.testimonials.len(), now).map(|mut c| {
        if let Some(index) = query.slide.as_deref().and_then(|s| s.trim().parse::<usize>().ok()) {
            c.jump_to(index, now);
        }
        CarouselView::new(&c, &content.testimonials)
    });

    let methods = MethodTabs::new(&content.sections.methods)
        .map(|mut m| {
            if let Some(id) = query.methode.as_deref() {
                m.select(id);
            }
            m.panels()
        })
        .unwrap_or_default();

    let tmpl = HomeTemplate { ctx, tabs: tab_list, catalog, carousel, methods };
    render(tmpl)
}

/// GET /seminare/grid?kategorie= - grid fragment for one tab.
pub async fn seminar_grid(
    content: web::Data<SiteContent>,
    query: web::Query<GridQuery>,
) -> Result<HttpResponse, AppError> {
    let category = Category::parse_or_default(query.kategorie.as_deref());
    let tabs = TabController::mount(&content.seminars, category, Instant::now());
    render(SeminarGridTemplate { catalog: tabs.into_grid().into_view() })
}

/// GET /seminar?id= - detail page of one seminar.
pub async fn seminar_detail(
    req: HttpRequest,
    content: web::Data<SiteContent>,
    session: Session,
    query: web::Query<SeminarQuery>,
) -> Result<HttpResponse, AppError> {
    let id = query.id.as_deref().map(str::trim).unwrap_or_default();
    let seminar = content.seminar(id).ok_or(AppError::NotFound)?.clone();

    let ctx = PageContext::build(&session, &req);
    let tmpl = SeminarDetailTemplate {
        ctx,
        category_label: seminar.category.label(),
        category_slug: seminar.category.slug(),
        seminar,
    };
    render(tmpl)
}

pub async fn imprint(req: HttpRequest, session: Session) -> Result<HttpResponse, AppError> {
    let tmpl = LegalTemplate {
        ctx: PageContext::build(&session, &req),
        title: "Impressum",
        paragraphs: vec![
            "WTM Management Consulting GbR",
            "Vertreten durch die Geschäftsführung: Dr. Till Reichert, Malte Werner",
            "Kontakt: Kontakt@wtm-consulting.de",
        ],
        show_cookie_settings: false,
    };
    render(tmpl)
}

pub async fn privacy(req: HttpRequest, session: Session) -> Result<HttpResponse, AppError> {
    let tmpl = LegalTemplate {
        ctx: PageContext::build(&session, &req),
        title: "Datenschutz",
        paragraphs: vec![
            "Diese Website speichert Ihre Cookie-Auswahl in einem technisch notwendigen Cookie.",
            "Analyse- und Marketing-Cookies werden nur mit Ihrer Einwilligung gesetzt.",
            "Angaben aus dem Kontaktformular verwenden wir ausschließlich zur Bearbeitung Ihrer Anfrage.",
        ],
        show_cookie_settings: true,
    };
    render(tmpl)
}
