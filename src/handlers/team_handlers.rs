use std::time::Instant;

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::content::SiteContent;
use crate::errors::{AppError, render};
use crate::templates_structs::{MemberCard, PageContext, TeamTemplate};
use crate::ui::counter::COUNT_DURATION;
use crate::ui::{StatCounters, TeamModal};
use crate::ui::modal::CONTACT_ANCHOR;

#[derive(Deserialize)]
pub struct TeamQuery {
    pub mitglied: Option<String>,
}

/// GET /team - directory; `?mitglied=<id>` renders the profile overlay open.
pub async fn directory(
    req: HttpRequest,
    content: web::Data<SiteContent>,
    session: Session,
    query: web::Query<TeamQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &req);

    let mut modal = TeamModal::new(&content.team);
    if let Some(raw) = query.mitglied.as_deref() {
        modal.open_raw(raw);
    }

    let tmpl = TeamTemplate {
        ctx,
        members: content.team.members().iter().map(MemberCard::from).collect(),
        modal: modal.into_view(),
        contact_href: CONTACT_ANCHOR,
        // The page starts every counter at zero; the browser runs the animation.
        stats: StatCounters::new(&content.sections.team_stats).values(Instant::now()),
        count_duration_ms: COUNT_DURATION.as_millis(),
    };
    render(tmpl)
}
