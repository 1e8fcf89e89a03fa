//! Pure HTML rendering of the widget regions.
//!
//! Text fields are escaped. Job content and descriptions arrive from the
//! resource as rendered HTML and are emitted as-is.

use std::fmt::Write as _;

use crate::{JobCardView, JobDetailView, ListRegionView, PageLabel, PaginationView};

pub const LOADING_JOBS: &str = "Loading jobs...";
pub const LOADING_DETAIL: &str = "Loading job details...";
pub const NO_JOBS: &str = "No jobs listed at this time.";
pub const ERROR_JOBS: &str = "Error loading jobs.";
pub const ERROR_DETAIL: &str = "Error loading job details.";

pub fn render_list_region(region: &ListRegionView) -> String {
    match region {
        ListRegionView::Blank => String::new(),
        ListRegionView::LoadingJobs => notice(LOADING_JOBS),
        ListRegionView::LoadingDetail => notice(LOADING_DETAIL),
        ListRegionView::Empty => notice(NO_JOBS),
        ListRegionView::JobsError => notice(ERROR_JOBS),
        ListRegionView::DetailError => notice(ERROR_DETAIL),
        ListRegionView::Jobs(cards) => cards.iter().map(render_card).collect(),
        ListRegionView::Detail(detail) => render_detail(detail),
    }
}

pub fn render_pagination(pagination: &PaginationView) -> String {
    if pagination.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<ul class="pagination justify-content-center">"#);
    for control in &pagination.controls {
        let class = if control.disabled {
            "page-item disabled"
        } else if control.active {
            "page-item active"
        } else {
            "page-item"
        };
        let label = match control.label {
            PageLabel::Prev => "Prev".to_string(),
            PageLabel::Number(number) => number.to_string(),
            PageLabel::Next => "Next".to_string(),
        };
        let _ = write!(
            html,
            r##"<li class="{class}"><a href="#" data-page="{target}" class="page-link">{label}</a></li>"##,
            target = control.target,
        );
    }
    html.push_str("</ul>");
    html
}

fn notice(text: &str) -> String {
    format!(r#"<h3 class="mx-auto">{text}</h3>"#)
}

fn render_card(card: &JobCardView) -> String {
    format!(
        concat!(
            r#"<div class="card my-3"><div class="card-block">"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p><strong>Company: {author}</strong></p>"#,
            r#"<p class="text-muted">Contact: {contact}</p>"#,
            r#"<div class="card-text">{excerpt}</div>"#,
            r#"<button class="btn btn-primary my-4 view-job-button" data-id="{id}">View Details</button>"#,
            r#"</div></div>"#,
        ),
        title = escape(&card.title),
        author = escape(&card.author_name),
        contact = escape(&card.contact),
        excerpt = card.excerpt,
        id = card.job_id,
    )
}

fn render_detail(detail: &JobDetailView) -> String {
    format!(
        concat!(
            r#"<div class="card my-3"><div class="card-block">"#,
            r#"<h3 class="card-title">{title}</h3>"#,
            r#"<p><strong>Company: {author}</strong></p>"#,
            r#"<p class="text-muted">Contact: {contact}</p>"#,
            r#"<div class="card-text">{description}</div>"#,
            r#"<button class="btn btn-secondary my-4" id="back-to-list" data-id="{id}">Back to List</button>"#,
            r#"</div></div>"#,
        ),
        title = escape(&detail.title),
        author = escape(&detail.author_name),
        contact = escape(&detail.contact),
        description = detail.description,
        id = detail.job_id,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
