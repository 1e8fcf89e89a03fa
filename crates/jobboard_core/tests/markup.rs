use jobboard_core::markup::{render_list_region, render_pagination, NO_JOBS};
use jobboard_core::{
    update, JobSummary, ListPage, ListRegionView, Msg, PageLabel, RequestId, WidgetConfig,
    WidgetState, EXCERPT_CHAR_LIMIT,
};
use pretty_assertions::assert_eq;

fn engineer_listing() -> WidgetState {
    let config = WidgetConfig::new("https://example.com/jobs", 5).unwrap();
    let (state, _) = update(WidgetState::new(config), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::ListLoaded {
            request: RequestId(1),
            result: Ok(ListPage {
                jobs: vec![JobSummary {
                    id: 1,
                    title: "Engineer".to_string(),
                    contact: "a@b.com".to_string(),
                    author_name: "Acme".to_string(),
                    content: "x".repeat(310),
                }],
                total_pages: 3,
            }),
        },
    );
    state
}

#[test]
fn first_page_of_three_renders_card_and_controls() {
    let view = engineer_listing().view();

    let cards = match &view.region {
        ListRegionView::Jobs(cards) => cards,
        other => panic!("expected cards, got {other:?}"),
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].excerpt, format!("{}...", "x".repeat(EXCERPT_CHAR_LIMIT)));

    let html = render_list_region(&view.region);
    assert_eq!(
        html,
        format!(
            concat!(
                r#"<div class="card my-3"><div class="card-block">"#,
                r#"<h3 class="card-title">Engineer</h3>"#,
                r#"<p><strong>Company: Acme</strong></p>"#,
                r#"<p class="text-muted">Contact: a@b.com</p>"#,
                r#"<div class="card-text">{}...</div>"#,
                r#"<button class="btn btn-primary my-4 view-job-button" data-id="1">View Details</button>"#,
                r#"</div></div>"#,
            ),
            "x".repeat(300)
        )
    );

    let pagination = &view.pagination;
    assert!(pagination.control(PageLabel::Prev).unwrap().disabled);
    assert!(pagination.control(PageLabel::Number(1)).unwrap().active);
    assert!(!pagination.control(PageLabel::Number(2)).unwrap().active);
    assert!(!pagination.control(PageLabel::Number(3)).unwrap().active);
    assert!(!pagination.control(PageLabel::Next).unwrap().disabled);

    let nav = render_pagination(pagination);
    assert_eq!(
        nav,
        concat!(
            r#"<ul class="pagination justify-content-center">"#,
            r##"<li class="page-item disabled"><a href="#" data-page="0" class="page-link">Prev</a></li>"##,
            r##"<li class="page-item active"><a href="#" data-page="1" class="page-link">1</a></li>"##,
            r##"<li class="page-item"><a href="#" data-page="2" class="page-link">2</a></li>"##,
            r##"<li class="page-item"><a href="#" data-page="3" class="page-link">3</a></li>"##,
            r##"<li class="page-item"><a href="#" data-page="2" class="page-link">Next</a></li>"##,
            "</ul>",
        )
    );
}

#[test]
fn text_fields_are_escaped_but_content_is_not() {
    let config = WidgetConfig::new("https://example.com/jobs", 5).unwrap();
    let (state, _) = update(WidgetState::new(config), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::ListLoaded {
            request: RequestId(1),
            result: Ok(ListPage {
                jobs: vec![JobSummary {
                    id: 9,
                    title: "R&D <Lead>".to_string(),
                    contact: "lead@example.com".to_string(),
                    author_name: "O'Brien".to_string(),
                    content: "<p>Hello</p>".to_string(),
                }],
                total_pages: 1,
            }),
        },
    );
    let view = state.view();
    let html = render_list_region(&view.region);

    assert!(html.contains("R&amp;D &lt;Lead&gt;"));
    assert!(html.contains("O&#39;Brien"));
    assert!(html.contains(r#"<div class="card-text"><p>Hello</p></div>"#));
    assert_eq!(render_pagination(&view.pagination), "");
}

#[test]
fn empty_state_markup() {
    assert_eq!(
        render_list_region(&ListRegionView::Empty),
        format!(r#"<h3 class="mx-auto">{NO_JOBS}</h3>"#)
    );
}
