use std::time::Duration;

use thiserror::Error;

use crate::view_model::{JobCardView, JobDetailView, ListRegionView, PaginationView, WidgetViewModel};
use crate::{
    detail_url, excerpt, list_url, pagination, Effect, ListQuery, WidgetConfig, MAX_TOTAL_PAGES,
};

pub type JobId = u64;

/// Quiet period a search value must stay unchanged before it is fetched.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one issued fetch. Strictly increasing per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail(JobId),
}

/// The user-driven browsing position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub page: u32,
    pub page_size: u32,
    pub search_term: String,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub contact: String,
    pub author_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub id: JobId,
    pub title: String,
    pub contact: String,
    pub author_name: String,
    pub description: String,
}

/// One decoded list response. No jobs means the resource reported nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub jobs: Vec<JobSummary>,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Blank,
    LoadingJobs,
    LoadingDetail,
    Jobs(Vec<JobSummary>),
    Empty,
    JobsError,
    Detail(JobDetail),
    DetailError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    config: WidgetConfig,
    browse: BrowseState,
    total_pages: u32,
    content: Content,
    search_visible: bool,
    last_request: RequestId,
    awaiting: Option<RequestId>,
    search_generation: u64,
    pending_search: Option<String>,
    dirty: bool,
}

impl WidgetState {
    pub fn new(config: WidgetConfig) -> Self {
        let browse = BrowseState {
            page: 1,
            page_size: config.page_size(),
            search_term: String::new(),
            view: View::List,
        };
        Self {
            config,
            browse,
            total_pages: 1,
            content: Content::Blank,
            search_visible: true,
            last_request: RequestId::default(),
            awaiting: None,
            search_generation: 0,
            pending_search: None,
            dirty: false,
        }
    }

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn view(&self) -> WidgetViewModel {
        let region = match &self.content {
            Content::Blank => ListRegionView::Blank,
            Content::LoadingJobs => ListRegionView::LoadingJobs,
            Content::LoadingDetail => ListRegionView::LoadingDetail,
            Content::Jobs(jobs) => ListRegionView::Jobs(
                jobs.iter()
                    .map(|job| JobCardView {
                        job_id: job.id,
                        title: job.title.clone(),
                        author_name: job.author_name.clone(),
                        contact: job.contact.clone(),
                        excerpt: excerpt(&job.content),
                    })
                    .collect(),
            ),
            Content::Empty => ListRegionView::Empty,
            Content::JobsError => ListRegionView::JobsError,
            Content::Detail(detail) => ListRegionView::Detail(JobDetailView {
                job_id: detail.id,
                title: detail.title.clone(),
                author_name: detail.author_name.clone(),
                contact: detail.contact.clone(),
                description: detail.description.clone(),
            }),
            Content::DetailError => ListRegionView::DetailError,
        };
        let pagination = if self.has_job_cards() {
            pagination(self.browse.page, self.total_pages)
        } else {
            PaginationView::default()
        };
        WidgetViewModel {
            browse: self.browse.clone(),
            region,
            pagination,
            search_visible: self.search_visible,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn has_job_cards(&self) -> bool {
        matches!(self.content, Content::Jobs(_))
    }

    pub(crate) fn has_rendered_detail(&self) -> bool {
        matches!(self.content, Content::Detail(_))
    }

    pub(crate) fn search_visible(&self) -> bool {
        self.search_visible
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.browse.page = page;
    }

    pub(crate) fn set_search_visible(&mut self, visible: bool) {
        if self.search_visible != visible {
            self.search_visible = visible;
            self.dirty = true;
        }
    }

    /// Renders the loading placeholder and issues a fetch for the current page.
    pub(crate) fn begin_list_load(&mut self) -> Effect {
        self.browse.view = View::List;
        self.content = Content::LoadingJobs;
        self.dirty = true;
        let request = self.next_request();
        let query = ListQuery {
            page: self.browse.page,
            per_page: self.browse.page_size,
            search: self.browse.search_term.clone(),
        };
        let url = list_url(self.config.endpoint(), &query).to_string();
        Effect::FetchList { request, url }
    }

    pub(crate) fn begin_detail_load(&mut self, job_id: JobId) -> Effect {
        self.browse.view = View::Detail(job_id);
        self.content = Content::LoadingDetail;
        self.dirty = true;
        self.discard_pending_search();
        let request = self.next_request();
        let url = detail_url(self.config.endpoint(), job_id).to_string();
        Effect::FetchDetail {
            request,
            job_id,
            url,
        }
    }

    /// Applies a list response if it answers the latest request of the list view.
    pub(crate) fn apply_list(&mut self, request: RequestId, result: Result<ListPage, LoadError>) -> bool {
        if !self.take_awaited(request) || self.browse.view != View::List {
            return false;
        }
        self.content = match result {
            Ok(page) if page.jobs.is_empty() => Content::Empty,
            Ok(page) => {
                self.total_pages = page
                    .total_pages
                    .clamp(1, MAX_TOTAL_PAGES)
                    .max(self.browse.page);
                Content::Jobs(page.jobs)
            }
            Err(_) => Content::JobsError,
        };
        self.dirty = true;
        true
    }

    pub(crate) fn apply_detail(&mut self, request: RequestId, result: Result<JobDetail, LoadError>) -> bool {
        if !self.take_awaited(request) || !matches!(self.browse.view, View::Detail(_)) {
            return false;
        }
        self.content = match result {
            Ok(detail) => Content::Detail(detail),
            Err(_) => Content::DetailError,
        };
        self.dirty = true;
        true
    }

    /// Records a keystroke and returns the generation its quiet-period timer carries.
    pub(crate) fn record_search_input(&mut self, raw: String) -> u64 {
        self.search_generation += 1;
        self.pending_search = Some(raw);
        self.search_generation
    }

    /// Commits the pending search value if `generation` is the latest keystroke.
    pub(crate) fn settle_search(&mut self, generation: u64) -> bool {
        if generation != self.search_generation {
            return false;
        }
        let Some(raw) = self.pending_search.take() else {
            return false;
        };
        self.browse.search_term = raw.trim().to_string();
        self.browse.page = 1;
        true
    }

    fn discard_pending_search(&mut self) {
        if self.pending_search.take().is_some() {
            self.search_generation += 1;
        }
    }

    fn next_request(&mut self) -> RequestId {
        self.last_request = RequestId(self.last_request.0 + 1);
        self.awaiting = Some(self.last_request);
        self.last_request
    }

    fn take_awaited(&mut self, request: RequestId) -> bool {
        if self.awaiting == Some(request) {
            self.awaiting = None;
            true
        } else {
            false
        }
    }
}
