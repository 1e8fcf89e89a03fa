use crate::{BrowseState, JobId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetViewModel {
    pub browse: BrowseState,
    pub region: ListRegionView,
    pub pagination: PaginationView,
    pub search_visible: bool,
    pub dirty: bool,
}

/// What the list/detail container currently shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRegionView {
    Blank,
    LoadingJobs,
    LoadingDetail,
    Jobs(Vec<JobCardView>),
    Empty,
    JobsError,
    Detail(JobDetailView),
    DetailError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: JobId,
    pub title: String,
    pub author_name: String,
    pub contact: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub job_id: JobId,
    pub title: String,
    pub author_name: String,
    pub contact: String,
    pub description: String,
}

/// Pagination controls; empty means nothing is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationView {
    pub controls: Vec<PageControl>,
}

impl PaginationView {
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn control(&self, label: PageLabel) -> Option<&PageControl> {
        self.controls.iter().find(|control| control.label == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Prev,
    Number(u32),
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub label: PageLabel,
    /// Page a click requests. Prev on page 1 targets 0, which the click guard rejects.
    pub target: u32,
    pub active: bool,
    pub disabled: bool,
}
