//! Job board core: pure browsing state machine, view model and markup.
mod config;
mod effect;
mod excerpt;
pub mod markup;
mod msg;
mod pagination;
mod query;
mod state;
mod update;
mod view_model;

pub use config::{ConfigError, WidgetConfig};
pub use effect::Effect;
pub use excerpt::{excerpt, ELLIPSIS, EXCERPT_CHAR_LIMIT};
pub use msg::Msg;
pub use pagination::{pagination, MAX_TOTAL_PAGES};
pub use query::{detail_url, list_url, ListQuery};
pub use state::{
    BrowseState, JobDetail, JobId, JobSummary, ListPage, LoadError, RequestId, View, WidgetState,
    SEARCH_DEBOUNCE,
};
pub use update::update;
pub use view_model::{
    JobCardView, JobDetailView, ListRegionView, PageControl, PageLabel, PaginationView,
    WidgetViewModel,
};
