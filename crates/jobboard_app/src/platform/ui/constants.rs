/// Element identifiers the host page provides for the widget.
pub const REGION_JOB_LIST: &str = "affiliates-job-list";
pub const REGION_PAGINATION: &str = "pagination-nav";
pub const REGION_SEARCH: &str = "job-search";
