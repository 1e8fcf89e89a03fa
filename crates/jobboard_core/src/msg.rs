use crate::{JobDetail, JobId, ListPage, LoadError, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Widget attached to the host page; performs the first list load.
    Mounted,
    /// Raw value of the search input after a keystroke.
    SearchInput(String),
    /// Quiet-period timer for a search keystroke elapsed.
    SearchSettled { generation: u64 },
    /// User clicked a pagination control targeting this page.
    PageClicked(u32),
    /// User clicked "View Details" on a job card.
    ViewDetailsClicked(JobId),
    /// User clicked "Back to List" on a rendered detail.
    BackClicked,
    /// A list fetch finished.
    ListLoaded {
        request: RequestId,
        result: Result<ListPage, LoadError>,
    },
    /// A single-job fetch finished.
    DetailLoaded {
        request: RequestId,
        result: Result<JobDetail, LoadError>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
