use std::time::Duration;

use crate::{JobId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchList {
        request: RequestId,
        url: String,
    },
    FetchDetail {
        request: RequestId,
        job_id: JobId,
        url: String,
    },
    /// Restart the search quiet-period timer; replaces any outstanding one.
    ScheduleSearch { generation: u64, delay: Duration },
}
