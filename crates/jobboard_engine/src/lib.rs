//! Job board engine: REST client, response decoding and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_detail, decode_list, parse_total_pages, MAX_TOTAL_PAGES};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, JobsClient, ReqwestJobsClient, TOTAL_PAGES_HEADER};
pub use types::{
    AuthorField, EngineEvent, FailureKind, FetchError, JobDetailRecord, JobId, JobSummaryRecord,
    ListBody, ListResponse, RequestId,
};
