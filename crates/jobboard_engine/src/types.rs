use serde::Deserialize;
use thiserror::Error;

use crate::decode::null_as_default;

pub type JobId = u64;
pub type RequestId = u64;

/// Job authors come back as `{"name": ..}` on the list route and as a bare
/// string on the single-item route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Name(String),
    Object {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
    },
}

impl AuthorField {
    pub fn name(&self) -> &str {
        match self {
            AuthorField::Name(name) => name,
            AuthorField::Object { name } => name,
        }
    }
}

impl Default for AuthorField {
    fn default() -> Self {
        AuthorField::Name(String::new())
    }
}

/// Text fields that are missing or `null` on the wire come through empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobSummaryRecord {
    pub id: JobId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: AuthorField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobDetailRecord {
    pub id: JobId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: AuthorField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Jobs(Vec<JobSummaryRecord>),
    /// Valid response with nothing to list; `message` is the resource's own text, if any.
    Empty { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse {
    pub body: ListBody,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ListFetched {
        request: RequestId,
        result: Result<ListResponse, FetchError>,
    },
    DetailFetched {
        request: RequestId,
        result: Result<JobDetailRecord, FetchError>,
    },
    TimerFired {
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the body arrived but could not be understood.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, FailureKind::Decode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("undecodable body")]
    Decode,
    #[error("network error")]
    Network,
}
