use url::Url;

use crate::JobId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    /// Already trimmed; empty means no search filter.
    pub search: String,
}

/// `{endpoint}?page=..&per_page=..[&search=..]`, keeping any query the endpoint already has.
pub fn list_url(endpoint: &Url, query: &ListQuery) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("page", &query.page.to_string())
            .append_pair("per_page", &query.per_page.to_string());
        if !query.search.is_empty() {
            pairs.append_pair("search", &query.search);
        }
    }
    url
}

/// `{endpoint}/{job_id}`.
pub fn detail_url(endpoint: &Url, job_id: JobId) -> Url {
    let mut url = endpoint.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&job_id.to_string());
    }
    url
}
