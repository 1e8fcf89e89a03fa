use thiserror::Error;
use url::Url;

/// Host-supplied settings, fixed for the lifetime of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    endpoint: Url,
    page_size: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid endpoint url {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("endpoint must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

impl WidgetConfig {
    pub fn new(endpoint: &str, page_size: u32) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(endpoint.trim()).map_err(|err| ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: err.to_string(),
        })?;
        match endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            endpoint,
            page_size,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
