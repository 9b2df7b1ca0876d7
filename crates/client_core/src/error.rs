use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("invalid api base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported api base url scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
    #[error("{endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiClientError {
    pub(crate) fn request(endpoint: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Request { endpoint, source }
    }

    /// HTTP status of a non-2xx response, if the failure was one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Request { source, .. } => source.status(),
            _ => None,
        }
    }
}
