use std::time::Duration;

/// Errors that stop a run before any signal is evaluated.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum FetchError {
    /// The target could not be turned into an absolute http(s) URL.
    #[error("invalid website url `{0}`")]
    InvalidUrl(String),
    /// The http client could not be built.
    #[error("unable to build http client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request did not answer within the timeout.
    #[error("timed out after {}s reaching {url}", .timeout.as_secs())]
    Timeout {
        /// The url requested.
        url: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },
    /// The host is unreachable or the connection failed.
    #[error("could not reach {url}: {source}")]
    Request {
        /// The url requested.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        /// The url requested.
        url: String,
        /// The status returned.
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// Classify a client error for the target url.
    pub(crate) fn from_request(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.into(),
                timeout,
            }
        } else if let Some(status) = err.status() {
            FetchError::Status {
                url: url.into(),
                status,
            }
        } else {
            FetchError::Request {
                url: url.into(),
                source: err,
            }
        }
    }
}

#[test]
fn invalid_url_message() {
    let err = FetchError::InvalidUrl("https://".into());
    assert_eq!(err.to_string(), "invalid website url `https://`");
}

#[test]
fn timeout_message() {
    let err = FetchError::Timeout {
        url: "https://example.com".into(),
        timeout: Duration::from_secs(12),
    };
    assert_eq!(
        err.to_string(),
        "timed out after 12s reaching https://example.com"
    );
}
