use crate::error::FetchError;
use log::{info, log_enabled, Level};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use url::Url;

/// The response of the page request.
#[derive(Debug)]
pub struct PageResponse {
    /// The final url destination after any redirects.
    pub final_url: Url,
    /// The status code of the request.
    pub status_code: StatusCode,
    /// The decoded body.
    pub content: String,
    /// Time until the response headers arrived.
    pub duration: Duration,
}

/// Log to console if info logging is enabled.
pub fn log(message: &'static str, data: impl AsRef<str>) {
    if log_enabled!(Level::Info) {
        info!("{message} - {}", data.as_ref());
    }
}

/// Turn a domain or url into an absolute url. A missing scheme defaults to
/// https, an explicit scheme must be http or https with a non-empty host.
pub fn normalize_url(target: &str) -> Result<Url, FetchError> {
    let target = target.trim();
    let invalid = || FetchError::InvalidUrl(target.into());

    let mut url = if target.contains("://") {
        Url::parse(target)
    } else {
        Url::parse(&format!("https://{target}"))
    }
    .map_err(|_| invalid())?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid());
    }

    let path = url.path().trim_end_matches('/').to_string();
    if !path.is_empty() && path != url.path() {
        url.set_path(&path);
    }

    Ok(url)
}

/// Perform the timed page request. Any failure or non-success status is fatal.
pub async fn fetch_page_html(
    target_url: &Url,
    client: &Client,
    timeout: Duration,
) -> Result<PageResponse, FetchError> {
    let start = Instant::now();

    let res = client
        .get(target_url.as_str())
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| FetchError::from_request(target_url.as_str(), timeout, e))?;

    let duration = start.elapsed();
    let status_code = res.status();
    let final_url = res.url().clone();

    if !status_code.is_success() {
        return Err(FetchError::Status {
            url: target_url.to_string(),
            status: status_code,
        });
    }

    let content = res
        .text()
        .await
        .map_err(|e| FetchError::from_request(target_url.as_str(), timeout, e))?;

    Ok(PageResponse {
        final_url,
        status_code,
        content,
        duration,
    })
}

/// Best effort check that the resource at `path` on the site answers 200.
pub async fn resource_exists(base: &Url, path: &str, client: &Client, timeout: Duration) -> bool {
    let target = match base.join(path) {
        Ok(target) => target,
        Err(_) => return false,
    };

    match client.get(target.as_str()).timeout(timeout).send().await {
        Ok(res) => {
            let found = res.status() == StatusCode::OK;
            log(if found { "found" } else { "missing" }, target.as_str());
            found
        }
        Err(e) => {
            log("probe failed", format!("{target} {e}"));
            false
        }
    }
}

#[test]
fn normalize_bare_domain() {
    assert_eq!(
        normalize_url("choosealicense.com").unwrap().as_str(),
        "https://choosealicense.com/"
    );
    assert_eq!(
        normalize_url("  choosealicense.com/licenses/ ").unwrap().as_str(),
        "https://choosealicense.com/licenses"
    );
}

#[test]
fn normalize_keeps_scheme() {
    assert_eq!(
        normalize_url("http://choosealicense.com").unwrap().scheme(),
        "http"
    );
    assert_eq!(
        normalize_url("HTTPS://choosealicense.com/").unwrap().as_str(),
        "https://choosealicense.com/"
    );
}

#[test]
fn normalize_rejects_empty() {
    assert!(matches!(normalize_url(""), Err(FetchError::InvalidUrl(_))));
    assert!(matches!(
        normalize_url("not a domain"),
        Err(FetchError::InvalidUrl(_))
    ));
}

#[test]
fn normalize_rejects_bad_scheme_or_host() {
    for target in ["https://", "http:///", "ftp://x.com", "  https://  "] {
        assert!(
            matches!(normalize_url(target), Err(FetchError::InvalidUrl(_))),
            "{target:?}"
        );
    }
}
