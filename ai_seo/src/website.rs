use crate::configuration::Configuration;
use crate::error::FetchError;
use crate::page::{build, Page};
use crate::report::Report;
use crate::signals::{evaluate, Heuristics};
use crate::utils::{fetch_page_html, log, normalize_url, resource_exists};
use reqwest::Client;
use std::time::Duration;

/// Represents a website to analyze.
/// ```rust,no_run
/// use ai_seo::website::Website;
/// # async fn run() -> Result<(), ai_seo::error::FetchError> {
/// let mut website = Website::new("example.com");
/// website.with_user_agent(Some("bingbot"));
/// let report = website.analyze().await?;
/// println!("{} {}", report.score, report.grade);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Website {
    /// configuration properties for website.
    pub configuration: Configuration,
    /// the target as given, a domain or url.
    target: String,
}

impl Website {
    /// Initialize Website object with the domain or url to analyze.
    pub fn new(target: &str) -> Self {
        Self {
            configuration: Configuration::new(),
            target: target.trim().into(),
        }
    }

    /// The target as given.
    pub fn get_target(&self) -> &str {
        &self.target
    }

    /// Add user agent to request.
    pub fn with_user_agent(&mut self, user_agent: Option<&str>) -> &mut Self {
        self.configuration.with_user_agent(user_agent);
        self
    }

    /// Set the main page request timeout.
    pub fn with_request_timeout(&mut self, request_timeout: Option<Duration>) -> &mut Self {
        self.configuration.with_request_timeout(request_timeout);
        self
    }

    /// Set the robots.txt and sitemap.xml probe timeout.
    pub fn with_probe_timeout(&mut self, probe_timeout: Option<Duration>) -> &mut Self {
        self.configuration.with_probe_timeout(probe_timeout);
        self
    }

    /// Set the fast response threshold.
    pub fn with_fast_response(&mut self, fast_response: Option<Duration>) -> &mut Self {
        self.configuration.with_fast_response(fast_response);
        self
    }

    /// Replace the author markers.
    pub fn with_author_markers(&mut self, markers: Option<Vec<String>>) -> &mut Self {
        self.configuration.with_author_markers(markers);
        self
    }

    /// Replace the FAQ markers.
    pub fn with_faq_markers(&mut self, markers: Option<Vec<String>>) -> &mut Self {
        self.configuration.with_faq_markers(markers);
        self
    }

    /// configure http client
    fn configure_http_client(&self) -> Result<Client, FetchError> {
        Client::builder()
            .user_agent(&self.configuration.user_agent)
            .build()
            .map_err(FetchError::Client)
    }

    /// Fetch the page and probe robots.txt and sitemap.xml. Only the page
    /// request can fail the run.
    pub async fn fetch(&self, client: &Client) -> Result<Page, FetchError> {
        let url = normalize_url(&self.target)?;
        log("fetch", url.as_str());

        let res = fetch_page_html(&url, client, self.configuration.request_timeout).await?;
        log(
            "fetched",
            format!("{} in {}ms", res.status_code, res.duration.as_millis()),
        );

        let probe_timeout = self.configuration.probe_timeout;
        let robots_txt = resource_exists(&res.final_url, "/robots.txt", client, probe_timeout).await;
        let sitemap_xml =
            resource_exists(&res.final_url, "/sitemap.xml", client, probe_timeout).await;

        Ok(build(res.final_url, &res.content)
            .with_duration(res.duration)
            .with_robots_txt(robots_txt)
            .with_sitemap_xml(sitemap_xml))
    }

    /// Fetch, evaluate and score the website.
    pub async fn analyze(&self) -> Result<Report, FetchError> {
        let client = self.configure_http_client()?;
        let page = self.fetch(&client).await?;
        let heuristics = Heuristics::from_configuration(&self.configuration);
        let results = evaluate(&page, &heuristics);

        let report = Report::new(page.get_url().clone(), page.duration(), results);
        log("score", format!("{} {}", report.score, report.grade));

        Ok(report)
    }
}

#[test]
fn builder_delegates_to_configuration() {
    let mut website = Website::new("  choosealicense.com ");
    website
        .with_request_timeout(Some(Duration::from_secs(1)))
        .with_faq_markers(Some(vec!["faqpage".into()]));

    assert_eq!(website.get_target(), "choosealicense.com");
    assert_eq!(website.configuration.request_timeout, Duration::from_secs(1));
    assert_eq!(website.configuration.faq_markers, vec!["faqpage".to_string()]);
}

#[tokio::test]
async fn analyze_invalid_target() {
    let website = Website::new("not a domain");
    assert!(matches!(
        website.analyze().await,
        Err(FetchError::InvalidUrl(_))
    ));
}
