use std::time::Duration;

/// The user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "AISEOReadinessChecker/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/spider-rs/ai_seo)"
);
/// Timeout of the main page request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(12);
/// Timeout of the robots.txt and sitemap.xml probes.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(8);
/// Responses strictly faster than this pass the response time signal.
pub const DEFAULT_FAST_RESPONSE: Duration = Duration::from_secs(2);

/// Markers that identify an author or byline on the page.
pub const DEFAULT_AUTHOR_MARKERS: &[&str] = &["author", "byline", "written by", "rel=\"author\""];
/// Markers that identify FAQ or Q&A content on the page.
pub const DEFAULT_FAQ_MARKERS: &[&str] = &["faqpage", "faq", "frequently asked", "question"];

/// Structure to configure a `Website` analysis.
/// ```rust
/// use ai_seo::website::Website;
/// use std::time::Duration;
/// let mut website: Website = Website::new("https://choosealicense.com");
/// website.configuration.request_timeout = Duration::from_secs(5);
/// website.configuration.faq_markers = vec!["faqpage".into()];
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Configuration {
    /// User-Agent for every request.
    pub user_agent: String,
    /// Timeout of the main page request. Hitting it is fatal for the run.
    pub request_timeout: Duration,
    /// Timeout of the robots.txt and sitemap.xml probes. Hitting it fails the signal.
    pub probe_timeout: Duration,
    /// Threshold under which the main page counts as a fast response.
    pub fast_response: Duration,
    /// Case insensitive markers for the author signal.
    pub author_markers: Vec<String>,
    /// Case insensitive markers for the FAQ signal.
    pub faq_markers: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            fast_response: DEFAULT_FAST_RESPONSE,
            author_markers: to_markers(DEFAULT_AUTHOR_MARKERS),
            faq_markers: to_markers(DEFAULT_FAQ_MARKERS),
        }
    }
}

fn to_markers(markers: &[&str]) -> Vec<String> {
    markers.iter().map(|m| m.to_string()).collect()
}

impl Configuration {
    /// Represents configuration defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add user agent to request. Passing `None` restores the default agent.
    pub fn with_user_agent(&mut self, user_agent: Option<&str>) -> &mut Self {
        match user_agent {
            Some(agent) if !agent.trim().is_empty() => self.user_agent = agent.trim().into(),
            _ => self.user_agent = DEFAULT_USER_AGENT.into(),
        };
        self
    }

    /// Set the main page request timeout.
    pub fn with_request_timeout(&mut self, request_timeout: Option<Duration>) -> &mut Self {
        self.request_timeout = request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        self
    }

    /// Set the robots.txt and sitemap.xml probe timeout.
    pub fn with_probe_timeout(&mut self, probe_timeout: Option<Duration>) -> &mut Self {
        self.probe_timeout = probe_timeout.unwrap_or(DEFAULT_PROBE_TIMEOUT);
        self
    }

    /// Set the fast response threshold.
    pub fn with_fast_response(&mut self, fast_response: Option<Duration>) -> &mut Self {
        self.fast_response = fast_response.unwrap_or(DEFAULT_FAST_RESPONSE);
        self
    }

    /// Replace the author markers. Empty entries are dropped; `None` restores the defaults.
    pub fn with_author_markers(&mut self, markers: Option<Vec<String>>) -> &mut Self {
        self.author_markers = clean_markers(markers, DEFAULT_AUTHOR_MARKERS);
        self
    }

    /// Replace the FAQ markers. Empty entries are dropped; `None` restores the defaults.
    pub fn with_faq_markers(&mut self, markers: Option<Vec<String>>) -> &mut Self {
        self.faq_markers = clean_markers(markers, DEFAULT_FAQ_MARKERS);
        self
    }
}

fn clean_markers(markers: Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    match markers {
        Some(markers) => markers
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect(),
        _ => to_markers(defaults),
    }
}

#[test]
fn defaults() {
    let config = Configuration::new();
    assert_eq!(config.request_timeout, Duration::from_secs(12));
    assert_eq!(config.probe_timeout, Duration::from_secs(8));
    assert_eq!(config.fast_response, Duration::from_secs(2));
    assert!(config.user_agent.starts_with("AISEOReadinessChecker/"));
    assert!(config.faq_markers.contains(&"frequently asked".to_string()));
}

#[test]
fn builder_overrides() {
    let mut config = Configuration::new();
    config
        .with_user_agent(Some("  bingbot "))
        .with_request_timeout(Some(Duration::from_secs(3)))
        .with_author_markers(Some(vec![" itemprop=\"author\"".into(), "  ".into()]));

    assert_eq!(config.user_agent, "bingbot");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.author_markers, vec!["itemprop=\"author\"".to_string()]);

    config.with_user_agent(None).with_author_markers(None);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.author_markers.len(), DEFAULT_AUTHOR_MARKERS.len());
}
