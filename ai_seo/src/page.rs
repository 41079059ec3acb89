use std::time::Duration;
use url::Url;

/// Represent the page fetched for an analysis together with the response
/// metadata some signals are judged on.
#[derive(Debug, Clone)]
pub struct Page {
    /// The final url after redirects.
    url: Url,
    /// The raw html of the page.
    html: String,
    /// Time until the response headers arrived.
    duration: Duration,
    /// `/robots.txt` answered 200.
    robots_txt: bool,
    /// `/sitemap.xml` answered 200.
    sitemap_xml: bool,
}

/// Instantiate a page without fetching it. Response metadata starts at
/// zero duration with no robots.txt or sitemap.xml.
pub fn build(url: Url, html: &str) -> Page {
    Page {
        url,
        html: html.into(),
        duration: Duration::ZERO,
        robots_txt: false,
        sitemap_xml: false,
    }
}

impl Page {
    /// Set the elapsed time of the page request.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set whether `/robots.txt` was found.
    pub fn with_robots_txt(mut self, found: bool) -> Self {
        self.robots_txt = found;
        self
    }

    /// Set whether `/sitemap.xml` was found.
    pub fn with_sitemap_xml(mut self, found: bool) -> Self {
        self.sitemap_xml = found;
        self
    }

    /// URL getter for page.
    pub fn get_url(&self) -> &Url {
        &self.url
    }

    /// Html getter for page.
    pub fn get_html(&self) -> &str {
        &self.html
    }

    /// Elapsed time of the page request.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The page was served over https.
    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// `/robots.txt` was found.
    pub fn has_robots_txt(&self) -> bool {
        self.robots_txt
    }

    /// `/sitemap.xml` was found.
    pub fn has_sitemap_xml(&self) -> bool {
        self.sitemap_xml
    }
}

#[test]
fn secure_scheme() {
    let page = build(Url::parse("https://choosealicense.com/").unwrap(), "");
    assert!(page.is_secure());

    let page = build(Url::parse("http://choosealicense.com/").unwrap(), "");
    assert!(!page.is_secure());
}

#[test]
fn builder_metadata() {
    let page = build(Url::parse("https://choosealicense.com/").unwrap(), "<html></html>")
        .with_duration(Duration::from_millis(850))
        .with_robots_txt(true);

    assert_eq!(page.duration(), Duration::from_millis(850));
    assert!(page.has_robots_txt());
    assert!(!page.has_sitemap_xml());
    assert_eq!(page.get_html(), "<html></html>");
}
