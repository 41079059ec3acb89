use ai_seo::error::FetchError;
use ai_seo::page::build;
use ai_seo::report::Grade;
use ai_seo::signals::{evaluate, Heuristics, SignalId};
use ai_seo::url::Url;
use ai_seo::website::Website;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const READY_HTML: &str = r#"<!doctype html>
<html>
<head>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="description" content="Choosing an open source license.">
  <meta property="og:title" content="Choose a License">
  <link rel="canonical" href="https://choosealicense.com/">
  <script type="application/ld+json">{"@type": "FAQPage"}</script>
</head>
<body>
  <h1>Choose an open source license</h1>
  <p class="byline">Written by the maintainers</p>
  <h2>Frequently asked questions</h2>
</body>
</html>"#;

const BARE_HTML: &str = "<html><body><p>hello</p></body></html>";

async fn serve(body: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    server
}

async fn mount_ok(server: &MockServer, resource: &str) {
    Mock::given(method("GET"))
        .and(path(resource))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(server)
        .await;
}

fn passed(report: &ai_seo::report::Report, id: SignalId) -> bool {
    report
        .results
        .iter()
        .find(|r| r.signal.id == id)
        .map(|r| r.passed)
        .unwrap_or_default()
}

#[test]
fn every_marker_scores_one_hundred() {
    let page = build(Url::parse("https://choosealicense.com/").unwrap(), READY_HTML)
        .with_duration(Duration::from_millis(300))
        .with_robots_txt(true)
        .with_sitemap_xml(true);
    let report = ai_seo::report::Report::new(
        page.get_url().clone(),
        page.duration(),
        evaluate(&page, &Heuristics::default()),
    );

    assert_eq!(report.score, 100);
    assert_eq!(report.grade, Grade::A);
}

#[tokio::test]
async fn ready_page_over_plain_http() {
    let server = serve(READY_HTML).await;
    mount_ok(&server, "/robots.txt").await;
    mount_ok(&server, "/sitemap.xml").await;

    let report = Website::new(&server.uri()).analyze().await.unwrap();

    assert!(!passed(&report, SignalId::Https));
    assert!(passed(&report, SignalId::RobotsTxt));
    assert!(passed(&report, SignalId::Sitemap));
    assert!(passed(&report, SignalId::FastResponse));
    assert_eq!(report.score, 92);
    assert_eq!(report.grade, Grade::A);
}

#[tokio::test]
async fn bare_slow_page_over_plain_http_scores_zero() {
    let server = serve(BARE_HTML).await;

    let mut website = Website::new(&server.uri());
    website.with_fast_response(Some(Duration::ZERO));
    let report = website.analyze().await.unwrap();

    assert_eq!(report.score, 0);
    assert_eq!(report.grade, Grade::D);
    assert!(report.results.iter().all(|r| !r.passed));
}

#[tokio::test]
async fn failing_probes_do_not_block_other_signals() {
    let server = serve(READY_HTML).await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut website = Website::new(&server.uri());
    website.with_probe_timeout(Some(Duration::from_millis(200)));
    let report = website.analyze().await.unwrap();

    assert!(!passed(&report, SignalId::RobotsTxt));
    assert!(!passed(&report, SignalId::Sitemap));
    for id in [
        SignalId::SchemaMarkup,
        SignalId::Author,
        SignalId::Faq,
        SignalId::Headings,
        SignalId::MetaDescription,
        SignalId::OpenGraph,
        SignalId::Canonical,
        SignalId::FastResponse,
        SignalId::Viewport,
    ] {
        assert!(passed(&report, id), "{id} should pass");
    }
    assert_eq!(report.score, 100 - 8 - 5 - 7);
}

#[tokio::test]
async fn probes_need_a_200() {
    let server = serve(BARE_HTML).await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    mount_ok(&server, "/sitemap.xml").await;

    let report = Website::new(&server.uri()).analyze().await.unwrap();

    assert!(!passed(&report, SignalId::RobotsTxt));
    assert!(passed(&report, SignalId::Sitemap));
}

#[tokio::test]
async fn error_status_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    match Website::new(&server.uri()).analyze().await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_fatal() {
    let result = Website::new("http://127.0.0.1:1").analyze().await;

    assert!(
        matches!(result, Err(FetchError::Request { .. })),
        "{result:?}"
    );
}

#[tokio::test]
async fn slow_page_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut website = Website::new(&server.uri());
    website.with_request_timeout(Some(Duration::from_millis(200)));

    assert!(matches!(
        website.analyze().await,
        Err(FetchError::Timeout { .. })
    ));
}
