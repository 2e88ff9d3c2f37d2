//! Integration tests for the harvest pipeline
//!
//! These tests use wiremock to serve both the root page and the linked pages.
//! The root page is requested through `127.0.0.1` and links point at
//! `localhost`, so the same mock server plays two different hosts.

use link_harvest::config::Config;
use link_harvest::crawler::Pipeline;
use link_harvest::progress::{LinkStatus, ProgressEvent, RecordingSink};
use link_harvest::HarvestError;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing to `output`
fn create_test_config(output: &Path) -> Config {
    let mut config = Config::default();
    config.fetch.timeout_secs = 5;
    config.fetch.connect_timeout_secs = 2;
    config.output.path = output.to_string_lossy().into_owned();
    config
}

/// Base URL of the mock server under its `localhost` name
fn external_base(mock_server: &MockServer) -> String {
    format!("http://localhost:{}", mock_server.address().port())
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

async fn mount_page(mock_server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_harvest() {
    let mock_server = MockServer::start().await;
    let external = external_base(&mock_server);

    mount_page(
        &mock_server,
        "/",
        html(&format!(
            r##"<html><head><title>Home</title></head><body>
            <a href="{ext}/page1">Visit</a>
            <a href="/relative">Relative</a>
            <a href="{root}/internal">Internal</a>
            <a href="mailto:someone@example.com">Mail</a>
            <a href="#top">Top</a>
            <a href="{ext}/page2"></a>
            <a href="{ext}/broken">Broken</a>
            </body></html>"##,
            ext = external,
            root = mock_server.uri()
        )),
    )
    .await;

    mount_page(
        &mock_server,
        "/page1",
        html(r#"<html><head><title>Hello</title><meta name="description" content="A page"></head></html>"#),
    )
    .await;

    mount_page(
        &mock_server,
        "/page2",
        html("<html><body><h2>Second\nPage</h2></body></html>"),
    )
    .await;

    mount_page(&mock_server, "/broken", ResponseTemplate::new(500)).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("links.md");
    let sink = Arc::new(RecordingSink::new());

    let report = Pipeline::new(create_test_config(&output))
        .expect("Failed to build pipeline")
        .with_sink(sink.clone())
        .run(&format!("{}/", mock_server.uri()))
        .await
        .expect("Harvest failed");

    assert_eq!(report.link_count, 3);
    assert_eq!(report.failed_count, 1);

    let content = std::fs::read_to_string(&output).expect("Failed to read output");
    let expected = format!(
        "[Visit]({ext}/page1)\nA page\n\n\
         [Second Page]({ext}/page2)\n\n\
         [Broken]({ext}/broken)\nRequest failed with HTTP status 500\n\n",
        ext = external
    );
    assert_eq!(content, expected);

    let failed: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|event| {
            matches!(
                event,
                ProgressEvent::LinkFinished {
                    status: LinkStatus::Failed,
                    ..
                }
            )
        })
        .collect();
    assert_eq!(failed.len(), 1);
}

#[tokio::test]
async fn test_root_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", ResponseTemplate::new(503)).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("links.md");

    let result = Pipeline::new(create_test_config(&output))
        .expect("Failed to build pipeline")
        .run(&format!("{}/", mock_server.uri()))
        .await;

    match result {
        Err(HarvestError::RootFetch { source, .. }) => {
            assert_eq!(source.to_string(), "Request failed with HTTP status 503");
        }
        other => panic!("Expected root fetch error, got {:?}", other),
    }
    assert!(!output.exists(), "No output should be written");
}

#[tokio::test]
async fn test_failure_in_the_middle_is_isolated() {
    let mock_server = MockServer::start().await;
    let external = external_base(&mock_server);

    mount_page(
        &mock_server,
        "/",
        html(&format!(
            r#"<html><body>
            <a href="{ext}/one">One</a>
            <a href="{ext}/two">Two</a>
            <a href="{ext}/three">Three</a>
            </body></html>"#,
            ext = external
        )),
    )
    .await;

    mount_page(
        &mock_server,
        "/one",
        html(r#"<html><head><meta name="description" content="First"></head></html>"#),
    )
    .await;
    mount_page(&mock_server, "/two", ResponseTemplate::new(404)).await;
    mount_page(
        &mock_server,
        "/three",
        html(r#"<html><head><meta name="description" content="Third"></head></html>"#),
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("links.md");

    let pipeline = Pipeline::new(create_test_config(&output)).expect("Failed to build pipeline");
    let links = pipeline
        .collect(&format!("{}/", mock_server.uri()))
        .await
        .expect("Harvest failed");

    assert_eq!(links.len(), 3);
    assert_eq!(links[0].title(), Some("One"));
    assert_eq!(links[0].description(), Some("First"));
    assert_eq!(links[1].title(), Some("Two"));
    assert_eq!(
        links[1].description(),
        Some("Request failed with HTTP status 404")
    );
    assert_eq!(links[2].title(), Some("Three"));
    assert_eq!(links[2].description(), Some("Third"));
}

#[tokio::test]
async fn test_output_is_deterministic() {
    let mock_server = MockServer::start().await;
    let external = external_base(&mock_server);

    mount_page(
        &mock_server,
        "/",
        html(&format!(
            r#"<html><body>
            <a href="{ext}/slow"></a>
            <a href="{ext}/fast"></a>
            </body></html>"#,
            ext = external
        )),
    )
    .await;

    // The first link finishes last.
    mount_page(
        &mock_server,
        "/slow",
        html("<html><head><title>Slow</title></head></html>").set_delay(Duration::from_millis(200)),
    )
    .await;
    mount_page(
        &mock_server,
        "/fast",
        html("<html><head><title>Fast</title></head></html>"),
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");
    let root = format!("{}/", mock_server.uri());

    for output in [&first, &second] {
        Pipeline::new(create_test_config(output))
            .expect("Failed to build pipeline")
            .run(&root)
            .await
            .expect("Harvest failed");
    }

    let first_bytes = std::fs::read(&first).expect("Failed to read first output");
    let second_bytes = std::fs::read(&second).expect("Failed to read second output");
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(
        String::from_utf8(first_bytes).unwrap(),
        format!("[Slow]({ext}/slow)\n\n[Fast]({ext}/fast)\n\n", ext = external)
    );
}

#[tokio::test]
async fn test_concurrency_limit_keeps_order() {
    let mock_server = MockServer::start().await;
    let external = external_base(&mock_server);

    let anchors: String = (0..6)
        .map(|i| format!(r#"<a href="{}/p{}"></a>"#, external, i))
        .collect();
    mount_page(
        &mock_server,
        "/",
        html(&format!("<html><body>{}</body></html>", anchors)),
    )
    .await;

    for i in 0..6 {
        mount_page(
            &mock_server,
            &format!("/p{}", i),
            html(&format!("<html><head><title>P{}</title></head></html>", i))
                .set_delay(Duration::from_millis(20 * (6 - i))),
        )
        .await;
    }

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("links.md");
    let mut config = create_test_config(&output);
    config.fetch.max_concurrent_fetches = Some(2);

    let links = Pipeline::new(config)
        .expect("Failed to build pipeline")
        .collect(&format!("{}/", mock_server.uri()))
        .await
        .expect("Harvest failed");

    let titles: Vec<_> = links.iter().map(|l| l.title().unwrap().to_string()).collect();
    assert_eq!(titles, vec!["P0", "P1", "P2", "P3", "P4", "P5"]);
}
