//! Integration tests for the download pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the parent
//! fetch, link collection and export end-to-end against temp directories.

use download_all::config::{HttpConfig, OutputMode, RunConfig, Settings};
use download_all::crawler::{build_http_client, fetch_parent_links, Exporter, FetchError, LinkError};
use download_all::output::{OutputResult, PdfRenderer, SeparatePdfSink};
use download_all::DownloadError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARENT: &str = r#"<html><head><title>Contents</title></head><body>
    <h1>Contents</h1>
    <a href="a.html">Chapter A</a>
    <a href="cover.png">Cover</a>
    <a href="b.html">Chapter B</a>
    <a href="c.html">Chapter C</a>
    <a href="mailto:author@example.com">Mail</a>
</body></html>"#;

fn page(title: &str, content: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body><p>{}</p></body></html>",
        title, content
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Parent page with links a, b, c where b returns 404
async fn setup_book_server() -> MockServer {
    let server = MockServer::start().await;

    mount_page(&server, "/docs/index.html", PARENT.to_string()).await;
    mount_page(&server, "/docs/a.html", page("A", "Alpha")).await;
    mount_page(&server, "/docs/c.html", page("C", "Gamma")).await;

    Mock::given(method("GET"))
        .and(path("/docs/b.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

fn run_config(server_uri: &str, mode: OutputMode, dir: &Path) -> RunConfig {
    RunConfig::new(
        &format!("{}/docs/index.html", server_uri),
        None,
        mode,
        Settings::default(),
    )
    .expect("valid config")
    .with_output_dir(dir)
}

/// Stands in for wkhtmltopdf; writes the markup to the target path
struct MarkupRenderer;

impl PdfRenderer for MarkupRenderer {
    fn render(&self, markup: &str, output: &Path) -> OutputResult<()> {
        std::fs::write(output, markup)?;
        Ok(())
    }
}

#[tokio::test]
async fn test_collects_links_from_parent() {
    let server = setup_book_server().await;
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let site_path = format!("{}/docs/", server.uri());

    let links = fetch_parent_links(
        &client,
        &format!("{}/docs/index.html", server.uri()),
        &site_path,
    )
    .await
    .expect("parent page should be fetched");

    assert_eq!(
        links,
        vec![
            format!("{}a.html", site_path),
            format!("{}b.html", site_path),
            format!("{}c.html", site_path),
        ]
    );
}

#[tokio::test]
async fn test_combined_skips_failed_link_without_marker() {
    let server = setup_book_server().await;
    let dir = TempDir::new().unwrap();

    let config = run_config(&server.uri(), OutputMode::default(), dir.path());
    let report = download_all::run(config).await.expect("run should succeed");

    let content = std::fs::read_to_string(dir.path().join("download.html")).unwrap();
    assert_eq!(content, "<body><p>Alpha</p></body><body><p>Gamma</p></body>");

    assert_eq!(report.processed, 3);
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].url.ends_with("/docs/b.html"));
    assert!(matches!(
        report.failures[0].error,
        LinkError::Fetch(FetchError::NotFound { status_code: 404 })
    ));
}

#[tokio::test]
async fn test_combined_rerun_appends_again() {
    let server = setup_book_server().await;
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        let config = run_config(&server.uri(), OutputMode::default(), dir.path());
        download_all::run(config).await.unwrap();
    }

    let content = std::fs::read_to_string(dir.path().join("download.html")).unwrap();
    let once = "<body><p>Alpha</p></body><body><p>Gamma</p></body>";
    assert_eq!(content, format!("{}{}", once, once));
}

#[tokio::test]
async fn test_combined_custom_outfile() {
    let server = setup_book_server().await;
    let dir = TempDir::new().unwrap();

    let mode = OutputMode::Combined(PathBuf::from("book.html"));
    download_all::run(run_config(&server.uri(), mode, dir.path()))
        .await
        .unwrap();

    assert!(dir.path().join("book.html").exists());
    assert!(!dir.path().join("download.html").exists());
}

#[tokio::test]
async fn test_duplicate_links_written_in_order() {
    let server = MockServer::start().await;
    let parent = r#"<body>
        <a href="x.html">X</a>
        <a href="y.html">Y</a>
        <a href="x.html">X again</a>
    </body>"#;
    mount_page(&server, "/index.html", parent.to_string()).await;
    mount_page(&server, "/x.html", page("X", "x")).await;
    mount_page(&server, "/y.html", page("Y", "y")).await;

    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(
        &format!("{}/index.html", server.uri()),
        None,
        OutputMode::default(),
        Settings::default(),
    )
    .unwrap()
    .with_output_dir(dir.path());

    let report = download_all::run(config).await.unwrap();

    let content = std::fs::read_to_string(dir.path().join("download.html")).unwrap();
    assert_eq!(
        content,
        "<body><p>x</p></body><body><p>y</p></body><body><p>x</p></body>"
    );
    assert_eq!(report.processed, 3);
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_separate_files_named_after_link() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/dir/index.html",
        r#"<body><a href="report.html">Report</a></body>"#.to_string(),
    )
    .await;
    mount_page(&server, "/dir/report.html", page("Report", "Quarterly")).await;

    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(
        &format!("{}/dir/index.html", server.uri()),
        None,
        OutputMode::SeparateFiles,
        Settings::default(),
    )
    .unwrap()
    .with_output_dir(dir.path());

    download_all::run(config).await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
    assert_eq!(written, "<body><p>Quarterly</p></body>");
    assert!(!dir.path().join("download.html").exists());
}

#[tokio::test]
async fn test_separate_files_rerun_overwrites() {
    let server = setup_book_server().await;
    let dir = TempDir::new().unwrap();

    for _ in 0..2 {
        let config = run_config(&server.uri(), OutputMode::SeparateFiles, dir.path());
        let report = download_all::run(config).await.unwrap();
        assert_eq!(report.written.len(), 2);
    }

    assert_eq!(
        std::fs::read_to_string(dir.path().join("a.html")).unwrap(),
        "<body><p>Alpha</p></body>"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("c.html")).unwrap(),
        "<body><p>Gamma</p></body>"
    );
    assert!(!dir.path().join("b.html").exists());
}

#[tokio::test]
async fn test_separate_pdfs_named_after_link() {
    let server = MockServer::start().await;
    mount_page(&server, "/dir/report.html", page("Report", "Quarterly")).await;

    let dir = TempDir::new().unwrap();
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let sink = SeparatePdfSink::new(dir.path(), MarkupRenderer);
    let mut exporter = Exporter::new(client, Box::new(sink));

    let links = vec![format!("{}/dir/report.html", server.uri())];
    let report = exporter.export(&links).await;

    assert!(report.is_complete());
    assert_eq!(report.written, vec![dir.path().join("report.pdf")]);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("report.pdf")).unwrap(),
        "<body><p>Quarterly</p></body>"
    );
    assert!(!dir.path().join("report.html").exists());
}

#[tokio::test]
async fn test_latin1_page_is_decoded() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/index.html",
        r#"<a href="latin.html">L</a><a href="meta.html">M</a>"#.to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/latin.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"<html><body><p>caf\xE9</p></body></html>".to_vec())
                .insert_header("content-type", "text/html; charset=iso-8859-1"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/meta.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(
                    b"<html><head><meta charset=\"iso-8859-1\"></head><body><p>na\xEFve</p></body></html>"
                        .to_vec(),
                )
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(
        &format!("{}/index.html", server.uri()),
        None,
        OutputMode::default(),
        Settings::default(),
    )
    .unwrap()
    .with_output_dir(dir.path());

    let report = download_all::run(config).await.unwrap();

    assert!(report.is_complete());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("download.html")).unwrap(),
        "<body><p>café</p></body><body><p>naïve</p></body>"
    );
}

#[tokio::test]
async fn test_encoding_failure_is_not_fatal() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/index.html",
        r#"<a href="broken.html">B</a><a href="ok.html">OK</a>"#.to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(b"<html><body>caf\xE9</body></html>".to_vec())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;
    mount_page(&server, "/ok.html", page("OK", "fine")).await;

    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(
        &format!("{}/index.html", server.uri()),
        None,
        OutputMode::default(),
        Settings::default(),
    )
    .unwrap()
    .with_output_dir(dir.path());

    let report = download_all::run(config).await.unwrap();

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].url.ends_with("/broken.html"));
    assert!(matches!(report.failures[0].error, LinkError::Encoding(_)));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("download.html")).unwrap(),
        "<body><p>fine</p></body>"
    );
}

#[tokio::test]
async fn test_malformed_link_is_not_fatal() {
    let server = MockServer::start().await;
    mount_page(&server, "/ok.html", page("OK", "fine")).await;

    let dir = TempDir::new().unwrap();
    let client = build_http_client(&HttpConfig::default()).unwrap();
    let sink = download_all::output::SeparateFilesSink::new(dir.path());
    let mut exporter = Exporter::new(client, Box::new(sink));

    let links = vec![
        "relative/only.html".to_string(),
        format!("{}/ok.html", server.uri()),
    ];
    let report = exporter.export(&links).await;

    assert_eq!(report.failed_urls(), vec!["relative/only.html"]);
    assert!(dir.path().join("ok.html").exists());
}

#[tokio::test]
async fn test_parent_not_found_is_fatal() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let config = run_config(&server.uri(), OutputMode::default(), dir.path());
    let result = download_all::run(config).await;

    assert!(matches!(
        result,
        Err(DownloadError::ParentFetch {
            source: FetchError::NotFound { status_code: 404 },
            ..
        })
    ));
    assert!(!dir.path().join("download.html").exists());
}

#[tokio::test]
async fn test_unreachable_parent_is_fatal_before_export() {
    // Grab a free port and release it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = TempDir::new().unwrap();
    let config = run_config(
        &format!("http://127.0.0.1:{}", port),
        OutputMode::SeparateFiles,
        dir.path(),
    );

    let result = download_all::run(config).await;

    assert!(matches!(
        result,
        Err(DownloadError::ParentFetch {
            source: FetchError::Unreachable(_),
            ..
        })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_explicit_site_path() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/toc/index.html",
        r#"<a href="one.html">1</a>"#.to_string(),
    )
    .await;
    mount_page(&server, "/pages/one.html", page("One", "first")).await;

    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(
        &format!("{}/toc/index.html", server.uri()),
        Some(format!("{}/pages", server.uri()).as_str()),
        OutputMode::default(),
        Settings::default(),
    )
    .unwrap()
    .with_output_dir(dir.path());

    let report = download_all::run(config).await.unwrap();

    assert!(report.is_complete());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("download.html")).unwrap(),
        "<body><p>first</p></body>"
    );
}
