use std::fs;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use predicates::prelude::*;

const PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Cats</title></head>
  <body>
    <h1>All about cats</h1>
    <p>Cats sleep. Cats eat. <a href="/x">Home</a></p>
    <a>NoHref</a>
    <a href="https://example.com/dogs"> Dogs </a>
  </body>
</html>"#;

/// Local HTTP server serving a fixed set of pages until dropped
struct TestServer {
    base_url: String,
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    fn start() -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
        let base_url = format!("http://{}", server.server_addr());
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let (status, body) = match request.url() {
                    "/" => (200, PAGE),
                    "/empty" => (200, "<html><body><script>var a = 1;</script></body></html>"),
                    _ => (404, "not found"),
                };

                let header = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"text/html; charset=utf-8"[..],
                )
                .expect("build header");
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            shutdown_tx,
            handle: Some(handle),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[test]
fn links_mode_prints_and_saves_links() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([server.url("/").as_str(), "--mode", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Links on the page:"))
        .stdout(predicate::str::contains("text: Home, url: /x"))
        .stdout(predicate::str::contains("Saved 2 links to"));

    let saved = fs::read_to_string(temp.path().join("datas").join("links.txt"))?;
    assert_eq!(
        saved,
        "text: Home, url: /x\ntext: Dogs, url: https://example.com/dogs"
    );
    Ok(())
}

#[test]
fn menu_selection_is_read_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .arg(server.url("/"))
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Show links on the page"))
        .stdout(predicate::str::contains("Selection (1/2/3): "));

    assert!(temp.path().join("datas").join("links.txt").is_file());
    Ok(())
}

#[test]
fn japanese_locale_localizes_operator_text() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([server.url("/").as_str(), "--locale", "ja"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("行いたい解析内容を選択してください:"))
        .stdout(predicate::str::contains("1. ページ内のリンク表示"))
        .stdout(predicate::str::contains("ページ内のリンク:"))
        .stdout(predicate::str::contains("2件のリンク情報をファイル["));

    // links.txt keeps one format regardless of locale
    let saved = fs::read_to_string(temp.path().join("datas").join("links.txt"))?;
    assert!(saved.starts_with("text: Home, url: /x"));
    Ok(())
}

#[test]
fn url_and_selection_can_both_be_prompted() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .write_stdin(format!("{}\n9\n", server.url("/")))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the URL"))
        .stdout(predicate::str::contains("Invalid selection: \"9\""));
    Ok(())
}

#[test]
fn invalid_selection_exits_cleanly_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([server.url("/").as_str(), "--mode", "links"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid selection"));

    assert!(!temp.path().join("datas").exists());
    Ok(())
}

#[test]
fn unreachable_url_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args(["http://127.0.0.1:9/", "--mode", "1", "--timeout", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));

    assert!(!temp.path().join("datas").exists());
    Ok(())
}

#[test]
fn http_error_status_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([server.url("/missing").as_str(), "--mode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));

    assert!(!temp.path().join("datas").exists());
    Ok(())
}

#[test]
fn frequency_of_page_without_words_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([server.url("/empty").as_str(), "--mode", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No words found"));

    assert!(!temp.path().join("datas").join("word_frequency_plot.png").exists());
    Ok(())
}

#[test]
fn config_file_and_flags_choose_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;
    fs::write(
        temp.path().join("config.json"),
        r#"{"output_dir": "from-config"}"#,
    )?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([server.url("/").as_str(), "--mode", "1", "--config", "config.json"])
        .assert()
        .success();
    assert!(temp.path().join("from-config").join("links.txt").is_file());

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .args([
            server.url("/").as_str(),
            "--mode",
            "1",
            "--config",
            "config.json",
            "--output-dir",
            "from-flag",
        ])
        .assert()
        .success();
    assert!(temp.path().join("from-flag").join("links.txt").is_file());
    Ok(())
}

#[test]
fn rust_log_debug_emits_debug_lines_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let server = TestServer::start();
    let temp = tempfile::TempDir::new()?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("page-lens");
    cmd.current_dir(temp.path())
        .env("RUST_LOG", "debug")
        .args([server.url("/").as_str(), "--mode", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("HTML parser found 2 links"));
    Ok(())
}
