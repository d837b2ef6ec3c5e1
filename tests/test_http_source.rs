//! Loading category files over HTTP, with an axum server standing in for
//! the static site host.

mod common;

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;

use common::{GuideProcess, assert_success, stderr, stdout};
use interview_guide::catalog::{HttpSource, load_index};
use interview_guide::config::Limits;
use interview_guide::error::IndexError;

/// Serves fixture category files under `/questions/`. `q-slow.json`
/// answers after two seconds; anything without a fixture is a 404.
async fn serve_fixture(Path(file): Path<String>) -> (StatusCode, String) {
    if file == "q-slow.json" {
        tokio::time::sleep(Duration::from_secs(2)).await;
        return (StatusCode::OK, "{}".to_string());
    }
    let path = GuideProcess::fixture_path("questions").join(&file);
    match tokio::fs::read_to_string(path).await {
        Ok(body) => (StatusCode::OK, body),
        Err(_) => (StatusCode::NOT_FOUND, "not found".to_string()),
    }
}

async fn start_server() -> SocketAddr {
    let app = Router::new().route("/questions/{file}", get(serve_fixture));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test server");
    let addr = listener.local_addr().expect("no local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    addr
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn source(addr: SocketAddr, timeout: Duration) -> HttpSource {
    HttpSource::new(
        &format!("http://{addr}/questions"),
        timeout,
        Limits::default(),
    )
    .expect("valid base URL")
}

#[tokio::test]
async fn one_missing_file_of_three_is_skipped() {
    let addr = start_server().await;
    let index = load_index(
        &source(addr, Duration::from_secs(5)),
        &names(&["q-rag.json", "q-missing.json", "q-evaluation.json"]),
    )
    .await
    .expect("two of three files should load");

    assert_eq!(index.category_count(), 2);
    assert_eq!(index.total_questions(), 6);
    let slugs: Vec<&str> = index.categories().keys().map(String::as_str).collect();
    assert_eq!(
        slugs,
        ["retrieval-augmented-generation-rag", "ai-system-evaluation"]
    );
}

#[tokio::test]
async fn every_file_missing_is_no_files() {
    let addr = start_server().await;
    let err = load_index(
        &source(addr, Duration::from_secs(5)),
        &names(&["q-a.json", "q-b.json"]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, IndexError::NoFiles { .. }));
}

#[tokio::test]
async fn malformed_remote_file_is_no_data() {
    let addr = start_server().await;
    let err = load_index(
        &source(addr, Duration::from_secs(5)),
        &names(&["q-broken.json"]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, IndexError::NoData { attempted: 1 }));
}

#[tokio::test]
async fn slow_file_times_out_and_is_skipped() {
    let addr = start_server().await;
    let index = load_index(
        &source(addr, Duration::from_millis(300)),
        &names(&["q-slow.json", "q-rag.json"]),
    )
    .await
    .expect("fast file should load");
    assert_eq!(index.category_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cli_loads_from_base_url() {
    let addr = start_server().await;
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("guide.yaml");
    std::fs::write(
        &settings,
        "question_files: [q-rag.json, q-prompt-engineering.json, q-missing.json]\n",
    )
    .unwrap();

    let base_url = format!("http://{addr}/questions/");
    let output = GuideProcess::spawn_command_async(&[
        "--config",
        settings.to_str().unwrap(),
        "categories",
        "--base-url",
        &base_url,
        "--timeout",
        "5s",
        "--format",
        "json",
    ])
    .await;
    assert_success(&output);

    let body: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(body["categories"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalQuestions"], 7);
    assert!(stderr(&output).contains("q-missing.json"));
}
