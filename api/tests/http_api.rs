use std::sync::{Arc, OnceLock};

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use clap::Parser;
use serde_json::json;

use foodsense_api::application::http::scan::handlers::scan_image::MAX_IMAGE_SIZE;
use foodsense_api::application::http::server::http_server::{router, state};
use foodsense_api::args::Args;

/// Builds a server against the real router. No external call is made by any
/// request issued here; these tests cover the input-validation boundary.
fn test_server() -> TestServer {
    // `router` installs a process-global Prometheus recorder, which can only
    // happen once per test binary; build the router once and clone it per test.
    static ROUTER: OnceLock<axum::Router> = OnceLock::new();
    let app = ROUTER
        .get_or_init(|| {
            let args = Arc::new(Args::parse_from([
                "foodsense-api",
                "--gemini-api-key",
                "test-key",
            ]));
            let state = state(args).expect("failed to build app state");
            router(state).expect("failed to build router")
        })
        .clone();

    TestServer::new(app).expect("failed to start test server")
}

#[tokio::test]
async fn get_status_returns_fixed_liveness_payload() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "ok",
        "service": "foodsense-api",
    }));
}

#[tokio::test]
async fn scan_image_rejects_non_image_content_type() {
    let server = test_server();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"%PDF-1.4".as_slice())
            .file_name("label.pdf")
            .mime_type("application/pdf"),
    );

    let response = server.post("/scan/image").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], json!("bad request: File must be an image."));
}

#[tokio::test]
async fn scan_image_rejects_oversized_upload() {
    let server = test_server();

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0u8; MAX_IMAGE_SIZE + 1])
            .file_name("label.png")
            .mime_type("image/png"),
    );

    let response = server.post("/scan/image").multipart(form).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        json!(format!(
            "bad request: Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ))
    );
}

#[tokio::test]
async fn scan_image_rejects_missing_file_field() {
    let server = test_server();

    let form = MultipartForm::new().add_text("note", "no file here");

    let response = server.post("/scan/image").multipart(form).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn scan_barcode_rejects_empty_barcode() {
    let server = test_server();

    let response = server.post("/scan/barcode").json(&json!({"barcode": ""})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn scan_barcode_rejects_malformed_body() {
    let server = test_server();

    let response = server
        .post("/scan/barcode")
        .content_type("application/json")
        .text("not json")
        .await;

    response.assert_status_bad_request();
}
