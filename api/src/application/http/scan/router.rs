use super::handlers::{
    scan_barcode::{__path_scan_barcode, scan_barcode},
    scan_image::{MAX_IMAGE_SIZE, __path_scan_image, scan_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_barcode, scan_image))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan/barcode", state.args.server.root_path),
            post(scan_barcode),
        )
        .route(
            &format!("{}/scan/image", state.args.server.root_path),
            post(scan_image),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024))
}
