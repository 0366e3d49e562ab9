use axum::extract::State;

use crate::application::http::{
    scan::validators::ScanBarcodeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use foodsense_core::domain::scan::{
    entities::ScanResult, ports::ScanService, value_objects::ScanBarcodeInput,
};

#[utoipa::path(
    post,
    path = "/barcode",
    tag = "scan",
    summary = "Scan a product barcode",
    description = "Looks the barcode up in the product database and analyzes the ingredients with the LLM",
    responses(
        (status = 200, body = ScanResult)
    ),
    request_body = ScanBarcodeRequest
)]
pub async fn scan_barcode(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanBarcodeRequest>,
) -> Result<Response<ScanResult>, ApiError> {
    let result = state
        .service
        .scan_barcode(ScanBarcodeInput {
            barcode: payload.barcode,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
