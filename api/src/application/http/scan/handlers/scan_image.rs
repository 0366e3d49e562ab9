use axum::extract::{Multipart, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use foodsense_core::domain::scan::{
    entities::ScanResult, ports::ScanService, value_objects::ScanImageInput,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/image",
    tag = "scan",
    summary = "Scan a product label photo",
    description = "Analyzes an uploaded label image with the LLM vision model",
    responses(
        (status = 200, body = ScanResult)
    ),
)]
pub async fn scan_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ScanResult>, ApiError> {
    let mut upload: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .ok_or_else(|| ApiError::BadRequest("Missing content type for file".to_string()))?
            .to_string();

        // Reject non-images before reading the payload
        if !content_type.starts_with("image/") {
            return Err(ApiError::BadRequest("File must be an image.".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        upload = Some((data.to_vec(), content_type));
    }

    let (image_data, mime_type) =
        upload.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let result = state
        .service
        .scan_image(ScanImageInput {
            image_data,
            mime_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
