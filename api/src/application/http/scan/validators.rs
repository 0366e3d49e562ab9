use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScanBarcodeRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "barcode must be between 1 and 64 characters"
    ))]
    #[schema(example = "737628064502")]
    pub barcode: String,
}
