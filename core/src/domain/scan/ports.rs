use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan::{
        entities::{ProductRecord, ScanResult},
        value_objects::{ScanBarcodeInput, ScanImageInput},
    },
};

/// Lookup port for the external product database.
#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup: Send + Sync {
    /// Fetches a product by barcode. `Ok(None)` means the database answered
    /// but does not know the barcode; `Err` means it could not be reached.
    fn get_product_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<ProductRecord>, CoreError>> + Send;
}

/// LLM client port for calling the generative model.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the scan operations exposed over HTTP.
#[cfg_attr(test, mockall::automock)]
pub trait ScanService: Send + Sync {
    fn scan_barcode(
        &self,
        input: ScanBarcodeInput,
    ) -> impl Future<Output = Result<ScanResult, CoreError>> + Send;

    fn scan_image(
        &self,
        input: ScanImageInput,
    ) -> impl Future<Output = Result<ScanResult, CoreError>> + Send;
}
