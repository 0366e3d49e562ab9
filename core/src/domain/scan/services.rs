use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    scan::{
        entities::{AnalysisVerdict, ScanResult},
        ports::{LlmClient, ProductLookup, ScanService},
        prompt::SCAN_INSTRUCTION,
        schema::verdict_response_schema,
        value_objects::{ScanBarcodeInput, ScanImageInput},
    },
};

pub const DATABASE_UNREACHABLE_EXPLANATION: &str = "Failed to connect to product database.";
pub const PRODUCT_NOT_FOUND_EXPLANATION: &str =
    "Product not found in database. Try scanning the label photo.";
pub const TEXT_ANALYSIS_FAILED_EXPLANATION: &str = "Failed to analyze product.";
pub const IMAGE_ANALYSIS_FAILED_EXPLANATION: &str = "Failed to analyze image.";

/// Placeholder product name for photo scans, which carry no database record.
pub const SCANNED_LABEL_PRODUCT_NAME: &str = "Scanned Label";

impl<P, L> Service<P, L>
where
    P: ProductLookup,
    L: LlmClient,
{
    /// Sends the fixed instruction plus the product text to the model and
    /// parses the reply. Propagates failures so callers can tell transport
    /// errors from malformed output; the scan operations degrade them to
    /// fallback verdicts.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisVerdict, CoreError> {
        let prompt =
            format!("{SCAN_INSTRUCTION}\n\nAnalyze this product properties/ingredients: {text}");

        let raw = self
            .llm_client
            .generate_with_text(prompt, verdict_response_schema())
            .await?;

        parse_verdict(&raw)
    }

    /// Same contract as [`Self::analyze_text`], for a label photo.
    pub async fn analyze_image(
        &self,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> Result<AnalysisVerdict, CoreError> {
        let prompt = format!("{SCAN_INSTRUCTION}\n\nAnalyze this food label.");

        let raw = self
            .llm_client
            .generate_with_image(prompt, image_data, mime_type, verdict_response_schema())
            .await?;

        parse_verdict(&raw)
    }
}

impl<P, L> ScanService for Service<P, L>
where
    P: ProductLookup,
    L: LlmClient,
{
    #[instrument(skip(self), fields(barcode = %input.barcode))]
    async fn scan_barcode(&self, input: ScanBarcodeInput) -> Result<ScanResult, CoreError> {
        // 1. Look the barcode up in the product database
        let product = match self
            .product_lookup
            .get_product_by_barcode(input.barcode.clone())
            .await
        {
            Ok(Some(product)) => product,
            Ok(None) => {
                tracing::info!("barcode not found in product database");
                return Ok(ScanResult::bare(AnalysisVerdict::unknown(
                    PRODUCT_NOT_FOUND_EXPLANATION,
                )));
            }
            Err(err) => {
                tracing::error!("product database lookup failed: {err}");
                return Ok(ScanResult::bare(AnalysisVerdict::error(
                    DATABASE_UNREACHABLE_EXPLANATION,
                )));
            }
        };

        // 2. Analyze the ingredients text, degrading to an error verdict
        let ingredients_text = product.ingredients_or_fallback();
        let analysis = match self.analyze_text(&ingredients_text).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::error!("text analysis failed: {err}");
                AnalysisVerdict::error(TEXT_ANALYSIS_FAILED_EXPLANATION)
            }
        };

        // 3. Merge product identification into the response
        Ok(ScanResult {
            product_name: Some(product.product_name),
            image_url: product.image_front_url,
            analysis,
        })
    }

    #[instrument(skip(self, input), fields(mime_type = %input.mime_type, size = input.image_data.len()))]
    async fn scan_image(&self, input: ScanImageInput) -> Result<ScanResult, CoreError> {
        let analysis = match self.analyze_image(input.image_data, input.mime_type).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::error!("image analysis failed: {err}");
                AnalysisVerdict::error(IMAGE_ANALYSIS_FAILED_EXPLANATION)
            }
        };

        Ok(ScanResult {
            product_name: Some(SCANNED_LABEL_PRODUCT_NAME.to_string()),
            image_url: None,
            analysis,
        })
    }
}

fn parse_verdict(raw: &str) -> Result<AnalysisVerdict, CoreError> {
    serde_json::from_str(raw).map_err(|err| {
        tracing::error!("failed to parse LLM response: {err}");
        CoreError::ExternalServiceError(format!("failed to parse LLM response: {err}"))
    })
}
