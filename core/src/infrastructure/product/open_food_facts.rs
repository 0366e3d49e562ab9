use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{ProductDbConfig, entities::app_errors::CoreError},
    scan::{entities::ProductRecord, ports::ProductLookup},
};

const DEFAULT_PRODUCT_NAME: &str = "Unknown Product";

/// OpenFoodFacts barcode lookup. One attempt per call, bounded timeout, no
/// caching.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct OffResponse {
    #[serde(default)]
    status: i64,
    product: Option<OffProduct>,
}

#[derive(Debug, Deserialize)]
struct OffProduct {
    #[serde(default)]
    product_name: String,
    #[serde(default)]
    ingredients_text: String,
    #[serde(default)]
    brands: String,
    #[serde(default)]
    categories: String,
    image_front_url: Option<String>,
}

impl From<OffProduct> for ProductRecord {
    fn from(product: OffProduct) -> Self {
        let product_name = if product.product_name.is_empty() {
            DEFAULT_PRODUCT_NAME.to_string()
        } else {
            product.product_name
        };

        ProductRecord {
            product_name,
            ingredients_text: product.ingredients_text,
            brands: product.brands,
            categories: product.categories,
            image_front_url: product.image_front_url,
        }
    }
}

impl OpenFoodFactsClient {
    pub fn new(config: ProductDbConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }
}

impl ProductLookup for OpenFoodFactsClient {
    async fn get_product_by_barcode(
        &self,
        barcode: String,
    ) -> Result<Option<ProductRecord>, CoreError> {
        let url = format!("{}/api/v2/product/{}.json", self.base_url, barcode);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("product database request failed: {}", e);
            CoreError::ExternalServiceError(format!("product database error: {}", e))
        })?;

        let body: OffResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse product database response: {}", e);
            CoreError::ExternalServiceError(format!(
                "failed to parse product database response: {}",
                e
            ))
        })?;

        // status != 1 means the barcode is not known to the database
        if body.status != 1 {
            return Ok(None);
        }

        Ok(body.product.map(ProductRecord::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_payload_maps_to_product_record() {
        let raw = r#"{
            "status": 1,
            "product": {
                "product_name": "Example Cereal",
                "ingredients_text": "sugar, corn, red 40",
                "brands": "Acme",
                "categories": "Breakfast cereals",
                "image_front_url": "https://images.example/cereal.jpg"
            }
        }"#;

        let body: OffResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.status, 1);

        let record = ProductRecord::from(body.product.unwrap());
        assert_eq!(record.product_name, "Example Cereal");
        assert_eq!(record.ingredients_text, "sugar, corn, red 40");
        assert_eq!(
            record.image_front_url.as_deref(),
            Some("https://images.example/cereal.jpg")
        );
    }

    #[test]
    fn missing_fields_default_to_empty_and_placeholder_name() {
        let body: OffResponse = serde_json::from_str(r#"{"status": 1, "product": {}}"#).unwrap();
        let record = ProductRecord::from(body.product.unwrap());

        assert_eq!(record.product_name, DEFAULT_PRODUCT_NAME);
        assert!(record.ingredients_text.is_empty());
        assert!(record.image_front_url.is_none());
    }

    #[test]
    fn zero_status_payload_has_no_product() {
        let body: OffResponse =
            serde_json::from_str(r#"{"status": 0, "status_verbose": "product not found"}"#)
                .unwrap();
        assert_eq!(body.status, 0);
        assert!(body.product.is_none());
    }
}
