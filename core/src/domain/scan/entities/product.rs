use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product data fetched from the external product database. Read-only,
/// never persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    pub product_name: String,
    pub ingredients_text: String,
    pub brands: String,
    pub categories: String,
    pub image_front_url: Option<String>,
}

impl ProductRecord {
    /// The text handed to the model: the ingredients list when present,
    /// otherwise a descriptive fallback built from name, brand and
    /// categories.
    pub fn ingredients_or_fallback(&self) -> String {
        if self.ingredients_text.trim().is_empty() {
            format!(
                "Product: {}, Brand: {}, Categories: {}. (Ingredients list missing)",
                self.product_name, self.brands, self.categories
            )
        } else {
            self.ingredients_text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_mentions_name_brand_and_categories() {
        let product = ProductRecord {
            product_name: "Example Cereal".to_string(),
            ingredients_text: "  ".to_string(),
            brands: "Acme".to_string(),
            categories: "Breakfast cereals".to_string(),
            image_front_url: None,
        };

        let text = product.ingredients_or_fallback();
        assert!(text.contains("Example Cereal"));
        assert!(text.contains("Acme"));
        assert!(text.contains("Breakfast cereals"));
        assert!(text.contains("Ingredients list missing"));
    }

    #[test]
    fn present_ingredients_are_passed_through_unchanged() {
        let product = ProductRecord {
            product_name: "Example Cereal".to_string(),
            ingredients_text: "sugar, corn, red 40".to_string(),
            brands: "Acme".to_string(),
            categories: "Breakfast cereals".to_string(),
            image_front_url: None,
        };

        assert_eq!(product.ingredients_or_fallback(), "sugar, corn, red 40");
    }
}
