use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Consumer guidance for a scanned product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Caution,
    Avoid,
    Unknown,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientStatus {
    Safe,
    Risky,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub name: String,
    pub status: IngredientStatus,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum NutrientLevel {
    Low,
    Moderate,
    High,
}

/// NOVA food-processing scale. NOVA1 is unprocessed, NOVA4 ultra-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessingLevel {
    Nova1,
    Nova2,
    Nova3,
    Nova4,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalHighlights {
    pub sugar: NutrientLevel,
    pub sodium: NutrientLevel,
    pub processing: ProcessingLevel,
}

/// The structured answer expected back from the model. Fallback verdicts
/// built locally carry only `verdict` and `explanation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisVerdict {
    pub verdict: Verdict,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients_analysis: Vec<IngredientAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_highlights: Option<NutritionalHighlights>,
}

impl AnalysisVerdict {
    pub fn error(explanation: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Error,
            explanation: explanation.into(),
            risk_level: None,
            ingredients_analysis: Vec::new(),
            nutritional_highlights: None,
        }
    }

    pub fn unknown(explanation: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Unknown,
            explanation: explanation.into(),
            risk_level: None,
            ingredients_analysis: Vec::new(),
            nutritional_highlights: None,
        }
    }
}

/// Merged response payload for both scan operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub analysis: AnalysisVerdict,
}

impl ScanResult {
    /// A result carrying no product identification, only a verdict.
    pub fn bare(analysis: AnalysisVerdict) -> Self {
        Self {
            product_name: None,
            image_url: None,
            analysis,
        }
    }
}
