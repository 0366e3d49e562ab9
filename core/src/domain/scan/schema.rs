use serde_json::json;

/// Returns the structured-output JSON schema the model must follow when
/// producing an [`AnalysisVerdict`](super::entities::AnalysisVerdict).
pub fn verdict_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "verdict": {
                "type": "string",
                "enum": ["SAFE", "CAUTION", "AVOID", "UNKNOWN"]
            },
            "explanation": { "type": "string" },
            "risk_level": {
                "type": "string",
                "enum": ["LOW", "MEDIUM", "HIGH"]
            },
            "ingredients_analysis": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "status": {
                            "type": "string",
                            "enum": ["SAFE", "RISKY"]
                        },
                        "reason": { "type": "string" }
                    },
                    "required": ["name", "status", "reason"]
                }
            },
            "nutritional_highlights": {
                "type": "object",
                "properties": {
                    "sugar": {
                        "type": "string",
                        "enum": ["LOW", "MODERATE", "HIGH"]
                    },
                    "sodium": {
                        "type": "string",
                        "enum": ["LOW", "MODERATE", "HIGH"]
                    },
                    "processing": {
                        "type": "string",
                        "enum": ["NOVA1", "NOVA2", "NOVA3", "NOVA4"]
                    }
                },
                "required": ["sugar", "sodium", "processing"]
            }
        },
        "required": ["verdict", "explanation"]
    })
}
