pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct FoodsenseConfig {
    pub llm: LlmConfig,
    pub product_db: ProductDbConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ProductDbConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}
