use crate::{
    domain::common::{FoodsenseConfig, services::Service},
    infrastructure::{llm::GeminiLlmClient, product::OpenFoodFactsClient},
};

/// Concrete service type wiring the production adapters together.
pub type FoodsenseService = Service<OpenFoodFactsClient, GeminiLlmClient>;

pub fn create_service(config: FoodsenseConfig) -> Result<FoodsenseService, anyhow::Error> {
    let product_lookup = OpenFoodFactsClient::new(config.product_db)?;
    let llm_client = GeminiLlmClient::new(config.llm)?;

    Ok(Service::new(product_lookup, llm_client))
}
