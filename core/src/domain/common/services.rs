use crate::domain::scan::ports::{LlmClient, ProductLookup};

/// Aggregate service holding every outbound adapter. Operations are added by
/// domain modules implementing their service traits on it.
#[derive(Debug, Clone)]
pub struct Service<P, L>
where
    P: ProductLookup,
    L: LlmClient,
{
    pub product_lookup: P,
    pub llm_client: L,
}

impl<P, L> Service<P, L>
where
    P: ProductLookup,
    L: LlmClient,
{
    pub fn new(product_lookup: P, llm_client: L) -> Self {
        Self {
            product_lookup,
            llm_client,
        }
    }
}
