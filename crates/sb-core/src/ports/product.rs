use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Product record as the lookup collaborator exposes it. The relay
/// core only needs the identifier and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
}

/// Lookup into the product catalog owned by the surrounding
/// application. A miss is `Ok(None)`, not an error: the scanned
/// reference is then surfaced verbatim.
#[async_trait]
pub trait ProductLookupPort: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>>;
}
