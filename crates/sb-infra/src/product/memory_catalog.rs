use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use sb_core::ports::{Product, ProductLookupPort};

/// In-memory product catalog.
///
/// Stands in for the product-lookup collaborator owned by the
/// surrounding application; used by tests and demos.
#[derive(Default)]
pub struct InMemoryProductCatalog {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, product: Product) {
        self.products
            .write()
            .await
            .insert(product.id.clone(), product);
    }
}

#[async_trait]
impl ProductLookupPort for InMemoryProductCatalog {
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }
}
