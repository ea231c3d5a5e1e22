// Repository trait for graph category access
use crate::domain::category::GraphCategory;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All configured categories, keyed by category name
    async fn list_categories(&self) -> anyhow::Result<BTreeMap<String, GraphCategory>>;

    /// A single category, or `None` when no category has that name
    async fn get_category(&self, name: &str) -> anyhow::Result<Option<GraphCategory>>;
}
