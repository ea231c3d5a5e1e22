// Read-only category repository backed by the loaded configuration
use crate::application::category_repository::CategoryRepository;
use crate::domain::category::GraphCategory;
use async_trait::async_trait;
use std::collections::BTreeMap;

pub struct ConfigCategoryRepository {
    categories: BTreeMap<String, GraphCategory>,
}

impl ConfigCategoryRepository {
    pub fn new(categories: BTreeMap<String, GraphCategory>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryRepository for ConfigCategoryRepository {
    async fn list_categories(&self) -> anyhow::Result<BTreeMap<String, GraphCategory>> {
        Ok(self.categories.clone())
    }

    async fn get_category(&self, name: &str) -> anyhow::Result<Option<GraphCategory>> {
        Ok(self.categories.get(name).cloned())
    }
}
