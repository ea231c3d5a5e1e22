// Category service - Use cases for reading configured categories and folds
use crate::application::category_repository::CategoryRepository;
use crate::domain::category::GraphCategory;
use crate::domain::category_fold::CategoryFold;
use crate::error::GraphError;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_categories(&self) -> anyhow::Result<BTreeMap<String, GraphCategory>> {
        self.repository.list_categories().await
    }

    /// Fold of a category. Unknown categories are an error; a known category
    /// without a fold yields `None`.
    pub async fn get_fold(&self, name: &str) -> anyhow::Result<Option<CategoryFold>> {
        let category = self
            .repository
            .get_category(name)
            .await?
            .ok_or_else(|| GraphError::UnknownCategory(name.to_string()))?;

        Ok(category.fold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::category_store::ConfigCategoryRepository;

    fn service() -> CategoryService {
        let mut categories = BTreeMap::new();
        categories.insert(
            "region".to_string(),
            GraphCategory::with_fold(CategoryFold::new(Some("Regions".to_string()), 3, None)),
        );
        categories.insert("account".to_string(), GraphCategory::default());
        CategoryService::new(Arc::new(ConfigCategoryRepository::new(categories)))
    }

    #[tokio::test]
    async fn test_get_fold() {
        let fold = service().get_fold("region").await.unwrap().unwrap();
        assert_eq!(fold.threshold, 3);
    }

    #[tokio::test]
    async fn test_get_fold_without_fold() {
        assert_eq!(service().get_fold("account").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_fold_unknown_category() {
        let err = service().get_fold("missing").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::UnknownCategory(name)) if name == "missing"
        ));
    }
}
