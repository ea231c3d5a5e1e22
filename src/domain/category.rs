// Graph category domain model
use super::category_fold::{safe_strings_equal, CategoryFold};
use serde::{Deserialize, Serialize};

/// Display settings shared by every node of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fold: Option<CategoryFold>,
}

impl GraphCategory {
    pub fn with_fold(fold: CategoryFold) -> Self {
        Self {
            fold: Some(fold),
            ..Self::default()
        }
    }

    pub fn equals(&self, other: Option<&GraphCategory>) -> bool {
        let Some(other) = other else {
            return false;
        };

        let folds_equal = match (&self.fold, &other.fold) {
            (None, None) => true,
            (Some(fold), Some(other_fold)) => fold.equals(Some(other_fold)),
            _ => false,
        };

        safe_strings_equal(self.title.as_deref(), other.title.as_deref())
            && safe_strings_equal(self.color.as_deref(), other.color.as_deref())
            && self.depth == other.depth
            && safe_strings_equal(self.icon.as_deref(), other.icon.as_deref())
            && safe_strings_equal(self.href.as_deref(), other.href.as_deref())
            && folds_equal
    }

    /// Threshold of the fold, if one is configured and active.
    pub fn fold_threshold(&self) -> Option<i64> {
        self.fold
            .as_ref()
            .filter(|fold| fold.is_active())
            .map(|fold| fold.threshold)
    }
}
