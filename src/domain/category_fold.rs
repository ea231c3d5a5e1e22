// Category fold - collapses sibling nodes of a graph category into one node
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fold settings attached to a dashboard graph category.
///
/// `title` and `icon` distinguish "unset" from an empty string. `threshold`
/// has no unset state: zero is both the default and an explicit value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryFold {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub threshold: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl CategoryFold {
    pub fn new(title: Option<String>, threshold: i64, icon: Option<String>) -> Self {
        Self {
            title,
            threshold,
            icon,
        }
    }

    /// Value comparison against a possibly missing fold.
    ///
    /// A fold never equals "no fold configured", not even the default one.
    pub fn equals(&self, other: Option<&CategoryFold>) -> bool {
        let Some(other) = other else {
            return false;
        };

        safe_strings_equal(self.title.as_deref(), other.title.as_deref())
            && self.threshold == other.threshold
            && safe_strings_equal(self.icon.as_deref(), other.icon.as_deref())
    }

    /// A fold only collapses nodes once its threshold is positive.
    pub fn is_active(&self) -> bool {
        self.threshold > 0
    }
}

/// Two missing strings are equal; a missing and a present one never are.
pub fn safe_strings_equal(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
