// Fold codec - explicit encoders/decoders for each external form of a fold
use crate::domain::category_fold::CategoryFold;
use crate::error::Result;
use schemars::schema::RootSchema;
use serde::Serialize;

/// TOML view of a fold. TOML has no null, so absent text is left out, but
/// `threshold` is always written.
#[derive(Serialize)]
struct TomlFold<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    threshold: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a str>,
}

impl<'a> From<&'a CategoryFold> for TomlFold<'a> {
    fn from(fold: &'a CategoryFold) -> Self {
        Self {
            title: fold.title.as_deref(),
            threshold: fold.threshold,
            icon: fold.icon.as_deref(),
        }
    }
}

/// Encode a fold as a JSON document. Absent text and a zero threshold are
/// omitted.
pub fn encode_json(fold: &CategoryFold) -> Result<String> {
    Ok(serde_json::to_string(fold)?)
}

pub fn decode_json(input: &str) -> Result<CategoryFold> {
    Ok(serde_json::from_str(input)?)
}

pub fn encode_toml(fold: &CategoryFold) -> Result<String> {
    Ok(toml::to_string(&TomlFold::from(fold))?)
}

pub fn decode_toml(input: &str) -> Result<CategoryFold> {
    Ok(toml::from_str(input)?)
}

/// JSON Schema describing the fold's `title`, `threshold` and `icon` keys.
pub fn fold_schema() -> RootSchema {
    schemars::schema_for!(CategoryFold)
}

pub fn fold_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&fold_schema())?)
}
