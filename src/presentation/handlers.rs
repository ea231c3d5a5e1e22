// HTTP request handlers
use crate::domain::category::GraphCategory;
use crate::domain::graph::{Graph, GraphEdge, GraphNode};
use crate::error::GraphError;
use crate::infrastructure::fold_codec::{encode_json, encode_toml, fold_schema_json};
use crate::infrastructure::http_response::{
    document_response, json_response, JSON_CONTENT_TYPE, TOML_CONTENT_TYPE,
};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

/// Graph to fold, with optional per-request category settings
#[derive(Deserialize)]
pub struct FoldRequest {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub categories: BTreeMap<String, GraphCategory>,
}

fn respond(result: Result<Response, StatusCode>) -> Response {
    result.unwrap_or_else(|status| status.into_response())
}

fn encoded(result: crate::error::Result<String>, content_type: &'static str) -> Response {
    match result {
        Ok(body) => respond(document_response(body, content_type)),
        Err(e) => {
            tracing::error!("Error encoding fold: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all configured categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    match state.category_service.list_categories().await {
        Ok(categories) => respond(json_response(&categories)),
        Err(e) => {
            tracing::error!("Error listing categories: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Fold settings of one category, as JSON (default) or TOML
pub async fn get_category_fold(
    Path(name): Path<String>,
    Query(query): Query<FormatQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let fold = match state.category_service.get_fold(&name).await {
        Ok(Some(fold)) => fold,
        Ok(None) => {
            return (StatusCode::NOT_FOUND, format!("Category {} has no fold", name))
                .into_response();
        }
        Err(e) => {
            if let Some(GraphError::UnknownCategory(_)) = e.downcast_ref::<GraphError>() {
                return (StatusCode::NOT_FOUND, e.to_string()).into_response();
            }
            tracing::error!("Error fetching fold for {}: {}", name, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match query.format.as_deref() {
        None | Some("json") => encoded(encode_json(&fold), JSON_CONTENT_TYPE),
        Some("toml") => encoded(encode_toml(&fold), TOML_CONTENT_TYPE),
        Some(other) => {
            (StatusCode::BAD_REQUEST, format!("Unsupported format: {}", other)).into_response()
        }
    }
}

/// JSON Schema of the fold settings
pub async fn fold_schema() -> Response {
    encoded(fold_schema_json(), JSON_CONTENT_TYPE)
}

/// Fold a graph with the configured (and request-supplied) categories
pub async fn fold_graph(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FoldRequest>,
) -> Response {
    let graph = Graph::new(request.nodes, request.edges);

    match state.fold_service.fold_graph(graph, request.categories).await {
        Ok(folded) => respond(json_response(&folded)),
        Err(e) => {
            tracing::error!("Error folding graph: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::category_service::CategoryService;
    use crate::application::fold_service::FoldService;
    use crate::domain::category_fold::CategoryFold;
    use crate::infrastructure::category_store::ConfigCategoryRepository;
    use axum::http::header;
    use serde_json::{json, Value};

    fn state() -> Arc<AppState> {
        let mut categories = BTreeMap::new();
        categories.insert(
            "region".to_string(),
            GraphCategory::with_fold(CategoryFold::new(Some("Region".to_string()), 3, None)),
        );
        categories.insert("account".to_string(), GraphCategory::default());

        let repository = Arc::new(ConfigCategoryRepository::new(categories));
        Arc::new(AppState {
            category_service: CategoryService::new(repository.clone()),
            fold_service: FoldService::new(repository),
        })
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn format(format: Option<&str>) -> Query<FormatQuery> {
        Query(FormatQuery {
            format: format.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_get_fold_as_json() {
        let response =
            get_category_fold(Path("region".to_string()), format(None), State(state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);

        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value, json!({ "title": "Region", "threshold": 3 }));
    }

    #[tokio::test]
    async fn test_get_fold_as_toml() {
        let response =
            get_category_fold(Path("region".to_string()), format(Some("toml")), State(state()))
                .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TOML_CONTENT_TYPE);

        let body = body_string(response).await;
        assert!(body.contains("title = \"Region\""));
        assert!(body.contains("threshold = 3"));
        assert!(!body.contains("icon"));
    }

    #[tokio::test]
    async fn test_get_fold_not_found() {
        let missing =
            get_category_fold(Path("missing".to_string()), format(None), State(state())).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let unfolded =
            get_category_fold(Path("account".to_string()), format(None), State(state())).await;
        assert_eq!(unfolded.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_fold_unsupported_format() {
        let response =
            get_category_fold(Path("region".to_string()), format(Some("xml")), State(state()))
                .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_categories() {
        let response = list_categories(State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            value,
            json!({
                "account": {},
                "region": { "fold": { "title": "Region", "threshold": 3 } }
            })
        );
    }

    #[tokio::test]
    async fn test_fold_schema() {
        let response = fold_schema().await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(value["properties"]["threshold"].is_object());
    }

    #[tokio::test]
    async fn test_fold_graph() {
        let request: FoldRequest = serde_json::from_value(json!({
            "nodes": [
                { "id": "acct", "category": "account" },
                { "id": "r1", "category": "region" },
                { "id": "r2", "category": "region" },
                { "id": "r3", "category": "region" }
            ],
            "edges": [
                { "id": "acct_r1", "from_id": "acct", "to_id": "r1" },
                { "id": "acct_r2", "from_id": "acct", "to_id": "r2" },
                { "id": "acct_r3", "from_id": "acct", "to_id": "r3" }
            ]
        }))
        .unwrap();

        let response = fold_graph(State(state()), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["nodes"][1]["id"], "fold-region-1");
        assert_eq!(value["nodes"][1]["title"], "Region");
        assert_eq!(value["nodes"][1]["folded_nodes"].as_array().unwrap().len(), 3);
        assert_eq!(
            value["edges"],
            json!([{ "id": "acct_fold-region-1", "from_id": "acct", "to_id": "fold-region-1" }])
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }
}
