// HTTP response utilities for JSON and TOML documents
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TOML_CONTENT_TYPE: &str = "application/toml";

/// Serialize a value to JSON and wrap it in a 200 response
pub fn json_response<T: Serialize>(data: &T) -> Result<Response<Body>, StatusCode> {
    let body = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    document_response(body, JSON_CONTENT_TYPE)
}

/// Wrap an already encoded document in a 200 response
pub fn document_response(
    body: impl Into<Vec<u8>>,
    content_type: &'static str,
) -> Result<Response<Body>, StatusCode> {
    let body = body.into();
    let content_length = HeaderValue::from_str(&body.len().to_string()).map_err(|e| {
        tracing::error!("Invalid content length header: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content_length)
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
