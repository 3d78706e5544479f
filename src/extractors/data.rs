//! Extract the `data` object from a `{"data": {...}}` request body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
};
use serde_json::{Map, Value};

/// The request's `data` member. A missing or non-object `data` (or a body that is
/// not an object at all) yields an empty map, so field checks report what is missing.
/// Bodies that are empty or not declared as JSON are read as `{}` for the same reason.
#[derive(Clone, Debug, Default)]
pub struct DataBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for DataBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
                _ => AppError::BadRequest(rejection.body_text()),
            })?;
        if !declared_json || bytes.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!(declared_json, len = bytes.len(), "treating request body as empty");
            return Ok(DataBody::default());
        }
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;
        Ok(DataBody(data_member(body)))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn data_member(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(mut outer) => match outer.remove("data") {
            Some(Value::Object(data)) => data,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}
