//! Responses for requests that match no route, or a route without that method.

use crate::error::AppError;
use axum::{extract::OriginalUri, http::Method};

pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("Path not found: {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed(format!("{} not allowed for {}", method, uri.path()))
}
