//! Custom extractors
//!
//! Wrap axum's JSON, query and path extractors so that rejections come back
//! as [`ServerError`] bodies instead of axum's plain-text defaults.

use crate::error::ServerError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use campus_core::ValidationError;
use serde::de::DeserializeOwned;

/// Custom JSON extractor with better error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(match rejection {
                JsonRejection::JsonDataError(err) => {
                    ServerError::Validation(vec![ValidationError::Malformed(err.body_text())])
                }
                JsonRejection::JsonSyntaxError(err) => {
                    ServerError::InvalidRequest(format!("JSON syntax error: {}", err.body_text()))
                }
                JsonRejection::MissingJsonContentType(_) => ServerError::InvalidRequest(
                    "Missing 'Content-Type: application/json' header".to_string(),
                ),
                _ => ServerError::InvalidRequest(format!("Failed to parse JSON: {}", rejection)),
            }),
        }
    }
}

/// Query string extractor; undecodable parameters are validation errors
pub struct QueryExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for QueryExtractor<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection: QueryRejection| {
                ServerError::Validation(vec![ValidationError::Malformed(rejection.body_text())])
            })
    }
}

/// Path parameter extractor; undecodable segments are validation errors
pub struct PathExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for PathExtractor<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection: PathRejection| match rejection {
                PathRejection::FailedToDeserializePathParams(err) => {
                    ServerError::Validation(vec![ValidationError::Malformed(err.body_text())])
                }
                other => ServerError::InternalError(other.body_text()),
            })
    }
}
