//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that rejects with [`AppError::InvalidPayload`].
///
/// Missing or non-JSON content type, syntax errors, missing fields and
/// mistyped fields are all reported the same way.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected request body");
                Err(AppError::InvalidPayload)
            }
        }
    }
}

/// Single-segment short code taken from the request path.
///
/// A segment that cannot be decoded into a `String` (for example `%FF`) can
/// never name a stored mapping, so it is rejected with [`AppError::NotFound`].
#[derive(Debug)]
pub struct ShortCodePath(pub String);

impl<S> FromRequestParts<S> for ShortCodePath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(code)) => Ok(Self(code)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected short code path");
                Err(AppError::NotFound)
            }
        }
    }
}
