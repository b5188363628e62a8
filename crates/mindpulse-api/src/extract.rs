//! Request extractors whose rejections use the `{ "error": ... }` body.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::ApiError;

/// Drop-in replacement for `axum::Json` in handler arguments.
///
/// A body that parses as JSON but does not fit the target type is a
/// validation error (422); anything else wrong with the body is a bad
/// request (400).
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

pub fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    let message = format!("invalid request body: {}", rejection.body_text());
    match rejection {
        JsonRejection::JsonDataError(_) => ApiError::Validation(message),
        _ => ApiError::BadRequest(message),
    }
}
