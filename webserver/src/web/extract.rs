//! Request extractors

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::WebServerError;

/// JSON request body whose rejections answer with the error envelope
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        WebServerError::InvalidRequest {
            details: rejection.body_text(),
        }
    }
}
