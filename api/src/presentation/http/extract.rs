use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::presentation::http::error::ApiError;

/// JSON body whose rejections come back as `ApiError::BadRequest`.
///
/// A request without a JSON content type is read as an empty payload, so the
/// handler reports which fields are missing.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonBody(T::default())),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}
