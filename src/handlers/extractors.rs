use async_trait::async_trait;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::ServiceError;

/// Numeric row id taken from the single path parameter.
/// Non-numeric ids are rejected with 400 before any query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i32);

impl ResourceId {
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        raw.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ServiceError::InvalidId(raw.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ServiceError::InvalidId(e.body_text()))?;

        Self::parse(&raw)
    }
}

/// JSON body that has passed its `validator` rules
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::InvalidInput(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}
