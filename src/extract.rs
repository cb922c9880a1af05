use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::validation::Validate;

/// JSON body that has passed its field rules, already turned into the
/// command the services take.
///
/// A body that cannot be parsed is rejected with `MalformedBody`; one that
/// parses but breaks rules is rejected with every violation at once.
pub struct ValidatedJson<T: Validate>(pub T::Command);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    T::Command: Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        payload
            .validate()
            .map(ValidatedJson)
            .map_err(AppError::ValidationFailed)
    }
}

/// Integer `{id}` path segment. Anything that is not an `i64` answers 404,
/// as no resource can live at that URL.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Rejected path id");
            AppError::RouteNotFound
        })?;
        Ok(IdPath(id))
    }
}

/// Query string whose parse failures answer in the envelope.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
        Ok(QueryParams(query))
    }
}
