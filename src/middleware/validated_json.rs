use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
};
use serde_json::Value;

use crate::config::ValidationConfig;
use crate::error::ApiError;
use crate::schema::{self, BodySchema, Issue, IssueKind};

/// JSON body that has already passed its schema.
///
/// Rejects with a 400 issue list before the handler runs, so handlers taking
/// `ValidatedJson<T>` only ever see a well-formed `T`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: BodySchema,
    S: Send + Sync,
    ValidationConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let config = ValidationConfig::from_ref(state);
        let uri = req.uri().clone();

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::validation_error(vec![Issue::root(
                config.locale.message(&IssueKind::Json { detail: e.body_text() }),
            )])
        })?;

        let raw: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("Rejected non-JSON body on {}: {}", uri, e);
            ApiError::validation_error(vec![Issue::root(
                config.locale.message(&IssueKind::Json { detail: e.to_string() }),
            )])
        })?;

        let typed = schema::parse::<T>(&T::schema(), raw, &config).map_err(|issues| {
            tracing::debug!(
                "Rejected body on {}: {} issue(s) at [{}]",
                uri,
                issues.len(),
                issues
                    .iter()
                    .map(Issue::dotted_path)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            ApiError::validation_error(issues)
        })?;

        Ok(ValidatedJson(typed))
    }
}
