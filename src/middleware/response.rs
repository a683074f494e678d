use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Wrapper for API responses that automatically adds the success envelope.
///
/// The body's own fields are merged next to `success: true`, so
/// `TokenIssued { token }` goes out as `{ "success": true, "token": ... }`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data }
    }

    /// Every success envelope goes out as 200 OK
    pub fn status(&self) -> StatusCode {
        StatusCode::OK
    }

    /// The JSON body this response will be sent with
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let mut envelope = Map::new();
        envelope.insert("success".to_string(), Value::Bool(true));

        match serde_json::to_value(&self.data)? {
            Value::Object(fields) => envelope.extend(fields),
            Value::Null => {}
            other => {
                envelope.insert("data".to_string(), other);
            }
        }

        Ok(Value::Object(envelope))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();

        match self.to_value() {
            Ok(envelope) => (status, Json(envelope)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": "Failed to serialize response data"
                    })),
                )
                    .into_response()
            }
        }
    }
}

// Convenience type alias
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Empty, TokenIssued};

    #[test]
    fn merges_fields_beside_success_flag() {
        let response = ApiResponse::success(TokenIssued {
            token: "xxxxxxx".to_string(),
        });
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.to_value().unwrap(),
            json!({ "success": true, "token": "xxxxxxx" })
        );
    }

    #[test]
    fn empty_body_is_just_the_flag() {
        let response = ApiResponse::success(Empty {});
        assert_eq!(response.to_value().unwrap(), json!({ "success": true }));
    }

    #[test]
    fn scalar_data_is_nested() {
        let response = ApiResponse::success(3);
        assert_eq!(response.to_value().unwrap(), json!({ "success": true, "data": 3 }));
    }
}
