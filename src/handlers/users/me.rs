// handlers/users/me.rs - GET /users/me handler

use axum::{extract::State, http::Method};

use crate::api::{envelope, ProfileBody};
use crate::app::AppState;
use crate::auth::{self, TokenRequest};
use crate::docs::RouteDoc;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schema::BodySchema;

pub const PATH: &str = "/users/me";

/// GET /users/me - Profile of the session's user
///
/// The token travels in the JSON body, not an Authorization header.
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "user": { "id": 1, "name": "test", "email": "test@example.com" }
/// }
/// ```
///
/// The body is checked against the declared 200 schema before it is sent.
pub async fn me_get(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TokenRequest>,
) -> ApiResult<ProfileBody> {
    auth::verify_token(&body.token)?;

    let response = ApiResponse::success(ProfileBody {
        user: auth::current_user(),
    });
    state
        .docs
        .check_response(&Method::GET, PATH, &response, &state.validation)?;

    Ok(response)
}

pub fn route_doc() -> RouteDoc {
    RouteDoc::new(Method::GET, PATH, "ユーザー情報の取得")
        .request(TokenRequest::schema())
        .response(200, "取得成功", envelope::profile_schema())
        .response(401, "取得失敗", envelope::message_schema())
        .validate_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::app::app;
    use crate::auth::SENTINEL_TOKEN;
    use crate::config::AppConfig;
    use crate::testing::send;

    #[tokio::test]
    async fn returns_fixed_profile_for_sentinel() {
        let router = app(&AppConfig::development());
        let (status, body) = send(router, Method::GET, super::PATH, Some(json!({ "token": SENTINEL_TOKEN }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "user": { "id": 1, "name": "test", "email": "test@example.com" }
            })
        );
    }

    #[tokio::test]
    async fn rejects_other_tokens() {
        let router = app(&AppConfig::development());
        let (status, body) = send(router, Method::GET, super::PATH, Some(json!({ "token": "nope" }))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "トークンが無効です" }));
    }

    #[tokio::test]
    async fn missing_body_is_a_validation_error() {
        let router = app(&AppConfig::development());
        let (status, body) = send(router, Method::GET, super::PATH, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }
}
