// handlers/auth/refresh.rs - POST /auth/refresh handler

use axum::http::Method;

use crate::api::{envelope, TokenIssued};
use crate::auth::{self, TokenRequest, SENTINEL_TOKEN};
use crate::docs::RouteDoc;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schema::BodySchema;

pub const PATH: &str = "/auth/refresh";

/// POST /auth/refresh - Trade a valid token for a fresh one
///
/// Expected Input:
/// ```json
/// { "token": "string" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "success": true, "token": "xxxxxxx" }
/// ```
pub async fn refresh_post(ValidatedJson(body): ValidatedJson<TokenRequest>) -> ApiResult<TokenIssued> {
    auth::verify_token(&body.token)?;

    // The "new" token is the same sentinel
    Ok(ApiResponse::success(TokenIssued {
        token: SENTINEL_TOKEN.to_string(),
    }))
}

pub fn route_doc() -> RouteDoc {
    RouteDoc::new(Method::POST, PATH, "トークンの更新")
        .request(TokenRequest::schema())
        .response(200, "更新成功", envelope::token_schema())
        .response(401, "更新失敗", envelope::message_schema())
}
