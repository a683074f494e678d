// handlers/auth/login.rs - POST /auth/login handler

use axum::http::Method;

use crate::api::{envelope, TokenIssued};
use crate::auth::{self, LoginRequest};
use crate::docs::RouteDoc;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schema::BodySchema;

pub const PATH: &str = "/auth/login";

/// POST /auth/login - Exchange credentials for the session token
///
/// Expected Input:
/// ```json
/// {
///   "email": "string",
///   "password": "string"
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "success": true, "token": "xxxxxxx" }
/// ```
///
/// Both fields empty yields 401 `{ "message": "メールアドレスまたはパスワードが違います" }`.
pub async fn login_post(ValidatedJson(body): ValidatedJson<LoginRequest>) -> ApiResult<TokenIssued> {
    let token = auth::verify_credentials(&body.email, &body.password)?;

    Ok(ApiResponse::success(TokenIssued {
        token: token.to_string(),
    }))
}

pub fn route_doc() -> RouteDoc {
    RouteDoc::new(Method::POST, PATH, "ログイン")
        .request(LoginRequest::schema())
        .response(200, "ログイン成功", envelope::token_schema())
        .response(401, "ログイン失敗", envelope::message_schema())
}
