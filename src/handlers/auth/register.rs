// handlers/auth/register.rs - POST /auth/register handler

use axum::http::Method;

use crate::api::{envelope, Empty};
use crate::auth::RegisterRequest;
use crate::docs::RouteDoc;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schema::BodySchema;

pub const PATH: &str = "/auth/register";

/// POST /auth/register - Register new user account
///
/// Nothing is stored; the validated request is logged and acknowledged.
///
/// Expected Input:
/// ```json
/// {
///   "name": "string",      // 1-255 characters
///   "email": "string",     // email address, 1-255 characters
///   "password": "string"   // 8-16 characters
/// }
/// ```
///
/// Expected Output:
/// ```json
/// { "success": true }
/// ```
pub async fn register_post(ValidatedJson(body): ValidatedJson<RegisterRequest>) -> ApiResult<Empty> {
    tracing::info!(
        name = %body.name,
        email = %body.email,
        password_len = body.password.chars().count(),
        "Registration received"
    );

    Ok(ApiResponse::success(Empty {}))
}

pub fn route_doc() -> RouteDoc {
    RouteDoc::new(Method::POST, PATH, "ユーザー登録")
        .request(RegisterRequest::schema())
        .response(200, "登録成功", envelope::success_schema().into())
        .response(400, "入力エラー", envelope::issues_schema())
}
