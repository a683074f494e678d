// handlers/auth/logout.rs - POST /auth/logout handler

use axum::http::Method;

use crate::api::{envelope, Empty};
use crate::auth::{self, TokenRequest};
use crate::docs::RouteDoc;
use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::schema::BodySchema;

pub const PATH: &str = "/auth/logout";

/// POST /auth/logout - End the session identified by `token`
///
/// There is no session state to drop; a matching token is simply acknowledged.
pub async fn logout_post(ValidatedJson(body): ValidatedJson<TokenRequest>) -> ApiResult<Empty> {
    auth::verify_token(&body.token)?;

    Ok(ApiResponse::success(Empty {}))
}

pub fn route_doc() -> RouteDoc {
    RouteDoc::new(Method::POST, PATH, "ログアウト")
        .request(TokenRequest::schema())
        .response(200, "ログアウト成功", envelope::success_schema().into())
        .response(401, "ログアウト失敗", envelope::message_schema())
}
