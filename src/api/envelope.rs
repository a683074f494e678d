use serde::Serialize;

use crate::auth::UserProfile;
use crate::schema::{ObjectSchema, Schema};

/// Body with no fields beyond the `success` flag
#[derive(Debug, Clone, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, Serialize)]
pub struct TokenIssued {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileBody {
    pub user: UserProfile,
}

/// `{ success: true }`, the base every success body extends
pub fn success_schema() -> ObjectSchema {
    Schema::object().field("success", Schema::literal(true))
}

pub fn token_schema() -> Schema {
    ObjectSchema::extend(&success_schema())
        .field("token", Schema::string())
        .into()
}

pub fn profile_schema() -> Schema {
    ObjectSchema::extend(&success_schema())
        .field("user", UserProfile::schema())
        .into()
}

/// `{ message }` body of authentication failures
pub fn message_schema() -> Schema {
    Schema::object().field("message", Schema::string()).into()
}

/// `{ success: false, issues: [...] }` body of validation failures
pub fn issues_schema() -> Schema {
    let path_item = Schema::object()
        .field("key", Schema::string())
        .field("value", Schema::optional(Schema::string()));
    let issue = Schema::object()
        .field("message", Schema::string())
        .field("path", Schema::array(path_item));

    Schema::object()
        .field("success", Schema::literal(false))
        .field("issues", Schema::array(issue))
        .into()
}
