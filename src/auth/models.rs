use serde::{Deserialize, Serialize};

use crate::schema::{BodySchema, Schema};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl BodySchema for RegisterRequest {
    fn schema() -> Schema {
        Schema::object()
            .field("name", Schema::string().min_length(1).max_length(255))
            .field("email", Schema::string().email().min_length(1).max_length(255))
            .field("password", Schema::string().min_length(8).max_length(16))
            .into()
    }
}

/// Login only checks that both fields are strings; the handler decides the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl BodySchema for LoginRequest {
    fn schema() -> Schema {
        Schema::object()
            .field("email", Schema::string())
            .field("password", Schema::string())
            .into()
    }
}

/// Body of logout, refresh and profile requests
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

impl BodySchema for TokenRequest {
    fn schema() -> Schema {
        Schema::object()
            .field("token", Schema::string().min_length(1))
            .into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn schema() -> Schema {
        Schema::object()
            .field("id", Schema::integer())
            .field("name", Schema::string())
            .field("email", Schema::string())
            .into()
    }
}
