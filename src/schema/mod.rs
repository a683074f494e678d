// Declarative request/response schemas.
//
// One schema value is used twice: to validate inbound JSON bodies and to
// describe the route contract in the generated OpenAPI document.

pub mod locale;
pub mod openapi;
pub mod types;
pub mod validate;

use serde::de::DeserializeOwned;

pub use locale::{IssueKind, Locale};
pub use types::{Issue, IssuePathItem, ObjectSchema, Schema, StringCheck, StringSchema};
pub use validate::{parse, validate};

/// A request body type together with the schema it must satisfy
pub trait BodySchema: DeserializeOwned {
    fn schema() -> Schema;
}
