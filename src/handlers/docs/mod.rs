// handlers/docs/mod.rs - API documentation endpoints
//
// Read-only; neither route takes part in authentication.

pub mod openapi; // GET /openapi
pub mod ui;      // GET /ui

pub use openapi::openapi_get;
pub use ui::ui_get;
