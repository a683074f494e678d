// handlers/mod.rs - Route handlers grouped by area
//
// auth  → session acquisition/teardown (/auth/*)
// users → profile lookup (/users/*)
// docs  → generated API document and reference UI

pub mod auth;
pub mod docs;
pub mod users;

use crate::docs::ApiDocs;

/// Register the documentation of every handler that has one
pub fn register_docs(docs: &mut ApiDocs) {
    docs.register(auth::register::route_doc())
        .register(auth::login::route_doc())
        .register(auth::logout::route_doc())
        .register(auth::refresh::route_doc())
        .register(users::me::route_doc());
}
