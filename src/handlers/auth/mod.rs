// handlers/auth/mod.rs - Authentication handlers
//
// Session acquisition and teardown. Every handler takes a `ValidatedJson`
// body, so malformed input is answered with 400 before any of these run.

pub mod login;    // POST /auth/login
pub mod logout;   // POST /auth/logout
pub mod refresh;  // POST /auth/refresh
pub mod register; // POST /auth/register

pub use login::login_post;
pub use logout::logout_post;
pub use refresh::refresh_post;
pub use register::register_post;
