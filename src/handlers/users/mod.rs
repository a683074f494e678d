// handlers/users/mod.rs - User profile handlers

pub mod me; // GET /users/me

pub use me::me_get;
