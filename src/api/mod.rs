// Wire shapes of response bodies and the schemas that document them
pub mod envelope;

pub use envelope::{Empty, ProfileBody, TokenIssued};
