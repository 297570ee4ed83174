//! Session domain module.
//!
//! Holds the authentication token of the current user together with the
//! login request lifecycle (loading flag and last error message).
//!
//! The state is a plain value with reducer-style methods; the async
//! orchestration against the store API lives in the application layer.

mod credentials;
mod state;
mod status;

pub use credentials::Credentials;
pub use state::{AuthToken, SessionState, LOGIN_FAILED_MESSAGE};
pub use status::SessionStatus;
