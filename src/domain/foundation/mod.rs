//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait, and the validation error
//! type that the session, catalog, and ratings modules build on.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{DetailRequestId, LoginAttemptId, ProductId};
pub use state_machine::StateMachine;
