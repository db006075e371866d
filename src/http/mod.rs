//! HTTP layer: axum router, form handlers, and server-rendered pages.
//!
//! Handlers parse and validate the form, delegate to the fetcher and the
//! service layer, and render the result as HTML. All business logic lives in
//! [`crate::services`].

pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
