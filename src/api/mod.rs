//! HTTP surface for timeline extraction.
//!
//! Routes are nested under `/api/`. `timeline_api_router()` returns a
//! composable `Router`; `server` binds it and manages its lifecycle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::timeline_api_router;
pub use server::{start_server, TimelineApiServer, TimelineApiSession};
