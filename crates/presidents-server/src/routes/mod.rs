//! Presidents API Routes
//!
//! - /health - Liveness check
//! - /presidents - President listing, lookup and mutation
//! - /presidents/paginated - Paged listing
//! - /presidents/name/:name, /presidents/party/:party - Exact-match lookups

pub mod health;
pub mod president;
pub mod swagger;
