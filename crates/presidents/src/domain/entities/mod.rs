//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - President: stored record of a head of state

mod president;

pub use president::*;
