//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod president_repository;

pub use president_repository::*;
