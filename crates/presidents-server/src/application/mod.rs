//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the repository ports.

mod president_service;

pub use president_service::PresidentService;
