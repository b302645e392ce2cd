//! Presidents Domain Library
//!
//! Core domain types and interfaces for the presidents registry.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (President)
//!   - `value_objects/`: Immutable value types (PageRequest, Page)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use presidents::{President, PresidentRepository, PageRequest};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Page, PageRequest, President};
pub use ports::PresidentRepository;
