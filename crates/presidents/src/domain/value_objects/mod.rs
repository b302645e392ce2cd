//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod page;

pub use page::*;
