//! Presidents API Data Models
//!
//! - President: wire DTO, pagination query and page response

mod president;

pub use president::*;
