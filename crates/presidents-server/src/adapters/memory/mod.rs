//! In-memory Repository Implementations

mod president_repository;

pub use president_repository::InMemoryPresidentRepository;
