//! PostgreSQL Repository Implementations

mod president_repository;

pub use president_repository::PgPresidentRepository;
