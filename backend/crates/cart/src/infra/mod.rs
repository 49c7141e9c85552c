//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCartRepository;
pub use postgres::PgCartRepository;
