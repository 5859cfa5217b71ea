pub mod command_repository;
pub mod conversion;
pub mod entities;
pub mod pool;
pub mod query_repository;
pub mod schema;
pub mod settings_repository;
