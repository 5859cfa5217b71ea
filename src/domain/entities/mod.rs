pub mod application;
pub mod pagination;
pub mod query;
pub mod user;
