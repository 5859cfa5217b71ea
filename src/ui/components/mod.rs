pub mod columns;
pub mod pagination;
pub mod search;
pub mod table;
pub mod upload;
