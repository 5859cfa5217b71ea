pub mod domain_error;
pub mod repository_error;
