pub mod application_import_service;
pub mod application_query_service;
