pub mod application_import_use_case;
pub mod application_query_use_case;
