pub mod app_message;
pub mod applications_message;
