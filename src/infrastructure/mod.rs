pub mod database;
pub mod dialogs;
pub mod filesystem;
pub mod session;
