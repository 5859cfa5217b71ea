pub mod app;
pub mod app_factory;
pub mod components;
pub mod messages;
pub mod pages;
pub mod utils;
