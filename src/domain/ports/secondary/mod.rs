pub mod bundle_picker;
pub mod deployment_prompt;
pub mod repositories;
pub mod session;
