pub mod env_session;
