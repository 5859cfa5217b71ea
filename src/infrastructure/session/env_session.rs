use crate::domain::entities::user::CurrentUser;
use crate::domain::ports::secondary::session::SessionProvider;

const USER_ID_ENV: &str = "APPDOCK_USER_ID";
const DEFAULT_USER_ID: &str = "local";

/// Session collaborator backed by the process environment. Deployments that
/// embed the console behind a real auth layer swap this implementation out.
pub struct EnvSessionProvider;

impl SessionProvider for EnvSessionProvider {
    fn current_user(&self) -> CurrentUser {
        let user_id =
            std::env::var(USER_ID_ENV).unwrap_or_else(|_| DEFAULT_USER_ID.to_string());
        CurrentUser { user_id }
    }
}
