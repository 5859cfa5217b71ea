use crate::domain::entities::user::CurrentUser;

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> CurrentUser;
}
