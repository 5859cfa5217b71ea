use crate::config::constants::READ_ONLY_USER_ID;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

impl CurrentUser {
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.user_id == READ_ONLY_USER_ID
    }
}
