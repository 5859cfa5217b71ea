use crate::domain::entities::application::ApplicationRecord;

/// One page of the listing plus the store-wide total for the active filter.
/// `total_count` always comes from a COUNT over the store, never from
/// `items.len()`.
#[derive(Clone, Debug)]
pub struct PaginatedApplications {
    pub items: Vec<ApplicationRecord>,
    pub total_count: u64,
}
