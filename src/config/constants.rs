use crate::utils::dialogs::popup_error_and_exit;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use std::sync::LazyLock;
use tokio::runtime::Runtime;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub const DATABASE_URL: &str = "appdock.db";

/// Page sizes offered by the listing view. Selections outside this set are
/// ignored.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 25];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Reserved demo account. Sessions under this user id get a read-only
/// listing: no sorting, no searching.
pub const READ_ONLY_USER_ID: &str = "meshery";

pub static TOKIO_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_io()
        .build()
        .unwrap_or_else(|err| popup_error_and_exit(err))
});
