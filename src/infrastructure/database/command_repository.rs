use crate::config::constants::TOKIO_RUNTIME;
use crate::domain::entities::application::ApplicationRecord;
use crate::domain::errors::repository_error::RepositoryError;
use crate::infrastructure::database::entities::{ApplicationEntity, NewApplicationDto};
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::applications;
use chrono::Local;
use diesel::prelude::*;
use diesel::{OptionalExtension, QueryDsl, RunQueryDsl, SqliteConnection};
use std::sync::Arc;
use uuid::Uuid;

/// Repository for write operations on applications.
pub struct CommandRepository {
    pool: Arc<SqliteRepositoryPool>,
}

impl CommandRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }

    fn insert_application(
        name: &str,
        application_file: &str,
        conn: &mut SqliteConnection,
    ) -> Result<(), RepositoryError> {
        let now = Local::now().naive_local();
        diesel::insert_into(applications::table)
            .values(NewApplicationDto {
                id: Uuid::now_v7().to_string(),
                name: name.to_string(),
                application_file: application_file.to_string(),
                created_at: now,
                updated_at: now,
            })
            .execute(conn)?;
        Ok(())
    }

    fn replace_application_file(
        id: &str,
        application_file: &str,
        conn: &mut SqliteConnection,
    ) -> Result<(), RepositoryError> {
        diesel::update(applications::table.filter(applications::id.eq(id)))
            .set((
                applications::application_file.eq(application_file),
                applications::updated_at.eq(Local::now().naive_local()),
            ))
            .execute(conn)?;
        Ok(())
    }

    fn find_by_name(
        name: &str,
        conn: &mut SqliteConnection,
    ) -> Result<ApplicationEntity, RepositoryError> {
        let entity = applications::table
            .filter(applications::name.eq(name))
            .first::<ApplicationEntity>(conn)?;
        Ok(entity)
    }
}

#[async_trait::async_trait]
impl crate::domain::ports::secondary::repositories::ApplicationCommandRepository
    for CommandRepository
{
    async fn upsert_application(
        &self,
        name: String,
        application_file: String,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let pool = self.pool.clone();

        TOKIO_RUNTIME
            .handle()
            .spawn_blocking(move || {
                pool.execute_in_transaction(move |conn| {
                    let existing: Option<String> = applications::table
                        .filter(applications::name.eq(&name))
                        .select(applications::id)
                        .first(conn)
                        .optional()?;

                    match existing {
                        Some(id) => {
                            Self::replace_application_file(&id, &application_file, conn)?;
                        }
                        None => Self::insert_application(&name, &application_file, conn)?,
                    }

                    let entity = Self::find_by_name(&name, conn)?;
                    Ok(entity.into())
                })
            })
            .await?
    }
}
