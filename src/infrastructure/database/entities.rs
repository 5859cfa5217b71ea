use crate::infrastructure::database::schema::applications;
use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable};

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = applications)]
pub struct ApplicationEntity {
    pub id: String,
    pub name: String,
    pub application_file: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = applications)]
pub struct NewApplicationDto {
    pub id: String,
    pub name: String,
    pub application_file: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
