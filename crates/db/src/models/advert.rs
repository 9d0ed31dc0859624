use adboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `adverts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Advert {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub creation_time: Timestamp,
}
