//! Repository for the `adverts` table.

use adboard_core::advert::NewAdvert;
use adboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::advert::Advert;

/// Column list for `adverts` queries.
const COLUMNS: &str = "id, title, description, owner, creation_time";

/// Provides create, lookup and delete for adverts. There is no update.
pub struct AdvertRepo;

impl AdvertRepo {
    /// Insert a new advert. `id` and `creation_time` are assigned by the
    /// database.
    pub async fn create(pool: &PgPool, input: &NewAdvert) -> Result<Advert, sqlx::Error> {
        let query = format!(
            "INSERT INTO adverts (title, description, owner) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advert>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.owner)
            .fetch_one(pool)
            .await
    }

    /// Find an advert by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Advert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM adverts WHERE id = $1");
        sqlx::query_as::<_, Advert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an advert by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM adverts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
