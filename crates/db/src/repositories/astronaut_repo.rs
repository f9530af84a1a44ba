//! Repository for the `astronauts` table.
//!
//! Routes only ever reach astronauts through their spacecraft, so most
//! lookups are scoped by `spacecraft_id`. [`AstronautRepo::find_by_id`] is
//! the exception and still finds astronauts whose spacecraft is gone.

use spacefleet_core::types::DbId;

use crate::models::astronaut::{Astronaut, NewAstronaut, UpdateAstronaut};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, spacecraft_id";

/// Provides CRUD operations for astronauts.
pub struct AstronautRepo;

impl AstronautRepo {
    /// Insert a validated astronaut, returning the created row.
    pub async fn create(pool: &DbPool, input: &NewAstronaut) -> Result<Astronaut, sqlx::Error> {
        let query = format!(
            "INSERT INTO astronauts (name, role, spacecraft_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Astronaut>(&query)
            .bind(&input.name)
            .bind(input.role.as_str())
            .bind(input.spacecraft_id)
            .fetch_one(pool)
            .await
    }

    /// Find an astronaut by ID regardless of which spacecraft, if any, owns it.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Astronaut>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM astronauts WHERE id = $1");
        sqlx::query_as::<_, Astronaut>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an astronaut by ID among one spacecraft's crew.
    pub async fn find_in_spacecraft(
        pool: &DbPool,
        spacecraft_id: DbId,
        id: DbId,
    ) -> Result<Option<Astronaut>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM astronauts WHERE id = $1 AND spacecraft_id = $2");
        sqlx::query_as::<_, Astronaut>(&query)
            .bind(id)
            .bind(spacecraft_id)
            .fetch_optional(pool)
            .await
    }

    /// List a spacecraft's crew in id order.
    pub async fn list_by_spacecraft(
        pool: &DbPool,
        spacecraft_id: DbId,
    ) -> Result<Vec<Astronaut>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM astronauts WHERE spacecraft_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Astronaut>(&query)
            .bind(spacecraft_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the fields present in `input` to an astronaut of the given
    /// spacecraft.
    ///
    /// Returns `None` if no such astronaut exists in that crew.
    pub async fn update(
        pool: &DbPool,
        spacecraft_id: DbId,
        id: DbId,
        input: &UpdateAstronaut,
    ) -> Result<Option<Astronaut>, sqlx::Error> {
        let mut sets: Vec<String> = Vec::new();
        let mut values: Vec<&str> = Vec::new();
        // $1 and $2 are the ids.
        let mut bind_idx = 3u32;

        if let Some(ref name) = input.name {
            sets.push(format!("name = ${bind_idx}"));
            bind_idx += 1;
            values.push(name);
        }
        if let Some(ref role) = input.role {
            sets.push(format!("role = ${bind_idx}"));
            values.push(role);
        }

        if sets.is_empty() {
            return Self::find_in_spacecraft(pool, spacecraft_id, id).await;
        }

        let query = format!(
            "UPDATE astronauts SET {} WHERE id = $1 AND spacecraft_id = $2 RETURNING {COLUMNS}",
            sets.join(", ")
        );
        let mut q = sqlx::query_as::<_, Astronaut>(&query)
            .bind(id)
            .bind(spacecraft_id);
        for value in values {
            q = q.bind(value);
        }
        q.fetch_optional(pool).await
    }

    /// Delete an astronaut of the given spacecraft. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &DbPool, spacecraft_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM astronauts WHERE id = $1 AND spacecraft_id = $2")
            .bind(id)
            .bind(spacecraft_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
