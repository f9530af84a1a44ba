//! Repository for the `spacecrafts` table.

use spacefleet_core::list_query::{NumberFilter, SpacecraftFilter, SpacecraftListQuery};
use spacefleet_core::types::DbId;
use sqlx::any::AnyArguments;
use sqlx::query::QueryAs;
use sqlx::Any;

use crate::models::spacecraft::{NewSpacecraft, Spacecraft, UpdateSpacecraft};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, max_speed, mass";

/// Provides CRUD and listing operations for spacecraft.
pub struct SpacecraftRepo;

impl SpacecraftRepo {
    /// Insert a validated spacecraft, returning the created row.
    pub async fn create(pool: &DbPool, input: &NewSpacecraft) -> Result<Spacecraft, sqlx::Error> {
        let query = format!(
            "INSERT INTO spacecrafts (name, max_speed, mass)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Spacecraft>(&query)
            .bind(&input.name)
            .bind(input.max_speed)
            .bind(input.mass)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Spacecraft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spacecrafts WHERE id = $1");
        sqlx::query_as::<_, Spacecraft>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List spacecraft matching `params`.
    ///
    /// Without a sort field rows come back in id order; with one, id breaks
    /// ties so that pages never overlap. A sort field that names no known
    /// attribute fails with [`sqlx::Error::ColumnNotFound`].
    pub async fn list(
        pool: &DbPool,
        params: &SpacecraftListQuery,
    ) -> Result<Vec<Spacecraft>, sqlx::Error> {
        let (where_clause, mut bind_values, mut bind_idx) = build_spacecraft_filter(&params.filter);

        let order_clause = match &params.sort {
            Some(sort) => {
                let column = sort_column(&sort.field)
                    .ok_or_else(|| sqlx::Error::ColumnNotFound(sort.field.clone()))?;
                let direction = sort.direction.as_sql();
                if column == "id" {
                    format!("ORDER BY id {direction}")
                } else {
                    format!("ORDER BY {column} {direction}, id ASC")
                }
            }
            None => "ORDER BY id ASC".to_string(),
        };

        let mut query = format!("SELECT {COLUMNS} FROM spacecrafts {where_clause} {order_clause}");

        if let Some(window) = params.window {
            query.push_str(&format!(" LIMIT ${bind_idx} OFFSET ${}", bind_idx + 1));
            bind_idx += 2;
            bind_values.push(BindValue::BigInt(window.limit));
            bind_values.push(BindValue::BigInt(window.offset));
        }

        tracing::debug!(%query, binds = bind_idx - 1, "Listing spacecraft");

        bind_values_to(sqlx::query_as::<_, Spacecraft>(&query), &bind_values)
            .fetch_all(pool)
            .await
    }

    /// Count every spacecraft, ignoring any filter.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM spacecrafts")
            .fetch_one(pool)
            .await
    }

    /// Apply the fields present in `input`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateSpacecraft,
    ) -> Result<Option<Spacecraft>, sqlx::Error> {
        let mut sets: Vec<String> = Vec::new();
        let mut bind_values: Vec<BindValue> = Vec::new();
        // $1 is the id.
        let mut bind_idx = 2u32;

        if let Some(ref name) = input.name {
            sets.push(format!("name = ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Text(name.clone()));
        }
        if let Some(max_speed) = input.max_speed {
            sets.push(format!("max_speed = ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Double(max_speed));
        }
        if let Some(mass) = input.mass {
            sets.push(format!("mass = ${bind_idx}"));
            bind_values.push(BindValue::Double(mass));
        }

        if sets.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE spacecrafts SET {} WHERE id = $1 RETURNING {COLUMNS}",
            sets.join(", ")
        );
        let q = sqlx::query_as::<_, Spacecraft>(&query).bind(id);
        bind_values_to(q, &bind_values).fetch_optional(pool).await
    }

    /// Delete a spacecraft by ID. Returns `true` if a row was removed.
    ///
    /// Astronauts are not deleted with it; their `spacecraft_id` is cleared
    /// by the foreign key.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM spacecrafts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built spacecraft queries.
#[derive(Debug, Clone, PartialEq)]
enum BindValue {
    BigInt(i64),
    Double(f64),
    Text(String),
}

/// Map a client-facing attribute name to its column.
fn sort_column(field: &str) -> Option<&'static str> {
    match field {
        "id" => Some("id"),
        "name" => Some("name"),
        "maxSpeed" => Some("max_speed"),
        "mass" => Some("mass"),
        _ => None,
    }
}

/// Build a WHERE clause and bind values from the list filter.
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_spacecraft_filter(filter: &SpacecraftFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(ref pattern) = filter.name {
        conditions.push(format!("name LIKE ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(pattern.clone()));
    }

    for (column, number) in [("max_speed", filter.max_speed), ("mass", filter.mass)] {
        match number {
            Some(NumberFilter::Equals(value)) => {
                conditions.push(format!("{column} = ${bind_idx}"));
                bind_idx += 1;
                bind_values.push(BindValue::Double(value));
            }
            Some(NumberFilter::Unparseable) => conditions.push("1 = 0".to_string()),
            None => {}
        }
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_values_to<'q, O>(
    mut q: QueryAs<'q, Any, O, AnyArguments<'q>>,
    bind_values: &'q [BindValue],
) -> QueryAs<'q, Any, O, AnyArguments<'q>> {
    for val in bind_values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Double(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_where_clause() {
        let (clause, binds, next) = build_spacecraft_filter(&SpacecraftFilter::default());
        assert!(clause.is_empty());
        assert!(binds.is_empty());
        assert_eq!(next, 1);
    }

    #[test]
    fn filters_are_joined_with_and() {
        let filter = SpacecraftFilter {
            name: Some("Falcon%".into()),
            max_speed: Some(NumberFilter::Equals(28000.0)),
            mass: Some(NumberFilter::Equals(550.0)),
        };
        let (clause, binds, next) = build_spacecraft_filter(&filter);
        assert_eq!(
            clause,
            "WHERE name LIKE $1 AND max_speed = $2 AND mass = $3"
        );
        assert_eq!(
            binds,
            vec![
                BindValue::Text("Falcon%".into()),
                BindValue::Double(28000.0),
                BindValue::Double(550.0),
            ]
        );
        assert_eq!(next, 4);
    }

    #[test]
    fn unparseable_number_becomes_false_predicate() {
        let filter = SpacecraftFilter {
            mass: Some(NumberFilter::Unparseable),
            ..Default::default()
        };
        let (clause, binds, _) = build_spacecraft_filter(&filter);
        assert_eq!(clause, "WHERE 1 = 0");
        assert!(binds.is_empty());
    }

    #[test]
    fn sort_columns_follow_attribute_names() {
        assert_eq!(sort_column("maxSpeed"), Some("max_speed"));
        assert_eq!(sort_column("mass"), Some("mass"));
        assert_eq!(sort_column("max_speed"), None);
        assert_eq!(sort_column("mass; DROP TABLE spacecrafts"), None);
    }
}
