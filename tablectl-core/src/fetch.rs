//! Single-record fetchers
//!
//! Read-only lookups that return at most one row.

use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::Result;
use crate::ident::{select_list, Identifier, TableRef};
use crate::record::{self, Record};

/// Result of a single-record lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "record", rename_all = "snake_case")]
pub enum FetchOutcome {
    Found(Record),
    NotFound,
}

impl FetchOutcome {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }
}

pub(crate) fn first_sql(table: &TableRef, fields: &[Identifier]) -> String {
    record::as_json_rows(&format!(
        "SELECT {} FROM {} LIMIT 1",
        select_list(fields),
        table.qualified()
    ))
}

/// The id is compared as text so integer, uuid and text keys share one query.
pub(crate) fn by_id_sql(table: &TableRef, id_column: &Identifier, fields: &[Identifier]) -> String {
    record::as_json_rows(&format!(
        "SELECT {} FROM {} WHERE {}::text = $1 LIMIT 1",
        select_list(fields),
        table.qualified(),
        id_column.quoted()
    ))
}

fn into_outcome(table: &TableRef, raw: Option<String>) -> Result<FetchOutcome> {
    match raw {
        Some(raw) => Ok(FetchOutcome::Found(record::decode(table, &raw)?)),
        None => Ok(FetchOutcome::NotFound),
    }
}

/// First row of the table (`SELECT ... LIMIT 1`)
pub async fn fetch_first(
    pool: &PgPool,
    table: &TableRef,
    fields: &[Identifier],
) -> Result<FetchOutcome> {
    debug!("fetching first row of {}", table);

    let raw = sqlx::query_scalar::<_, String>(&first_sql(table, fields))
        .fetch_optional(pool)
        .await?;

    let outcome = into_outcome(table, raw)?;
    if outcome == FetchOutcome::NotFound {
        info!("table {} is empty", table);
    }
    Ok(outcome)
}

/// Row whose `id_column` equals `id` (`SELECT ... WHERE id = ...`)
pub async fn fetch_by_id(
    pool: &PgPool,
    table: &TableRef,
    id_column: &Identifier,
    id: &str,
    fields: &[Identifier],
) -> Result<FetchOutcome> {
    debug!("fetching {} where {} = {}", table, id_column, id);

    let raw = sqlx::query_scalar::<_, String>(&by_id_sql(table, id_column, fields))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let outcome = into_outcome(table, raw)?;
    if outcome == FetchOutcome::NotFound {
        info!("no row in {} with {} = {}", table, id_column, id);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_fields() -> Vec<Identifier> {
        ["id", "name", "phone", "device_id"]
            .into_iter()
            .map(|f| Identifier::new(f).unwrap())
            .collect()
    }

    #[test]
    fn by_id_binds_the_id() {
        let table: TableRef = "drivers".parse().unwrap();
        let id_column = Identifier::new("id").unwrap();
        let sql = by_id_sql(&table, &id_column, &driver_fields());
        assert!(sql.contains("SELECT \"id\", \"name\", \"phone\", \"device_id\" FROM \"public\".\"drivers\""));
        assert!(sql.contains("WHERE \"id\"::text = $1 LIMIT 1"));
    }

    #[test]
    fn first_defaults_to_all_columns() {
        let table: TableRef = "cancellation_types".parse().unwrap();
        assert!(first_sql(&table, &[]).contains("(SELECT * FROM \"public\".\"cancellation_types\" LIMIT 1)"));
    }

    #[test]
    fn outcome_serializes_with_status() {
        let json = serde_json::to_value(FetchOutcome::NotFound).unwrap();
        assert_eq!(json["status"], "not_found");
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn fetches_by_id_and_reports_missing(pool: PgPool) -> Result<()> {
        sqlx::query(
            "CREATE TABLE drivers (id int PRIMARY KEY, name text, phone text, device_id text, notes text)",
        )
        .execute(&pool)
        .await?;
        sqlx::query("INSERT INTO drivers VALUES (7, 'Ada', '555-0100', 'dev-7', 'x')")
            .execute(&pool)
            .await?;

        let table: TableRef = "drivers".parse()?;
        let id_column = Identifier::new("id")?;

        let found = fetch_by_id(&pool, &table, &id_column, "7", &driver_fields()).await?;
        let record = found.record().expect("driver 7 exists");
        assert_eq!(record["id"], 7);
        assert_eq!(record["name"], "Ada");
        assert_eq!(record["phone"], "555-0100");
        assert_eq!(record["device_id"], "dev-7");
        assert!(!record.contains_key("notes"));

        let missing = fetch_by_id(&pool, &table, &id_column, "999999", &driver_fields()).await?;
        assert_eq!(missing, FetchOutcome::NotFound);

        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn first_row_of_empty_table_is_not_found(pool: PgPool) -> Result<()> {
        sqlx::query("CREATE TABLE cancellation_types (id int, label text)")
            .execute(&pool)
            .await?;
        let table: TableRef = "cancellation_types".parse()?;

        assert_eq!(fetch_first(&pool, &table, &[]).await?, FetchOutcome::NotFound);

        sqlx::query("INSERT INTO cancellation_types VALUES (1, 'no-show')")
            .execute(&pool)
            .await?;
        let outcome = fetch_first(&pool, &table, &[]).await?;
        assert_eq!(outcome.record().map(|r| r.len()), Some(2));

        Ok(())
    }
}
