//! Table inspector: existence, columns, rows

use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::catalog::{self, ColumnInfo};
use crate::error::Result;
use crate::ident::TableRef;
use crate::record::{self, Record};

/// Everything the inspector learned about one table
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub table: TableRef,
    pub exists: bool,
    pub columns: Vec<ColumnInfo>,
    /// Rows as fetched, possibly capped by `InspectOptions::row_limit`
    pub rows: Vec<Record>,
    /// Number of rows present at query time
    pub row_count: i64,
}

impl InspectReport {
    fn missing(table: TableRef) -> Self {
        Self {
            table,
            exists: false,
            columns: Vec::new(),
            rows: Vec::new(),
            row_count: 0,
        }
    }

    pub fn is_truncated(&self) -> bool {
        (self.rows.len() as i64) < self.row_count
    }
}

#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Cap on rows fetched; `None` fetches all rows
    pub row_limit: Option<i64>,
}

pub(crate) fn rows_sql(table: &TableRef, row_limit: Option<i64>) -> String {
    let mut inner = format!("SELECT * FROM {}", table.qualified());
    if let Some(limit) = row_limit {
        inner.push_str(&format!(" LIMIT {}", limit.max(0)));
    }
    record::as_json_rows(&inner)
}

pub(crate) fn count_sql(table: &TableRef) -> String {
    format!("SELECT count(*) FROM {}", table.qualified())
}

/// Inspect a table. A missing table yields `exists = false` and no rows.
pub async fn inspect_table(
    pool: &PgPool,
    table: &TableRef,
    opts: &InspectOptions,
) -> Result<InspectReport> {
    let exists = catalog::table_exists(pool, table).await?;
    info!("table {} exists: {}", table, exists);

    if !exists {
        return Ok(InspectReport::missing(table.clone()));
    }

    let columns = catalog::columns(pool, table).await?;
    debug!("table {} has {} columns", table, columns.len());

    let raw_rows = sqlx::query_scalar::<_, String>(&rows_sql(table, opts.row_limit))
        .fetch_all(pool)
        .await?;
    let rows = raw_rows
        .iter()
        .map(|raw| record::decode(table, raw))
        .collect::<Result<Vec<_>>>()?;

    let row_count = match opts.row_limit {
        None => rows.len() as i64,
        Some(_) => {
            sqlx::query_scalar::<_, i64>(&count_sql(table))
                .fetch_one(pool)
                .await?
        }
    };
    info!("table {} has {} rows", table, row_count);

    Ok(InspectReport {
        table: table.clone(),
        exists,
        columns,
        rows,
        row_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_row_queries() {
        let table: TableRef = "cancellation_types".parse().unwrap();
        assert_eq!(
            rows_sql(&table, None),
            "SELECT row_to_json(r)::text AS record FROM (SELECT * FROM \"public\".\"cancellation_types\") AS r"
        );
        assert!(rows_sql(&table, Some(5)).contains("LIMIT 5)"));
        assert!(rows_sql(&table, Some(-3)).contains("LIMIT 0)"));
        assert_eq!(
            count_sql(&table),
            "SELECT count(*) FROM \"public\".\"cancellation_types\""
        );
    }

    #[test]
    fn truncation_flag() {
        let mut report = InspectReport::missing("t".parse().unwrap());
        assert!(!report.is_truncated());
        report.row_count = 3;
        assert!(report.is_truncated());
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn reports_columns_and_rows(pool: PgPool) -> Result<()> {
        sqlx::query("CREATE TABLE cancellation_types (id serial PRIMARY KEY, label text NOT NULL)")
            .execute(&pool)
            .await?;
        sqlx::query("INSERT INTO cancellation_types (label) VALUES ('no-show'), ('weather'), ('other')")
            .execute(&pool)
            .await?;

        let table: TableRef = "cancellation_types".parse()?;
        let report = inspect_table(&pool, &table, &InspectOptions::default()).await?;

        assert!(report.exists);
        assert_eq!(report.columns.len(), 2);
        assert_eq!(report.columns[0].name, "id");
        assert_eq!(report.columns[1].name, "label");
        assert_eq!(report.row_count, 3);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0]["label"], "no-show");

        let capped = inspect_table(&pool, &table, &InspectOptions { row_limit: Some(1) }).await?;
        assert_eq!(capped.rows.len(), 1);
        assert_eq!(capped.row_count, 3);
        assert!(capped.is_truncated());

        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn missing_table_skips_row_select(pool: PgPool) -> Result<()> {
        let table: TableRef = "never_created".parse()?;
        let report = inspect_table(&pool, &table, &InspectOptions::default()).await?;
        assert!(!report.exists);
        assert!(report.columns.is_empty());
        assert_eq!(report.row_count, 0);
        Ok(())
    }
}
