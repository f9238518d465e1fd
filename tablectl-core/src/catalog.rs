//! information_schema queries

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::Result;
use crate::ident::TableRef;

/// Column metadata as reported by information_schema.columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub default: Option<String>,
    pub ordinal_position: i32,
}

#[derive(FromRow)]
struct ColumnRow {
    column_name: String,
    data_type: String,
    is_nullable: String,
    column_default: Option<String>,
    ordinal_position: i32,
}

impl From<ColumnRow> for ColumnInfo {
    fn from(row: ColumnRow) -> Self {
        Self {
            name: row.column_name,
            data_type: row.data_type,
            // information_schema reports YES / NO
            is_nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
            default: row.column_default,
            ordinal_position: row.ordinal_position,
        }
    }
}

/// Whether the table is present in information_schema.tables
pub async fn table_exists(pool: &PgPool, table: &TableRef) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_name = $2
        )
        "#,
    )
    .bind(table.schema.as_str())
    .bind(table.table.as_str())
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Columns of the table in ordinal position order
pub async fn columns(pool: &PgPool, table: &TableRef) -> Result<Vec<ColumnInfo>> {
    let rows: Vec<ColumnRow> = sqlx::query_as(
        r#"
        SELECT
            column_name::text AS column_name,
            data_type::text AS data_type,
            is_nullable::text AS is_nullable,
            column_default::text AS column_default,
            ordinal_position::int4 AS ordinal_position
        FROM information_schema.columns
        WHERE table_schema = $1 AND table_name = $2
        ORDER BY ordinal_position
        "#,
    )
    .bind(table.schema.as_str())
    .bind(table.table.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ColumnInfo::from).collect())
}

/// Base tables of a schema, sorted by name
pub async fn list_tables(pool: &PgPool, schema: &str) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        r#"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = $1 AND table_type = 'BASE TABLE'
        ORDER BY table_name
        "#,
    )
    .bind(schema)
    .fetch_all(pool)
    .await?;

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_flag_maps_from_yes_no() {
        let row = ColumnRow {
            column_name: "phone".into(),
            data_type: "text".into(),
            is_nullable: "YES".into(),
            column_default: None,
            ordinal_position: 3,
        };
        let col = ColumnInfo::from(row);
        assert!(col.is_nullable);
        assert_eq!(col.ordinal_position, 3);

        let row = ColumnRow {
            column_name: "id".into(),
            data_type: "integer".into(),
            is_nullable: "NO".into(),
            column_default: Some("nextval('drivers_id_seq'::regclass)".into()),
            ordinal_position: 1,
        };
        assert!(!ColumnInfo::from(row).is_nullable);
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn columns_follow_ordinal_position(pool: PgPool) -> Result<()> {
        sqlx::query("CREATE TABLE probe_cols (zeta int, alpha text NOT NULL, mid boolean DEFAULT true)")
            .execute(&pool)
            .await?;

        let table: TableRef = "probe_cols".parse()?;
        assert!(table_exists(&pool, &table).await?);

        let cols = columns(&pool, &table).await?;
        let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(cols[0].is_nullable);
        assert!(!cols[1].is_nullable);
        assert_eq!(cols[2].default.as_deref(), Some("true"));

        let tables = list_tables(&pool, "public").await?;
        assert!(tables.contains(&"probe_cols".to_string()));

        Ok(())
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires database"]
    async fn missing_table_is_reported_absent(pool: PgPool) -> Result<()> {
        let table: TableRef = "no_such_table".parse()?;
        assert!(!table_exists(&pool, &table).await?);
        assert!(columns(&pool, &table).await?.is_empty());
        Ok(())
    }
}
