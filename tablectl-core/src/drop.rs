//! Table dropper
//!
//! Destructive by default: no prompt, no dry run, no rollback path.

use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::catalog;
use crate::error::Result;
use crate::ident::TableRef;

/// Outcome of a drop, as seen through the catalog
#[derive(Debug, Clone, Serialize)]
pub struct DropReport {
    pub table: TableRef,
    pub existed_before: bool,
    pub absent_after: bool,
}

impl DropReport {
    pub fn dropped(&self) -> bool {
        self.existed_before && self.absent_after
    }
}

pub(crate) fn drop_sql(table: &TableRef) -> String {
    format!("DROP TABLE IF EXISTS {} CASCADE", table.qualified())
}

/// Drop the table (and dependents), then confirm it is gone.
///
/// Idempotent: dropping an absent table succeeds with the same end state.
pub async fn drop_table(pool: &PgPool, table: &TableRef) -> Result<DropReport> {
    let existed_before = catalog::table_exists(pool, table).await?;

    sqlx::query(&drop_sql(table)).execute(pool).await?;

    let absent_after = !catalog::table_exists(pool, table).await?;

    match (existed_before, absent_after) {
        (true, true) => info!("table {} dropped", table),
        (false, true) => info!("table {} does not exist", table),
        (_, false) => warn!("table {} still exists after DROP", table),
    }

    Ok(DropReport {
        table: table.clone(),
        existed_before,
        absent_after,
    })
}
