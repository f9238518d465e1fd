//! Table inspection command
//!
//! Command: inspect

use anyhow::{Context, Result};
use clap::Parser;
use tablectl_core::{inspect_table, list_tables, with_pool, InspectOptions};
use tracing::info;

use super::{emit, CommandContext};
use crate::{render, ui};

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Table to inspect (`table` or `schema.table`, default: configured cancellation types table)
    pub table: Option<String>,

    /// Maximum number of rows to print (row count still covers the whole table)
    #[arg(long)]
    pub limit: Option<i64>,

    /// List the tables of the configured schema instead
    #[arg(long, conflicts_with = "table")]
    pub list: bool,
}

pub async fn run_inspect(args: InspectArgs, ctx: &CommandContext) -> Result<()> {
    let url = ctx.database_url()?;

    if args.list {
        let schema = ctx.config.tables.schema.clone();
        info!("listing tables in schema {}", schema);
        let tables = with_pool(&url, ctx.max_connections(), |pool| async move {
            list_tables(&pool, &schema).await
        })
        .await
        .context("failed to list tables")?;

        return emit(ctx.format, &tables, |tables| render::table_list(tables));
    }

    let table = match args.table {
        Some(name) => ctx.config.table_ref(&name)?,
        None => ctx.config.cancellation_types_table()?,
    };
    let opts = InspectOptions {
        row_limit: args.limit,
    };

    let report = ui::with_spinner_async(
        format!("Inspecting {}", table),
        format!("Inspected {}", table),
        with_pool(&url, ctx.max_connections(), |pool| async move {
            inspect_table(&pool, &table, &opts).await
        }),
    )
    .await
    .context("failed to inspect table")?;

    emit(ctx.format, &report, render::inspect_report)
}
