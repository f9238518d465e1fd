//! Table drop command
//!
//! Command: drop

use anyhow::{Context, Result};
use clap::Parser;
use tablectl_core::{drop_table, with_pool};
use tracing::warn;

use super::{emit, CommandContext};
use crate::{render, ui};

#[derive(Parser, Debug)]
pub struct DropArgs {
    /// Table to drop with CASCADE (`table` or `schema.table`)
    pub table: String,
}

pub async fn run_drop(args: DropArgs, ctx: &CommandContext) -> Result<()> {
    let url = ctx.database_url()?;
    let table = ctx.config.table_ref(&args.table)?;

    warn!("dropping table {} (CASCADE)", table);

    let report = ui::with_spinner_async(
        format!("Dropping {}", table),
        format!("Drop of {} finished", table),
        with_pool(&url, ctx.max_connections(), |pool| async move {
            drop_table(&pool, &table).await
        }),
    )
    .await
    .context("failed to drop table")?;

    emit(ctx.format, &report, render::drop_report)
}
