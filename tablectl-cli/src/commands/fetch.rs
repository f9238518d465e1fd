//! Single-record fetch commands
//!
//! Commands: cancellation-type, driver, first, by-id

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tablectl_core::{fetch_by_id, fetch_first, with_pool, Identifier, TableRef};

use super::{emit, CommandContext};
use crate::render;

#[derive(Parser, Debug)]
pub struct FetchArgs {
    #[command(subcommand)]
    pub command: FetchCommands,
}

#[derive(Subcommand, Debug)]
pub enum FetchCommands {
    /// Show the first row of the cancellation types table
    CancellationType,
    /// Look up one driver by id (prints id, name, phone, device id)
    Driver(DriverArgs),
    /// Show the first row of any table
    First(FirstArgs),
    /// Look up one row of any table by id
    ById(ByIdArgs),
}

#[derive(Parser, Debug)]
pub struct DriverArgs {
    /// Driver id to look up
    #[arg(long)]
    pub id: String,

    /// Columns to print (comma-separated, default: configured driver fields)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct FirstArgs {
    /// Table to read (`table` or `schema.table`)
    pub table: String,

    /// Columns to print (comma-separated, default: all)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ByIdArgs {
    /// Table to read (`table` or `schema.table`)
    pub table: String,

    /// Value of the id column to match
    pub id: String,

    /// Column compared against the id (default: configured id column)
    #[arg(long)]
    pub id_column: Option<String>,

    /// Columns to print (comma-separated, default: all)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

pub async fn run_fetch(args: FetchArgs, ctx: &CommandContext) -> Result<()> {
    match args.command {
        FetchCommands::CancellationType => {
            let table = ctx.config.cancellation_types_table()?;
            first(ctx, table, Vec::new(), "cancellation type").await
        }
        FetchCommands::Driver(args) => {
            let table = ctx.config.drivers_table()?;
            let fields = if args.fields.is_empty() {
                ctx.config.driver_fields()?
            } else {
                parse_fields(&args.fields)?
            };
            let id_column = ctx.config.id_column()?;
            by_id(ctx, table, id_column, args.id, fields, "driver").await
        }
        FetchCommands::First(args) => {
            let table = ctx.config.table_ref(&args.table)?;
            let fields = parse_fields(&args.fields)?;
            first(ctx, table, fields, "row").await
        }
        FetchCommands::ById(args) => {
            let table = ctx.config.table_ref(&args.table)?;
            let id_column = match args.id_column {
                Some(column) => Identifier::new(column)?,
                None => ctx.config.id_column()?,
            };
            let fields = parse_fields(&args.fields)?;
            by_id(ctx, table, id_column, args.id, fields, "row").await
        }
    }
}

fn parse_fields(fields: &[String]) -> Result<Vec<Identifier>> {
    fields
        .iter()
        .map(|f| Identifier::new(f.trim()).map_err(Into::into))
        .collect()
}

async fn first(
    ctx: &CommandContext,
    table: TableRef,
    fields: Vec<Identifier>,
    label: &str,
) -> Result<()> {
    let url = ctx.database_url()?;
    let lookup = format!("first {} in {}", label, table);

    let outcome = with_pool(&url, ctx.max_connections(), |pool| async move {
        fetch_first(&pool, &table, &fields).await
    })
    .await
    .with_context(|| format!("failed to fetch {}", lookup))?;

    emit(ctx.format, &outcome, |outcome| render::fetch_outcome(outcome, &lookup))
}

async fn by_id(
    ctx: &CommandContext,
    table: TableRef,
    id_column: Identifier,
    id: String,
    fields: Vec<Identifier>,
    label: &str,
) -> Result<()> {
    let url = ctx.database_url()?;
    let lookup = format!("{} {} = {} in {}", label, id_column, id, table);

    let outcome = with_pool(&url, ctx.max_connections(), |pool| async move {
        fetch_by_id(&pool, &table, &id_column, &id, &fields).await
    })
    .await
    .with_context(|| format!("failed to fetch {}", lookup))?;

    emit(ctx.format, &outcome, |outcome| render::fetch_outcome(outcome, &lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fields_trims_and_validates() {
        let fields = parse_fields(&["id".to_string(), " phone ".to_string()]).unwrap();
        assert_eq!(fields[1].as_str(), "phone");

        assert!(parse_fields(&["".to_string()]).is_err());
    }
}
