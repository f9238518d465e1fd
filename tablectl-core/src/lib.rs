pub mod catalog;
pub mod config;
pub mod drop;
pub mod error;
pub mod fetch;
pub mod ident;
pub mod inspect;
pub mod pool;
pub mod record;

pub use catalog::{columns, list_tables, table_exists, ColumnInfo};
pub use config::TablectlConfig;
pub use drop::{drop_table, DropReport};
pub use error::{ProbeError, Result};
pub use fetch::{fetch_by_id, fetch_first, FetchOutcome};
pub use ident::{Identifier, TableRef};
pub use inspect::{inspect_table, InspectOptions, InspectReport};
pub use pool::{create_pool, with_pool};
pub use record::Record;
