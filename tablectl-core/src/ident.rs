//! Validated SQL identifiers
//!
//! Table and column names cannot be bound as query parameters, so they are
//! validated here and always rendered double-quoted.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ProbeError, Result};

/// PostgreSQL truncates identifiers longer than NAMEDATALEN - 1 bytes.
const MAX_IDENTIFIER_LEN: usize = 63;

/// Schema used when a table reference has no `schema.` prefix.
pub const DEFAULT_SCHEMA: &str = "public";

/// A schema, table or column name that is safe to quote into SQL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(ProbeError::invalid_identifier(value, "identifier cannot be empty"));
        }
        if value.len() > MAX_IDENTIFIER_LEN {
            return Err(ProbeError::invalid_identifier(
                value,
                "identifier exceeds 63 bytes",
            ));
        }
        if value.contains('\0') {
            return Err(ProbeError::invalid_identifier(
                value,
                "identifier cannot contain NUL",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted form, with embedded quotes doubled
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0.replace('"', "\"\""))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Schema-qualified table reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableRef {
    pub schema: Identifier,
    pub table: Identifier,
}

impl TableRef {
    pub fn new(schema: Identifier, table: Identifier) -> Self {
        Self { schema, table }
    }

    /// Parse `table` or `schema.table`, using `default_schema` for the former
    pub fn parse_with_schema(input: &str, default_schema: &str) -> Result<Self> {
        match input.split_once('.') {
            Some((schema, table)) => Ok(Self::new(Identifier::new(schema)?, Identifier::new(table)?)),
            None => Ok(Self::new(
                Identifier::new(default_schema)?,
                Identifier::new(input)?,
            )),
        }
    }

    /// `"schema"."table"` for use in SQL text
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.schema.quoted(), self.table.quoted())
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

impl FromStr for TableRef {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with_schema(s, DEFAULT_SCHEMA)
    }
}

/// Render a column list for a SELECT, `*` when empty
pub fn select_list(fields: &[Identifier]) -> String {
    if fields.is_empty() {
        return "*".to_string();
    }
    fields
        .iter()
        .map(Identifier::quoted)
        .collect::<Vec<_>>()
        .join(", ")
}
