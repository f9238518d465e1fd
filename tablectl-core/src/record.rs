//! Untyped row records
//!
//! Rows are fetched through `row_to_json` so any column type can be shown
//! without a per-type decoder. Column order is preserved.

use serde_json::Value;

use crate::error::{ProbeError, Result};
use crate::ident::TableRef;

/// One row: column name -> value, in select order
pub type Record = serde_json::Map<String, Value>;

/// Wrap a SELECT so each row comes back as a single JSON text column
pub(crate) fn as_json_rows(inner_sql: &str) -> String {
    format!("SELECT row_to_json(r)::text AS record FROM ({inner_sql}) AS r")
}

pub(crate) fn decode(table: &TableRef, raw: &str) -> Result<Record> {
    serde_json::from_str(raw).map_err(|err| ProbeError::decode(table.to_string(), err))
}

/// Plain-text form of a value for console output
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wraps_inner_query() {
        let sql = as_json_rows("SELECT * FROM \"public\".\"drivers\" LIMIT 1");
        assert_eq!(
            sql,
            "SELECT row_to_json(r)::text AS record FROM (SELECT * FROM \"public\".\"drivers\" LIMIT 1) AS r"
        );
    }

    #[test]
    fn decode_keeps_column_order() {
        let table: TableRef = "drivers".parse().unwrap();
        let record = decode(&table, r#"{"zeta":1,"alpha":"x","mid":null}"#).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn decode_rejects_non_objects() {
        let table: TableRef = "drivers".parse().unwrap();
        let err = decode(&table, "[1,2]").unwrap_err();
        assert!(err.to_string().contains("public.drivers"));
    }

    #[test]
    fn display_values() {
        assert_eq!(display_value(&json!(null)), "NULL");
        assert_eq!(display_value(&json!("555-0100")), "555-0100");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(true)), "true");
    }
}
