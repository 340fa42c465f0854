//! Tabular dataset parsing: JSON row export of the upstream tables →
//! [`AreaRecord`]s.
//!
//! Column names are the upstream Portuguese ones and are fixed per
//! publication; absent or null numerics become `None`, never zero.

use areas::{AreaRecord, normalize_name};
use serde_json::{Map, Value};

use crate::boundary::as_i64_lenient;

#[derive(Debug)]
pub enum TableError {
    NotAnArray,
    InvalidRow { index: usize, reason: String },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::NotAnArray => write!(f, "expected a JSON array of rows"),
            TableError::InvalidRow { index, reason } => {
                write!(f, "invalid row at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for TableError {}

pub fn parse_records(payload: &str) -> Result<Vec<AreaRecord>, TableError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| TableError::InvalidRow {
        index: 0,
        reason: format!("JSON parse error: {e}"),
    })?;
    parse_records_value(&value)
}

pub fn parse_records_value(value: &Value) -> Result<Vec<AreaRecord>, TableError> {
    let rows = value.as_array().ok_or(TableError::NotAnArray)?;

    let mut records = Vec::with_capacity(rows.len());
    for (index, row_val) in rows.iter().enumerate() {
        let row = row_val.as_object().ok_or(TableError::InvalidRow {
            index,
            reason: "row must be an object".to_string(),
        })?;
        records.push(parse_row(row).map_err(|reason| TableError::InvalidRow { index, reason })?);
    }

    Ok(records)
}

fn parse_row(row: &Map<String, Value>) -> Result<AreaRecord, String> {
    let raw_name = row
        .get("NOME")
        .and_then(|v| v.as_str())
        .ok_or("row missing NOME".to_string())?;
    let name = normalize_name(raw_name);
    if name.is_empty() {
        return Err("empty NOME".to_string());
    }

    let rank = row
        .get("RANK")
        .and_then(as_i64_lenient)
        .ok_or("row missing RANK".to_string())?;

    Ok(AreaRecord {
        name,
        uf: opt_text(row, "UF"),
        modality: opt_text(row, "MODALIDADE"),
        phase: opt_text(row, "FASE"),
        land_use: opt_text(row, "USO"),
        category: opt_text(row, "CATEGORIA"),
        rank,
        threat_km2: opt_metric(row, "DESMATAM_1")?,
        heat_spots: opt_count(row, "FOCOS DE C")?,
        car_count: opt_count(row, "N DE CAR")?,
        car_area_km2: opt_metric(row, "CAR")?,
        road_km: opt_metric(row, "ESTRADAS N")?,
    })
}

fn opt_text(row: &Map<String, Value>, column: &str) -> Option<String> {
    let text = row.get(column)?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

/// Optional non-negative float column. Null/absent is fine; a negative
/// value violates the dataset invariant and rejects the row.
fn opt_metric(row: &Map<String, Value>, column: &str) -> Result<Option<f64>, String> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => {
            let n = v
                .as_f64()
                .ok_or_else(|| format!("{column} must be a number"))?;
            if n < 0.0 {
                return Err(format!("{column} must be non-negative, got {n}"));
            }
            Ok(Some(n))
        }
    }
}

fn opt_count(row: &Map<String, Value>, column: &str) -> Result<Option<i64>, String> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => {
            let n = as_i64_lenient(v).ok_or_else(|| format!("{column} must be a number"))?;
            if n < 0 {
                return Err(format!("{column} must be non-negative, got {n}"));
            }
            Ok(Some(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TableError, parse_records};

    const ROWS: &str = r#"[
        {
            "NOME": "Araribóia", "UF": "MA", "MODALIDADE": "Terra Indigena",
            "FASE": "Regularizada", "RANK": 1, "DESMATAM_1": 98.21,
            "FOCOS DE C": 321, "N DE CAR": 17, "CAR": 54.2, "ESTRADAS N": 12.7
        },
        {
            "NOME": "Alto Rio Guamá", "UF": "PA", "MODALIDADE": "Terra Indigena",
            "FASE": "Declarada", "RANK": 2, "DESMATAM_1": null,
            "FOCOS DE C": null, "N DE CAR": 4, "CAR": 10.0, "ESTRADAS N": null
        }
    ]"#;

    #[test]
    fn parses_rows_with_nulls() {
        let records = parse_records(ROWS).expect("parse rows");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "ARARIBOIA");
        assert_eq!(records[0].threat_km2, Some(98.21));
        assert_eq!(records[1].name, "ALTO RIO GUAMA");
        assert_eq!(records[1].threat_km2, None);
        assert_eq!(records[1].heat_spots, None);
        assert_eq!(records[1].road_km, None);
        assert_eq!(records[1].phase.as_deref(), Some("Declarada"));
    }

    #[test]
    fn rejects_missing_name() {
        let err = parse_records(r#"[{"RANK": 1}]"#).unwrap_err();
        match err {
            TableError::InvalidRow { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("NOME"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_metrics() {
        let payload = r#"[{"NOME": "X", "RANK": 1, "DESMATAM_1": -3.0}]"#;
        let err = parse_records(payload).unwrap_err();
        match err {
            TableError::InvalidRow { reason, .. } => {
                assert!(reason.contains("non-negative"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_array_payloads() {
        let err = parse_records(r#"{"rows": []}"#).unwrap_err();
        assert!(matches!(err, TableError::NotAnArray));
    }
}
