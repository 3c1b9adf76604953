use chrono::Utc;
use model::{event::TelemetryEvent, row::SourceRow};
use serde_json::{Map, Value};
use uuid::Uuid;

// Implemented by hand rather than via thiserror: the derive would treat the
// `source` field as the error's source, but here it names the data source.
#[derive(Debug)]
pub enum TransformError {
    MissingIdentityColumn { source: String, column: String },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::MissingIdentityColumn { source, column } => {
                write!(f, "Row from '{source}' is missing identity column '{column}'")
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// Shapes one extracted row into the event the downstream API accepts.
///
/// The id and timestamp are generated at call time, never derived from the
/// data. Missing or empty feature cells become the number 0; present cells
/// keep their raw string value. The feature map is packed into the single
/// `data` field so the downstream schema stays put as feature sets evolve.
pub fn transform(
    row: &SourceRow,
    identity_column: &str,
    feature_columns: &[String],
) -> Result<TelemetryEvent, TransformError> {
    let unit_number =
        row.get(identity_column)
            .ok_or_else(|| TransformError::MissingIdentityColumn {
                source: row.source().to_string(),
                column: identity_column.to_string(),
            })?;

    let mut features = Map::new();
    for column in feature_columns {
        let value = match row.get(column) {
            Some(cell) if !cell.is_empty() => Value::String(cell.to_string()),
            _ => Value::from(0),
        };
        features.insert(column.clone(), value);
    }

    Ok(TelemetryEvent {
        id: Uuid::new_v4().simple().to_string(),
        unit_number: unit_number.to_string(),
        date_time: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        data: Value::Object(features).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SourceRow {
        SourceRow::new(
            "engine1",
            vec![
                ("unit".to_string(), "E-100".to_string()),
                ("temp".to_string(), "81.2".to_string()),
                ("pressure".to_string(), "".to_string()),
            ],
        )
    }

    fn features(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn carries_identity_and_features() {
        let event = transform(&row(), "unit", &features(&["temp"])).unwrap();
        assert_eq!(event.unit_number, "E-100");

        let data: Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(data["temp"], "81.2");
    }

    #[test]
    fn missing_identity_column_is_malformed_row() {
        let err = transform(&row(), "serial", &features(&["temp"])).unwrap_err();
        let TransformError::MissingIdentityColumn { source, column } = err;
        assert_eq!(source, "engine1");
        assert_eq!(column, "serial");
    }

    #[test]
    fn empty_and_absent_features_default_to_zero() {
        let event = transform(&row(), "unit", &features(&["pressure", "vibration"])).unwrap();
        let data: Value = serde_json::from_str(&event.data).unwrap();
        assert_eq!(data["pressure"], 0);
        assert_eq!(data["vibration"], 0);
    }

    #[test]
    fn id_and_timestamp_are_fresh_per_call() {
        let first = transform(&row(), "unit", &features(&["temp"])).unwrap();
        let second = transform(&row(), "unit", &features(&["temp"])).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.id.len(), 32);
        // Seconds-precision UTC, e.g. 2024-01-01T00:00:00Z.
        assert_eq!(first.date_time.len(), 20);
        assert!(first.date_time.ends_with('Z'));
    }
}
