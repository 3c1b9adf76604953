use serde::Serialize;

/// One normalized condition-monitoring record, created fresh per source per
/// tick. Field names follow the downstream GraphQL input type, so the struct
/// serializes straight into the mutation's `input` variable.
///
/// `data` carries the whole feature map as one JSON string; the downstream
/// schema stays stable while feature sets evolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryEvent {
    pub id: String,
    pub unit_number: String,
    pub date_time: String,
    pub data: String,
}
