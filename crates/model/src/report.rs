use serde::{Deserialize, Serialize};

/// Structured result of one successful tick:
/// `{"success": true, "data_index": <position replayed>}`.
///
/// Failures do not produce a report; they surface through the error taxonomy
/// and are rendered by the caller with a distinct exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub success: bool,
    pub data_index: u64,
}

impl TickReport {
    pub fn completed(data_index: u64) -> Self {
        TickReport {
            success: true,
            data_index,
        }
    }
}
