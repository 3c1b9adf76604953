use serde::{Deserialize, Serialize};

/// The single playback position shared by every record source.
///
/// Serialized with the legacy field name so existing cursor blobs keep
/// working: `{"last_data_index": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayCursor {
    #[serde(rename = "last_data_index")]
    pub position: u64,
}

impl ReplayCursor {
    pub fn new(position: u64) -> Self {
        ReplayCursor { position }
    }

    /// The cursor for the next tick. Advances by exactly one.
    pub fn advanced(&self) -> ReplayCursor {
        ReplayCursor {
            position: self.position + 1,
        }
    }
}
