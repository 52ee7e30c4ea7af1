use serde::{Deserialize, Serialize};

/// Snapshot of store size, surfaced by the health report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreCounts {
    pub items: usize,
}
