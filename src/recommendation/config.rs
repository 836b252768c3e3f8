use serde::{Deserialize, Serialize};

/// Distinct-touchpoint count at which the classifier starts recommending a
/// deep dive instead of a pulse check. Overridable per deployment through
/// `APP_DEPTH_THRESHOLD`.
pub const DEFAULT_DEPTH_THRESHOLD: usize = 4;

/// Tunable knobs for the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub depth_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth_threshold: DEFAULT_DEPTH_THRESHOLD,
        }
    }
}
