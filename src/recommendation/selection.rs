use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Everything the discovery step collects about a business. Identifier sets
/// are ordered so iteration is deterministic regardless of the order the user
/// clicked things in; scoring itself never depends on set order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySelection {
    pub selected_touchpoint_ids: BTreeSet<String>,
    pub selected_sub_touchpoint_ids: BTreeSet<String>,
    pub industry_id: String,
    /// Carried for the presentation layer and session record; the scoring
    /// rules key off industry and touchpoints only.
    pub service_type_id: String,
}

impl DiscoverySelection {
    pub fn for_industry(industry_id: impl Into<String>) -> Self {
        Self {
            industry_id: industry_id.into(),
            ..Self::default()
        }
    }

    pub fn with_touchpoints<I, S>(mut self, touchpoint_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_touchpoint_ids
            .extend(touchpoint_ids.into_iter().map(Into::into));
        self
    }

    pub fn with_sub_touchpoints<I, S>(mut self, sub_touchpoint_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_sub_touchpoint_ids
            .extend(sub_touchpoint_ids.into_iter().map(Into::into));
        self
    }
}
