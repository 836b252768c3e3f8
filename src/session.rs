//! Shape of the wizard session persisted by the external session store. The
//! engine never touches storage itself; this record exists so the rest of the
//! application has one serde contract for what surrounds an engine run, and
//! so a saved session can be recomputed idempotently after a catalog update
//! without migrating the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommendation::{
    module_ids_to_codes, AssessmentDepth, DiscoverySelection, RecommendationEngine,
    RecommendationResult,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub selection: DiscoverySelection,
    /// Last engine output, refreshed by [`SessionRecord::recompute`].
    pub recommendation: Option<RecommendationResult>,
    /// Depth the user settled on, which may differ from the recommendation.
    pub review_mode: Option<AssessmentDepth>,
    /// Final user-confirmed modules, stored as display codes for the
    /// downstream pages.
    pub confirmed_module_codes: Vec<String>,
    pub computed_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    pub fn new(selection: DiscoverySelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Re-runs the engine against the stored selection. Safe to call any
    /// number of times; with an unchanged catalog and selection the stored
    /// recommendation comes out identical.
    pub fn recompute(&mut self, engine: &RecommendationEngine, now: DateTime<Utc>) {
        self.recommendation = Some(engine.recommend(&self.selection));
        self.computed_at = Some(now);
    }

    /// Records the final module choice, converting ids to display codes.
    pub fn confirm_modules(&mut self, engine: &RecommendationEngine, module_ids: &[String]) {
        self.confirmed_module_codes = module_ids_to_codes(engine.catalog(), module_ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn recompute_is_idempotent_for_a_saved_record() {
        let engine = RecommendationEngine::standard();
        let selection = DiscoverySelection::for_industry("retail")
            .with_touchpoints(["getting-in", "paying"]);
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();

        let mut record = SessionRecord::new(selection);
        record.recompute(&engine, now);
        let first = record.recommendation.clone().expect("recommendation stored");

        record.recompute(&engine, now);
        assert_eq!(record.recommendation, Some(first));
        assert_eq!(record.computed_at, Some(now));
    }

    #[test]
    fn confirm_modules_stores_display_codes_and_preserves_unknown_ids() {
        let engine = RecommendationEngine::standard();
        let mut record = SessionRecord::new(DiscoverySelection::for_industry("other"));

        record.confirm_modules(
            &engine,
            &[
                "digital-content".to_string(),
                "stale-module".to_string(),
                "approach-entry".to_string(),
            ],
        );

        assert_eq!(
            record.confirmed_module_codes,
            vec!["D1".to_string(), "stale-module".to_string(), "P1".to_string()]
        );
    }

    #[test]
    fn record_round_trips_through_json() {
        let engine = RecommendationEngine::standard();
        let mut record = SessionRecord::new(
            DiscoverySelection::for_industry("hospitality").with_touchpoints(["amenities"]),
        );
        record.recompute(&engine, Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap());
        record.review_mode = Some(AssessmentDepth::PulseCheck);

        let json = serde_json::to_string(&record).expect("record serializes");
        let restored: SessionRecord = serde_json::from_str(&json).expect("record deserializes");
        assert_eq!(restored, record);
    }
}
