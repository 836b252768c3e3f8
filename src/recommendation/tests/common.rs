use std::collections::BTreeSet;

use crate::recommendation::{
    DiscoverySelection, RecommendationEngine, RecommendationResult, WhySuggested,
};

pub(crate) fn engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}

pub(crate) fn selection(industry: &str, touchpoints: &[&str]) -> DiscoverySelection {
    DiscoverySelection::for_industry(industry).with_touchpoints(touchpoints.iter().copied())
}

pub(crate) fn touchpoint_set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

pub(crate) fn reason_for<'a>(
    result: &'a RecommendationResult,
    module_id: &str,
) -> &'a WhySuggested {
    result
        .recommended_modules
        .iter()
        .chain(result.also_relevant.iter())
        .find(|module| module.module_id == module_id)
        .map(|module| &module.why_suggested)
        .unwrap_or_else(|| panic!("module '{module_id}' missing from result"))
}
