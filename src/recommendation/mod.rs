//! The recommendation core: pure, synchronous functions that turn a discovery
//! selection into an explained module recommendation and a depth suggestion.
//! Catalogs and configuration are injected as explicit arguments; there is no
//! hidden state, no I/O, and identical inputs always produce identical
//! output.

mod aggregation;
mod classify;
pub mod codes;
mod config;
pub mod depth;
pub mod plan;
pub mod result;
pub mod selection;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::catalog::Catalog;

pub use codes::{codes_to_module_ids, module_ids_to_codes};
pub use config::{EngineConfig, DEFAULT_DEPTH_THRESHOLD};
pub use depth::{calculate_depth_recommendation, AssessmentDepth, DepthRecommendation};
pub use plan::{ActionPlan, PlanRow};
pub use result::{
    RecommendationResult, RecommendationWarning, RecommendedModule, WarningKind, WhySuggested,
};
pub use selection::DiscoverySelection;

/// Stateless engine applying the fixed rule table to a discovery selection.
pub struct RecommendationEngine {
    catalog: Catalog,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine over the catalog shipped with this build and default knobs.
    pub fn standard() -> Self {
        Self::new(Catalog::standard(), EngineConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Maps a selection to the recommended and also-relevant module lists.
    ///
    /// Degrades instead of failing: an unknown industry uses the generic
    /// starter list, and an empty touchpoint selection still yields the
    /// starter set plus a `no-selection` warning.
    pub fn recommend(&self, selection: &DiscoverySelection) -> RecommendationResult {
        let triggered = aggregation::collect_triggered(&self.catalog, selection);
        let (recommended_modules, also_relevant) =
            classify::classify(&self.catalog, &selection.industry_id, &triggered);

        let mut warnings = Vec::new();
        if selection.selected_touchpoint_ids.is_empty() {
            warnings.push(RecommendationWarning {
                kind: WarningKind::NoSelection,
                message: "No touchpoints selected; showing the starter set for your industry."
                    .to_string(),
            });
        }

        RecommendationResult {
            recommended_modules,
            also_relevant,
            warnings,
        }
    }

    /// Depth recommendation for the same selection, using this engine's
    /// configured threshold.
    pub fn depth(&self, selected_touchpoint_ids: &BTreeSet<String>) -> DepthRecommendation {
        calculate_depth_recommendation(selected_touchpoint_ids, &self.config)
    }
}
