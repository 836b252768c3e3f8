use std::collections::BTreeMap;

use crate::catalog::Catalog;

use super::selection::DiscoverySelection;

/// Accumulated evidence that a module was triggered: the de-duplicated labels
/// shown to the user and the distinct touchpoint count used for ordering.
/// Sub-touchpoint labels appear in `labels` but never add to the count; they
/// refine breadth, they do not multiply it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TriggerTrail {
    pub labels: Vec<String>,
    pub touchpoint_count: usize,
}

/// Maps each candidate module id to the touchpoint labels that triggered it.
///
/// Touchpoints are walked in catalog order, not selection order, so re-runs
/// with a reordered input set produce identical label lists. A selected
/// sub-touchpoint adds its own label after the parent's; it never replaces
/// the parent's contribution. Mappings to module ids missing from the module
/// catalog are skipped (a catalog data error, caught by validation tests).
pub(crate) fn collect_triggered(
    catalog: &Catalog,
    selection: &DiscoverySelection,
) -> BTreeMap<String, TriggerTrail> {
    let mut candidates: BTreeMap<String, TriggerTrail> = BTreeMap::new();

    for touchpoint in catalog.touchpoints() {
        if !selection.selected_touchpoint_ids.contains(touchpoint.id) {
            continue;
        }

        let mut labels = vec![touchpoint.label];
        for sub in &touchpoint.sub_touchpoints {
            if selection.selected_sub_touchpoint_ids.contains(sub.id) {
                labels.push(sub.label);
            }
        }

        for module_id in &touchpoint.module_mapping {
            if catalog.module(module_id).is_none() {
                continue;
            }
            let trail = candidates.entry(module_id.to_string()).or_default();
            trail.touchpoint_count += 1;
            for label in &labels {
                if !trail.labels.iter().any(|existing| existing == label) {
                    trail.labels.push(label.to_string());
                }
            }
        }
    }

    candidates
}
