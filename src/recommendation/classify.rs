use std::collections::BTreeMap;

use crate::catalog::{industries, Catalog, ModuleCategory, ModuleDefinition};

use super::aggregation::TriggerTrail;
use super::result::{RecommendedModule, WhySuggested};

/// Splits all candidates into the primary recommended list and the optional
/// also-relevant list.
///
/// Candidates come from three passes: triggered modules, the industry's
/// default starters (generic fallback for unknown industries), and padding
/// siblings that share a display category with anything already classified.
/// Reason precedence is triggered > default-starter > padding; a module
/// carries exactly one reason. Within each list the order is distinct
/// trigger count descending, then catalog declaration order ascending.
pub(crate) fn classify(
    catalog: &Catalog,
    industry_id: &str,
    triggered: &BTreeMap<String, TriggerTrail>,
) -> (Vec<RecommendedModule>, Vec<RecommendedModule>) {
    let mut reasons: BTreeMap<&str, WhySuggested> = BTreeMap::new();

    for (module_id, trail) in triggered {
        // Keys always resolve: aggregation only admits cataloged modules.
        if let Some(module) = catalog.module(module_id) {
            reasons.insert(
                module.id,
                WhySuggested::Triggered {
                    triggering_question_texts: trail.labels.clone(),
                },
            );
        }
    }

    let industry_name = industries::industry_name(industry_id);
    for starter_id in industries::default_starters(industry_id) {
        let Some(module) = catalog.module(starter_id) else {
            continue;
        };
        reasons.entry(module.id).or_insert(WhySuggested::DefaultStarter {
            industry_name: industry_name.map(str::to_string),
        });
    }

    let padded_categories: Vec<ModuleCategory> = catalog
        .modules()
        .iter()
        .filter(|module| reasons.contains_key(module.id))
        .map(|module| module.category)
        .collect();
    for module in catalog.modules() {
        if padded_categories.contains(&module.category) {
            reasons.entry(module.id).or_insert(WhySuggested::Padding);
        }
    }

    let mut recommended = Vec::new();
    let mut also_relevant = Vec::new();
    for (position, module) in catalog.modules().iter().enumerate() {
        let Some(reason) = reasons.remove(module.id) else {
            continue;
        };
        let trigger_count = triggered
            .get(module.id)
            .map(|trail| trail.touchpoint_count)
            .unwrap_or(0);
        let entry = (position, trigger_count, build_module(module, reason));
        if matches!(entry.2.why_suggested, WhySuggested::Padding) {
            also_relevant.push(entry);
        } else {
            recommended.push(entry);
        }
    }

    (order_modules(recommended), order_modules(also_relevant))
}

fn build_module(module: &ModuleDefinition, why_suggested: WhySuggested) -> RecommendedModule {
    RecommendedModule {
        module_id: module.id.to_string(),
        module_name: module.name.to_string(),
        estimated_minutes: module.estimated_minutes,
        why_suggested,
    }
}

fn order_modules(mut entries: Vec<(usize, usize, RecommendedModule)>) -> Vec<RecommendedModule> {
    entries.sort_by(|(position_a, count_a, _), (position_b, count_b, _)| {
        count_b.cmp(count_a).then(position_a.cmp(position_b))
    });
    entries.into_iter().map(|(_, _, module)| module).collect()
}
