use access_advisor::recommendation::{
    AssessmentDepth, DiscoverySelection, RecommendationEngine, WarningKind, WhySuggested,
};

fn engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}

#[test]
fn empty_selection_returns_industry_starters_with_a_warning() {
    let engine = engine();
    let result = engine.recommend(&DiscoverySelection::for_industry("retail"));

    assert_eq!(
        result.recommended_ids(),
        vec!["digital-content", "approach-entry", "service-counter"],
        "exactly the retail starter set, in catalog order"
    );
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::NoSelection);
    assert!(result
        .also_relevant
        .iter()
        .all(|module| module.why_suggested == WhySuggested::Padding));
}

#[test]
fn single_touchpoint_triggers_its_mapped_modules() {
    let engine = engine();
    let result = engine.recommend(
        &DiscoverySelection::for_industry("other").with_touchpoints(["finding-online"]),
    );

    for module_id in ["digital-content", "communications"] {
        let module = result
            .recommended_modules
            .iter()
            .find(|module| module.module_id == module_id)
            .unwrap_or_else(|| panic!("'{module_id}' should be recommended"));
        match &module.why_suggested {
            WhySuggested::Triggered {
                triggering_question_texts,
            } => assert_eq!(triggering_question_texts, &["Finding information online"]),
            other => panic!("expected triggered reason, got {other:?}"),
        }
    }
}

#[test]
fn identical_inputs_yield_byte_identical_output() {
    let engine = engine();
    let selection = DiscoverySelection::for_industry("hospitality")
        .with_touchpoints(["getting-in", "amenities", "staff-interaction"])
        .with_sub_touchpoints(["entrance-doors"]);

    let first = engine.recommend(&selection);
    let second = engine.recommend(&selection);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("result serializes"),
        serde_json::to_string(&second).expect("result serializes"),
    );
}

#[test]
fn selection_order_does_not_affect_the_result() {
    let engine = engine();
    // giving-feedback and contacting-ahead share two mapped modules.
    let forward = DiscoverySelection::for_industry("other")
        .with_touchpoints(["contacting-ahead", "giving-feedback"]);
    let reverse = DiscoverySelection::for_industry("other")
        .with_touchpoints(["giving-feedback", "contacting-ahead"]);

    let result = engine.recommend(&forward);
    assert_eq!(result, engine.recommend(&reverse));

    match &result
        .recommended_modules
        .iter()
        .find(|module| module.module_id == "customer-support")
        .expect("customer-support recommended")
        .why_suggested
    {
        WhySuggested::Triggered {
            triggering_question_texts,
        } => assert_eq!(
            triggering_question_texts,
            &[
                "Calling or messaging ahead".to_string(),
                "Giving feedback or making a complaint".to_string(),
            ],
            "labels are de-duplicated and kept in catalog order"
        ),
        other => panic!("expected triggered reason, got {other:?}"),
    }
}

#[test]
fn every_mapped_module_surfaces_when_its_touchpoint_is_selected() {
    let engine = engine();
    let catalog = engine.catalog().clone();

    for touchpoint in catalog.touchpoints() {
        let result = engine.recommend(
            &DiscoverySelection::for_industry("other").with_touchpoints([touchpoint.id]),
        );

        for module_id in &touchpoint.module_mapping {
            let module = result
                .recommended_modules
                .iter()
                .find(|module| module.module_id == *module_id)
                .unwrap_or_else(|| {
                    panic!("'{module_id}' missing for touchpoint '{}'", touchpoint.id)
                });
            match &module.why_suggested {
                WhySuggested::Triggered {
                    triggering_question_texts,
                } => assert!(
                    triggering_question_texts.contains(&touchpoint.label.to_string()),
                    "trigger labels for '{module_id}' must include '{}'",
                    touchpoint.label
                ),
                other => panic!("expected triggered reason, got {other:?}"),
            }
        }
    }
}

#[test]
fn recommendations_are_never_empty() {
    let engine = engine();
    let selections = [
        DiscoverySelection::for_industry("other"),
        DiscoverySelection::for_industry("unknown-industry"),
        DiscoverySelection::for_industry("retail").with_touchpoints(["paying"]),
        DiscoverySelection::for_industry("healthcare")
            .with_touchpoints(["finding-online", "contacting-ahead", "giving-feedback"]),
    ];

    for selection in selections {
        let result = engine.recommend(&selection);
        assert!(
            !result.recommended_modules.is_empty(),
            "empty recommendation for {selection:?}"
        );
    }
}

#[test]
fn depth_follows_the_breadth_of_the_selection() {
    let engine = engine();

    let narrow = DiscoverySelection::for_industry("other").with_touchpoints(["getting-in"]);
    let narrow_depth = engine.depth(&narrow.selected_touchpoint_ids);
    assert_eq!(narrow_depth.recommended_depth, AssessmentDepth::PulseCheck);

    let broad = DiscoverySelection::for_industry("other").with_touchpoints([
        "getting-in",
        "using-space",
        "amenities",
        "paying",
        "staff-interaction",
    ]);
    let broad_depth = engine.depth(&broad.selected_touchpoint_ids);
    assert_eq!(broad_depth.recommended_depth, AssessmentDepth::DeepDive);
}
