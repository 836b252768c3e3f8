use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;

/// Intensity of the assessment the wizard should steer the user toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentDepth {
    PulseCheck,
    DeepDive,
}

impl AssessmentDepth {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentDepth::PulseCheck => "pulse-check",
            AssessmentDepth::DeepDive => "deep-dive",
        }
    }
}

/// Recommended depth plus a sentence the wizard can show verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRecommendation {
    pub recommended_depth: AssessmentDepth,
    pub reasoning: String,
}

/// Classifies depth from the number of distinct selected touchpoints.
/// Sub-touchpoint selections refine breadth rather than multiplying it, so
/// they are deliberately excluded from the count. Total function: an empty
/// selection yields a pulse check.
pub fn calculate_depth_recommendation(
    selected_touchpoint_ids: &BTreeSet<String>,
    config: &EngineConfig,
) -> DepthRecommendation {
    let breadth = selected_touchpoint_ids.len();
    if breadth >= config.depth_threshold {
        DepthRecommendation {
            recommended_depth: AssessmentDepth::DeepDive,
            reasoning: format!(
                "Your selection spans {breadth} touchpoints across the customer journey. \
                 A deep dive gives each of those areas the attention it needs."
            ),
        }
    } else {
        DepthRecommendation {
            recommended_depth: AssessmentDepth::PulseCheck,
            reasoning: format!(
                "Your selection covers {breadth} touchpoint(s), a focused footprint. \
                 A pulse check reviews it quickly and you can always go deeper later."
            ),
        }
    }
}
