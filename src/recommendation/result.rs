use serde::{Deserialize, Serialize};

/// Why a module was surfaced. One variant per reason kind so the precedence
/// rule (triggered > default-starter > padding) is exhaustively checkable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WhySuggested {
    /// Recommended for this industry regardless of selections.
    DefaultStarter {
        #[serde(skip_serializing_if = "Option::is_none")]
        industry_name: Option<String>,
    },
    /// One or more selected touchpoints map to this module. Labels are
    /// de-duplicated and listed in catalog order.
    Triggered { triggering_question_texts: Vec<String> },
    /// Shares a display category with a triggered or starter module;
    /// surfaced as optional, never required.
    Padding,
}

impl WhySuggested {
    pub fn summary(&self) -> String {
        match self {
            WhySuggested::DefaultStarter {
                industry_name: Some(name),
            } => format!("recommended starting point for {name} businesses"),
            WhySuggested::DefaultStarter { industry_name: None } => {
                "recommended starting point for your industry".to_string()
            }
            WhySuggested::Triggered {
                triggering_question_texts,
            } => format!("you selected: {}", triggering_question_texts.join(", ")),
            WhySuggested::Padding => "related to other modules in your selection".to_string(),
        }
    }
}

/// A single surfaced module with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedModule {
    pub module_id: String,
    pub module_name: String,
    pub estimated_minutes: u16,
    pub why_suggested: WhySuggested,
}

/// Non-fatal notice attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationWarning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    NoSelection,
}

/// Engine output: the primary recommended set, the optional also-relevant
/// set, and any warnings. The two lists never share a module id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommended_modules: Vec<RecommendedModule>,
    pub also_relevant: Vec<RecommendedModule>,
    pub warnings: Vec<RecommendationWarning>,
}

impl RecommendationResult {
    /// Module ids of the primary recommended set, in display order.
    pub fn recommended_ids(&self) -> Vec<&str> {
        self.recommended_modules
            .iter()
            .map(|module| module.module_id.as_str())
            .collect()
    }
}
