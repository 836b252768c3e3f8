//! Static catalogs consumed by the recommendation engine: the customer
//! journey (phases and touchpoints), the module universe, and the industry
//! starter table. All of it is plain declarative data versioned with the
//! deployed build; nothing here is mutated at runtime.

pub(crate) mod industries;
pub mod journey;
pub mod modules;
pub mod normalize;

use std::collections::BTreeSet;

pub use journey::{JourneyPhase, SubTouchpoint, Touchpoint};
pub use modules::{ModuleCategory, ModuleDefinition};

/// The journey and module catalogs bundled with lookup helpers. Declaration
/// order is significant: it is the deterministic tie-break for output
/// ordering.
#[derive(Debug, Clone)]
pub struct Catalog {
    phases: Vec<JourneyPhase>,
    modules: Vec<ModuleDefinition>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            phases: journey::standard_journey(),
            modules: modules::standard_modules(),
        }
    }

    pub fn phases(&self) -> &[JourneyPhase] {
        &self.phases
    }

    /// Touchpoints in catalog declaration order, across all phases.
    pub fn touchpoints(&self) -> impl Iterator<Item = &Touchpoint> {
        self.phases.iter().flat_map(|phase| phase.touchpoints.iter())
    }

    pub fn touchpoint(&self, id: &str) -> Option<&Touchpoint> {
        self.touchpoints().find(|touchpoint| touchpoint.id == id)
    }

    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn module(&self, id: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|module| module.id == id)
    }

    pub fn module_by_code(&self, code: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|module| module.code == code)
    }

    /// Declaration index of a module, used as the stable ordering tie-break.
    pub fn module_position(&self, id: &str) -> Option<usize> {
        self.modules.iter().position(|module| module.id == id)
    }

    /// Checks catalog integrity: unique ids and codes, non-empty mappings,
    /// and no touchpoint referencing a module absent from the module catalog.
    /// The engine skips bad references at runtime; this is how they get
    /// caught before shipping a catalog edit.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut module_ids = BTreeSet::new();
        let mut module_codes = BTreeSet::new();
        for module in &self.modules {
            if !module_ids.insert(module.id) {
                return Err(CatalogError::DuplicateModule(module.id.to_string()));
            }
            if !module_codes.insert(module.code) {
                return Err(CatalogError::DuplicateCode(module.code.to_string()));
            }
        }

        let mut touchpoint_ids = BTreeSet::new();
        for touchpoint in self.touchpoints() {
            if !touchpoint_ids.insert(touchpoint.id) {
                return Err(CatalogError::DuplicateTouchpoint(touchpoint.id.to_string()));
            }
            if touchpoint.module_mapping.is_empty() {
                return Err(CatalogError::EmptyModuleMapping(touchpoint.id.to_string()));
            }
            for module_id in &touchpoint.module_mapping {
                if !module_ids.contains(module_id) {
                    return Err(CatalogError::UnknownModuleMapping {
                        touchpoint: touchpoint.id.to_string(),
                        module: module_id.to_string(),
                    });
                }
            }
        }

        for industry in ["retail", "hospitality", "healthcare", "professional-services", "other"] {
            for module_id in industries::default_starters(industry) {
                if !module_ids.contains(module_id) {
                    return Err(CatalogError::UnknownModuleMapping {
                        touchpoint: format!("industry:{industry}"),
                        module: module_id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Integrity failure in static catalog data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate touchpoint id '{0}'")]
    DuplicateTouchpoint(String),
    #[error("duplicate module id '{0}'")]
    DuplicateModule(String),
    #[error("duplicate module code '{0}'")]
    DuplicateCode(String),
    #[error("touchpoint '{0}' has an empty module mapping")]
    EmptyModuleMapping(String),
    #[error("'{touchpoint}' references unknown module '{module}'")]
    UnknownModuleMapping { touchpoint: String, module: String },
}
