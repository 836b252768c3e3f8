use crate::catalog::Catalog;

/// Projects module ids to display codes. Ids with no catalog entry pass
/// through unchanged so a saved selection is never silently truncated by a
/// catalog edit.
pub fn module_ids_to_codes(catalog: &Catalog, module_ids: &[String]) -> Vec<String> {
    module_ids
        .iter()
        .map(|id| {
            catalog
                .module(id)
                .map(|module| module.code.to_string())
                .unwrap_or_else(|| id.clone())
        })
        .collect()
}

/// Inverse projection used when rehydrating a saved selection. Unknown codes
/// pass through unchanged, mirroring [`module_ids_to_codes`].
pub fn codes_to_module_ids(catalog: &Catalog, codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .map(|code| {
            catalog
                .module_by_code(code)
                .map(|module| module.id.to_string())
                .unwrap_or_else(|| code.clone())
        })
        .collect()
}
