/// Baseline modules recommended for an industry before any touchpoint is
/// selected. Unknown industries and the catch-all `other` fall back to
/// [`GENERIC_STARTERS`], so the starter list is never empty.
pub(crate) fn default_starters(industry_id: &str) -> &'static [&'static str] {
    match industry_id {
        "retail" => &["approach-entry", "service-counter", "digital-content"],
        "hospitality" => &["approach-entry", "facilities", "staff-awareness"],
        "healthcare" => &["communications", "approach-entry", "customer-support"],
        "professional-services" => &["digital-content", "communications"],
        _ => GENERIC_STARTERS,
    }
}

pub(crate) const GENERIC_STARTERS: &[&str] =
    &["digital-content", "approach-entry", "staff-awareness"];

/// Display name for a cataloged industry; `None` for unknown ids so callers
/// can fall back to generic wording.
pub(crate) fn industry_name(industry_id: &str) -> Option<&'static str> {
    match industry_id {
        "retail" => Some("Retail"),
        "hospitality" => Some("Hospitality"),
        "healthcare" => Some("Healthcare"),
        "professional-services" => Some("Professional services"),
        _ => None,
    }
}
