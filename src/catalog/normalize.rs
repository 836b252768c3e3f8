//! Canonicalizes legacy identifiers carried over from earlier catalog
//! versions. Applied at the API and CLI boundary; the engine itself only ever
//! sees canonical ids.

/// Maps a legacy module id to its current id. Unknown ids pass through
/// unchanged so an uncataloged value is never silently rewritten.
pub fn normalize_module_id(id: &str) -> &str {
    match id {
        "web-presence" => "digital-content",
        "online-payments" => "online-transactions",
        "entrance-access" => "approach-entry",
        "staff-training" => "staff-awareness",
        "complaints-handling" => "customer-support",
        other => other,
    }
}

/// Maps a legacy touchpoint id to its current id, passing unknown ids through.
pub fn normalize_touchpoint_id(id: &str) -> &str {
    match id {
        "online-info" => "finding-online",
        "entering" => "getting-in",
        "checkout" => "paying",
        other => other,
    }
}
