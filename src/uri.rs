pub const NAVIGATION_SCHEME: &str = "google.navigation";

/// Makes a free-text address safe for a navigation URI query. Spaces become
/// `+`, then leading and trailing `+` runs are stripped while interior ones
/// stay put. Degenerate input comes back as the empty string.
pub fn sanitize(raw: &str) -> String {
    raw.replace(' ', "+").trim_matches('+').to_string()
}

/// Query for handing the address to an external navigation app. The caller
/// launches it; this only builds the text.
pub fn navigation_query(raw: &str) -> String {
    format!("{NAVIGATION_SCHEME}:q={}", sanitize(raw))
}
