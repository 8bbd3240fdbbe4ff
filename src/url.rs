//! Query-string assembly.

/// Appends `?key1=val1&key2=val2...` to `base_url`.
///
/// Parameter order is part of the externally observable URL, so the
/// caller's order is preserved verbatim. An empty parameter list returns
/// the base URL unchanged.
pub fn build_url(base_url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return base_url.to_string();
    }
    let query = params
        .iter()
        .map(|(key, val)| format!("{key}={val}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base_url}?{query}")
}
