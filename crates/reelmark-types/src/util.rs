/// Upstream marker for an absent value
const NOT_AVAILABLE: &str = "N/A";

/// Map the metadata API's "N/A" placeholder (and blank strings) to `None`.
pub fn available(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
            None
        } else {
            Some(v)
        }
    })
}

/// Trim a search term; `None` means there is nothing to search for.
pub fn normalize_term(term: &str) -> Option<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
