/// Remove Markdown code fences a model may wrap around its JSON.
///
/// Handles a leading fence tagged `json`, a bare leading fence and a
/// trailing fence. Unfenced text comes back trimmed and otherwise unchanged.
pub fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    if let Some(rest) = s.trim_start().strip_prefix("```") {
        s = rest;
    }
    s.trim()
}
