/// Remove a markdown code fence wrapping the whole reply.
///
/// Only a leading ```` ```json ```` (or bare ```` ``` ````) and a trailing
/// ```` ``` ```` on the trimmed text are removed; fences inside the body stay.
pub fn strip_code_fence(content: &str) -> &str {
    let mut s = content.trim();

    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }

    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }

    s.trim()
}
