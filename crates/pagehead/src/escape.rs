//! HTML escaping for the two contexts the chrome renderer emits into:
//! attribute values (`href`, `title`) and element text (labels, titles).

/// Escape for an HTML attribute value.
///
/// Rewrites all five metacharacters (`& < > " '`) so a configured URL can
/// sit inside either quoting style without closing the attribute.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape for HTML element content, like the header label or `<title>`.
///
/// Quotes need no escaping in element text, so only `& < >` are rewritten
/// and most display names pass through unchanged.
pub fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
