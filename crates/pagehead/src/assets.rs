//! Embedded assets and the HTML page shell

use crate::escape::escape_html_text;

/// The site stylesheet, inlined into every generated page.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Fallback logo used when the site config does not provide one.
pub const DEFAULT_LOGO: &[u8] = include_bytes!("../assets/logo.png");

/// Wrap a rendered header and page body in the full HTML document shell.
///
/// The stylesheet is inlined so a generated page is a single self-contained
/// file that works over `file://`.
pub fn html_shell(title: &str, header_html: &str, content_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{css}</style>
</head>
<body>
  {header}
  <main class="page-content">
{content}
  </main>
</body>
</html>"#,
        title = escape_html_text(title),
        css = STYLES_CSS,
        header = header_html,
        content = content_html,
    )
}
