//! The branded header fragment
//!
//! Every generated page opens with the same block: a home link wrapping the
//! inline logo and the project's display name. The renderer is a pure
//! function of its inputs (no I/O, no shared state), so the site generator
//! may call it from any number of threads.

use crate::escape::{escape_html, escape_html_text};
use crate::model::HeaderConfig;

/// Name of the generator. Fixed; used for the home link's accessible title.
pub const TOOL_NAME: &str = "pagehead";

/// Render the header fragment for a page.
///
/// The anchor targets `home_url` exactly as configured (escaped for the
/// attribute context, never normalized), the logo is embedded as a base64
/// `data:` URI, and `display_name` is the visible label. Rendering the same
/// config twice yields byte-identical output.
pub fn render_header(config: &HeaderConfig) -> String {
    format!(
        r#"<header class="page-header"><a class="homelink" rel="home" title="{tool} Home" href="{href}"><img class="logo" src="{src}" alt="">{name}</a></header>"#,
        tool = TOOL_NAME,
        href = escape_html(&config.home_url),
        src = config.logo.data_uri(),
        name = escape_html_text(&config.display_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Logo;

    fn config(name: &str, url: &str, logo_bytes: &[u8]) -> HeaderConfig {
        HeaderConfig {
            display_name: name.to_string(),
            home_url: url.to_string(),
            logo: Logo::new(logo_bytes.to_vec()),
        }
    }

    #[test]
    fn renders_project_branding() {
        let html = render_header(&config(
            "vectorbt",
            "https://github.com/polakowo/vectorbt",
            b"\x89PNG\r\n\x1a\n",
        ));

        assert!(html.contains(r#"href="https://github.com/polakowo/vectorbt""#));
        assert!(html.contains(">vectorbt</a>"));
        assert!(html.contains(r#"title="pagehead Home""#));
        assert!(html.contains("data:image/png;base64,"));
    }

    #[test]
    fn home_url_is_not_normalized() {
        let with_slash = render_header(&config("x", "https://example.com/docs/", b""));
        let without = render_header(&config("x", "https://example.com/docs", b""));

        assert!(with_slash.contains(r#"href="https://example.com/docs/""#));
        assert!(without.contains(r#"href="https://example.com/docs""#));
        assert_ne!(with_slash, without);
    }

    #[test]
    fn rendering_is_idempotent() {
        let cfg = config("mylib", "https://example.com", &[1, 2, 3, 255]);
        assert_eq!(render_header(&cfg), render_header(&cfg));
    }

    #[test]
    fn empty_logo_degrades_without_failing() {
        let html = render_header(&config("mylib", "https://example.com", b""));
        assert!(html.contains(r#"src="data:image/png;base64,""#));
    }

    #[test]
    fn display_name_markup_is_escaped() {
        let html = render_header(&config("a<b>", "https://example.com", b""));
        assert!(html.contains(">a&lt;b&gt;</a>"));
        assert!(!html.contains("><b>"));
    }

    #[test]
    fn safe_to_render_concurrently() {
        let cfg = std::sync::Arc::new(config("lib", "https://example.com", b"GIF89a"));
        let expected = render_header(&cfg);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cfg = cfg.clone();
                std::thread::spawn(move || render_header(&cfg))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("render thread"), expected);
        }
    }
}
