//! Branding and page data model
//!
//! `HeaderConfig` is built once per site build and read-only afterwards.
//! Page types are serializable so the preview server can expose them as JSON.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Media type of an embedded logo payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoMediaType {
    Png,
    Jpeg,
    Gif,
    Svg,
}

impl LogoMediaType {
    pub fn mime(&self) -> &'static str {
        match self {
            LogoMediaType::Png => "image/png",
            LogoMediaType::Jpeg => "image/jpeg",
            LogoMediaType::Gif => "image/gif",
            LogoMediaType::Svg => "image/svg+xml",
        }
    }

    /// Sniff the media type from the payload's leading bytes.
    ///
    /// Unrecognized or empty payloads report as PNG; the rendered output is
    /// then a degraded-but-valid image reference rather than an error.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
            LogoMediaType::Png
        } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            LogoMediaType::Jpeg
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            LogoMediaType::Gif
        } else if looks_like_svg(bytes) {
            LogoMediaType::Svg
        } else {
            LogoMediaType::Png
        }
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let Ok(text) = std::str::from_utf8(bytes) else {
        return false;
    };
    let trimmed = text.trim_start();
    trimmed.starts_with("<svg") || trimmed.starts_with("<?xml")
}

/// An inline-embeddable logo image.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub media_type: LogoMediaType,
}

impl Logo {
    /// Wrap raw image bytes, sniffing the media type from the payload.
    pub fn new(bytes: Vec<u8>) -> Self {
        let media_type = LogoMediaType::sniff(&bytes);
        Logo { bytes, media_type }
    }

    /// Encode as a `data:` URI suitable for an `<img src>` attribute.
    ///
    /// An empty payload yields `data:<mime>;base64,` — a broken image, not a
    /// failure.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.media_type.mime(),
            BASE64.encode(&self.bytes)
        )
    }
}

/// Branding inputs for the page header, fixed once per site build.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderConfig {
    /// Project name shown as the header's visible label.
    pub display_name: String,
    /// Project home page the header links to. Used verbatim — no
    /// normalization.
    pub home_url: String,
    /// Logo embedded inline in the header.
    pub logo: Logo,
}

/// A source page of the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Output path relative to the site root, e.g. `guide/install.html`.
    pub slug: String,
    /// Page title, taken from the first heading or the file stem.
    pub title: String,
    /// Markdown body.
    pub body: String,
}

/// A page rendered into the full HTML shell.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub slug: String,
    pub title: String,
    pub html: String,
}
