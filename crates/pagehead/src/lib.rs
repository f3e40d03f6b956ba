//! pagehead — branded page chrome for generated documentation sites
//!
//! This crate provides:
//! - `model`: header branding and page data types
//! - `header`: the branded header fragment renderer
//! - `markdown`: Markdown-to-HTML rendering for page bodies
//! - `assets`: embedded CSS/logo and the HTML page shell
//! - `config`: `pagehead.toml` loading
//! - `static_site`: static site generator
//! - `server` (behind the `serve` feature): axum preview server

pub mod assets;
pub mod config;
pub mod escape;
pub mod header;
pub mod markdown;
pub mod model;
pub mod static_site;

#[cfg(feature = "serve")]
pub mod server;

pub use config::{ConfigError, SiteConfig};
pub use header::{render_header, TOOL_NAME};
pub use model::{HeaderConfig, Logo, Page};
