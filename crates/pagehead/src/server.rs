//! Preview server for generated sites
//!
//! An axum HTTP server that holds the rendered pages in memory, for checking
//! a site before publishing. Behind the `serve` feature.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::assets::html_shell;
use crate::header::render_header;
use crate::model::{HeaderConfig, RenderedPage};

/// Application state shared across handlers
pub struct SiteServerState {
    /// All rendered pages, keyed by slug.
    pub pages: Vec<RenderedPage>,
    /// Header fragment, rendered once at startup for 404 pages.
    header_html: String,
    /// Site title for 404 pages.
    site_title: String,
    /// Path to an extra static asset directory.
    pub assets_path: Option<String>,
}

impl SiteServerState {
    pub fn new(header: &HeaderConfig, site_title: &str, pages: Vec<RenderedPage>) -> Self {
        Self {
            pages,
            header_html: render_header(header),
            site_title: site_title.to_string(),
            assets_path: None,
        }
    }

    pub fn with_assets(mut self, path: impl Into<String>) -> Self {
        self.assets_path = Some(path.into());
        self
    }

    fn find(&self, slug: &str) -> Option<&RenderedPage> {
        self.pages
            .iter()
            .find(|page| page.slug == slug || page.slug == format!("{slug}.html"))
    }
}

/// Summary entry for the page-listing API.
#[derive(serde::Serialize)]
struct PageSummary {
    slug: String,
    title: String,
}

/// Create the site router
pub fn site_router(state: Arc<SiteServerState>) -> Router {
    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/page/{*slug}", get(page_handler))
        .route("/api/pages", get(pages_api_handler))
        .with_state(state.clone());

    // Serve extra static assets if configured
    if let Some(ref assets_path) = state.assets_path {
        router = router.nest_service("/assets", ServeDir::new(assets_path));
    }

    router
}

/// Landing page handler
async fn index_handler(State(state): State<Arc<SiteServerState>>) -> (StatusCode, Html<String>) {
    match state.find("index.html").or_else(|| state.pages.first()) {
        Some(page) => (StatusCode::OK, Html(page.html.clone())),
        None => (StatusCode::NOT_FOUND, Html(render_not_found(&state, "index"))),
    }
}

/// Page handler; accepts slugs with or without the `.html` extension
async fn page_handler(
    State(state): State<Arc<SiteServerState>>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    match state.find(&slug) {
        Some(page) => (StatusCode::OK, Html(page.html.clone())),
        None => (StatusCode::NOT_FOUND, Html(render_not_found(&state, &slug))),
    }
}

/// Page-listing API handler (returns JSON)
async fn pages_api_handler(State(state): State<Arc<SiteServerState>>) -> impl IntoResponse {
    let summaries: Vec<_> = state
        .pages
        .iter()
        .map(|page| PageSummary {
            slug: page.slug.clone(),
            title: page.title.clone(),
        })
        .collect();
    Json(summaries)
}

/// Render a 404 page inside the branded shell
fn render_not_found(state: &SiteServerState, slug: &str) -> String {
    let content = format!(
        r#"<div class="not-found"><h1>Page not found</h1><p>No page named <code>{}</code> exists in this site.</p><p><a href="/">Back to the landing page</a></p></div>"#,
        crate::escape::escape_html_text(slug),
    );
    html_shell(
        &format!("Not found - {}", state.site_title),
        &state.header_html,
        &content,
    )
}

/// Configuration for the preview server
pub struct SiteServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Host to bind to
    pub host: String,
    /// Path to an extra static asset directory
    pub assets_path: Option<String>,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            assets_path: None,
        }
    }
}

/// Start the preview server
pub async fn serve(
    header: &HeaderConfig,
    site_title: &str,
    pages: Vec<RenderedPage>,
    config: SiteServerConfig,
) -> Result<(), std::io::Error> {
    let mut state = SiteServerState::new(header, site_title, pages);
    if let Some(assets_path) = config.assets_path {
        state = state.with_assets(assets_path);
    }

    let app = site_router(Arc::new(state));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Preview server listening on http://{}", addr);

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Logo;

    fn state() -> SiteServerState {
        let header = HeaderConfig {
            display_name: "vectorbt".to_string(),
            home_url: "https://github.com/polakowo/vectorbt".to_string(),
            logo: Logo::new(Vec::new()),
        };
        SiteServerState::new(
            &header,
            "vectorbt",
            vec![RenderedPage {
                slug: "guide/install.html".to_string(),
                title: "Install".to_string(),
                html: "<html>install</html>".to_string(),
            }],
        )
    }

    #[test]
    fn find_accepts_bare_and_extended_slugs() {
        let state = state();
        assert!(state.find("guide/install.html").is_some());
        assert!(state.find("guide/install").is_some());
        assert!(state.find("guide/missing").is_none());
    }

    #[test]
    fn not_found_page_keeps_branding() {
        let state = state();
        let html = render_not_found(&state, "missing");
        assert!(html.contains(">vectorbt</a>"));
        assert!(html.contains("<code>missing</code>"));
        assert!(html.contains("<title>Not found - vectorbt</title>"));
    }
}
