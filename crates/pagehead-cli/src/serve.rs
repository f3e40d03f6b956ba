use camino::Utf8Path;
use pagehead::server::{serve, SiteServerConfig};
use pagehead::static_site::StaticSiteGenerator;

use crate::build::{collect_pages, load_site};

pub fn serve_site(path: &Utf8Path, port: u16, assets: Option<&Utf8Path>) {
    let (config, header) = load_site(path);
    let pages = collect_pages(path);
    let rendered = StaticSiteGenerator::render_pages(&header, config.title(), &pages);

    let server_config = SiteServerConfig {
        port,
        host: "127.0.0.1".to_string(),
        assets_path: assets.map(|p| p.to_string()),
    };

    println!("Previewing {} page(s)", rendered.len());
    println!("Open http://127.0.0.1:{port} in your browser");
    println!("Press Ctrl+C to stop");

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Error starting runtime: {e}");
        std::process::exit(1);
    });
    rt.block_on(async {
        if let Err(e) = serve(&header, config.title(), rendered, server_config).await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
    });
}
