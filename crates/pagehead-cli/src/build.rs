use camino::Utf8Path;
use pagehead::model::Page;
use pagehead::static_site::StaticSiteGenerator;
use pagehead::{HeaderConfig, SiteConfig};

/// Load `pagehead.toml` from `path` and resolve the header branding.
///
/// Exits with a message on any config problem; the CLI has no recovery path.
pub fn load_site(path: &Utf8Path) -> (SiteConfig, HeaderConfig) {
    let config_path = path.join("pagehead.toml");
    let config = SiteConfig::load(config_path.as_std_path()).unwrap_or_else(|e| {
        eprintln!("Error reading {config_path}: {e}");
        std::process::exit(1);
    });
    let header = config.header_config(path.as_std_path()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    (config, header)
}

/// Collect the site's Markdown pages from `<path>/pages`.
pub fn collect_pages(path: &Utf8Path) -> Vec<Page> {
    let pages_dir = path.join("pages");
    if !pages_dir.is_dir() {
        eprintln!("Error: {pages_dir} not found (pages live in a `pages/` directory)");
        std::process::exit(1);
    }
    let pages = StaticSiteGenerator::collect_pages(pages_dir.as_std_path()).unwrap_or_else(|e| {
        eprintln!("Error reading {pages_dir}: {e}");
        std::process::exit(1);
    });
    if pages.is_empty() {
        eprintln!("Warning: no .md pages found under {pages_dir}");
    }
    pages
}

pub fn build(path: &Utf8Path, output: &Utf8Path) {
    let (config, header) = load_site(path);
    let pages = collect_pages(path);
    let output = if output.is_absolute() {
        output.to_path_buf()
    } else {
        path.join(output)
    };

    if let Err(e) =
        StaticSiteGenerator::generate(&header, config.title(), &pages, output.as_std_path())
    {
        eprintln!("Error writing site to {output}: {e}");
        std::process::exit(1);
    }

    println!("Wrote {} page(s) to {output}", pages.len());
}
