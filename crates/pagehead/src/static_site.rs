//! Static site generation
//!
//! Renders every Markdown page into the branded shell and writes one HTML
//! file per page. The output opens straight from disk, no server needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::assets::html_shell;
use crate::header::render_header;
use crate::markdown::render_markdown;
use crate::model::{HeaderConfig, Page, RenderedPage};

pub struct StaticSiteGenerator;

impl StaticSiteGenerator {
    /// Collect `.md` pages under `source_dir`, recursively.
    ///
    /// Slugs mirror the source layout with the extension swapped to `.html`,
    /// so `guide/install.md` becomes `guide/install.html`. Hidden directories
    /// are skipped. Pages are returned in path order, deterministically.
    pub fn collect_pages(source_dir: &Path) -> io::Result<Vec<Page>> {
        let mut pages = Vec::new();
        collect_into(source_dir, source_dir, &mut pages)?;
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }

    /// Render pages to full HTML documents without touching the filesystem.
    ///
    /// The header fragment is rendered once and shared by every page.
    pub fn render_pages(
        header: &HeaderConfig,
        site_title: &str,
        pages: &[Page],
    ) -> Vec<RenderedPage> {
        let header_html = render_header(header);

        pages
            .iter()
            .map(|page| {
                let title = if page.slug == "index.html" {
                    site_title.to_string()
                } else {
                    format!("{} - {}", page.title, site_title)
                };
                RenderedPage {
                    slug: page.slug.clone(),
                    title: page.title.clone(),
                    html: html_shell(&title, &header_html, &render_markdown(&page.body)),
                }
            })
            .collect()
    }

    /// Generate the site into `output_dir`.
    ///
    /// Besides one HTML file per page, writes a `pages.json` manifest
    /// (slug + title per page) for external tooling.
    pub fn generate(
        header: &HeaderConfig,
        site_title: &str,
        pages: &[Page],
        output_dir: &Path,
    ) -> io::Result<()> {
        fs::create_dir_all(output_dir)?;

        for rendered in Self::render_pages(header, site_title, pages) {
            let path = output_dir.join(&rendered.slug);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered.html)?;
        }

        let manifest: Vec<_> = pages
            .iter()
            .map(|page| ManifestEntry {
                slug: &page.slug,
                title: &page.title,
            })
            .collect();
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(output_dir.join("pages.json"), json)?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct ManifestEntry<'a> {
    slug: &'a str,
    title: &'a str,
}

fn collect_into(root: &Path, dir: &Path, pages: &mut Vec<Page>) -> io::Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if path.is_dir() {
            if !name.starts_with('.') {
                collect_into(root, &path, pages)?;
            }
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let body = fs::read_to_string(&path)?;
            let rel = path.strip_prefix(root).unwrap_or(&path);
            let slug = rel.with_extension("html").to_string_lossy().replace('\\', "/");
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            pages.push(Page {
                slug,
                title: page_title(&body, &stem),
                body,
            });
        }
    }

    Ok(())
}

/// Title from the first `# ` heading, falling back to the file stem.
fn page_title(body: &str, stem: &str) -> String {
    body.lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Logo;

    fn header() -> HeaderConfig {
        HeaderConfig {
            display_name: "vectorbt".to_string(),
            home_url: "https://github.com/polakowo/vectorbt".to_string(),
            logo: Logo::new(vec![0x89, b'P', b'N', b'G']),
        }
    }

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, contents).expect("write file");
    }

    #[test]
    fn title_from_first_heading() {
        assert_eq!(page_title("# Install\n\ntext", "install"), "Install");
        assert_eq!(page_title("no heading here", "install"), "install");
    }

    #[test]
    fn collects_pages_recursively_in_order() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path();
        write_file(&root.join("index.md"), "# Welcome");
        write_file(&root.join("guide/install.md"), "# Install");
        write_file(&root.join("notes.txt"), "not a page");
        write_file(&root.join(".drafts/wip.md"), "# WIP");

        let pages = StaticSiteGenerator::collect_pages(root).expect("collect");
        let slugs: Vec<_> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["guide/install.html", "index.html"]);
        assert_eq!(pages[0].title, "Install");
    }

    #[test]
    fn every_rendered_page_carries_the_header() {
        let pages = vec![
            Page {
                slug: "index.html".to_string(),
                title: "Welcome".to_string(),
                body: "# Welcome".to_string(),
            },
            Page {
                slug: "about.html".to_string(),
                title: "About".to_string(),
                body: "about text".to_string(),
            },
        ];

        let rendered = StaticSiteGenerator::render_pages(&header(), "vectorbt", &pages);
        assert_eq!(rendered.len(), 2);
        for page in &rendered {
            assert!(page
                .html
                .contains(r#"href="https://github.com/polakowo/vectorbt""#));
            assert!(page.html.contains(">vectorbt</a>"));
        }
        // Index uses the bare site title; other pages are prefixed
        assert!(rendered
            .iter()
            .any(|p| p.html.contains("<title>vectorbt</title>")));
        assert!(rendered
            .iter()
            .any(|p| p.html.contains("<title>About - vectorbt</title>")));
    }

    #[test]
    fn generate_writes_output_tree() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("site");
        let pages = vec![Page {
            slug: "guide/install.html".to_string(),
            title: "Install".to_string(),
            body: "# Install\n\nRun `cargo add`.".to_string(),
        }];

        StaticSiteGenerator::generate(&header(), "vectorbt", &pages, &out).expect("generate");

        let html = fs::read_to_string(out.join("guide/install.html")).expect("read output");
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(">vectorbt</a>"));
        assert!(html.contains("<h1>Install</h1>"));

        let manifest = fs::read_to_string(out.join("pages.json")).expect("read manifest");
        assert!(manifest.contains(r#""slug": "guide/install.html""#));
        assert!(manifest.contains(r#""title": "Install""#));
    }
}
