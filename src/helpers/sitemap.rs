use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use anyhow::{anyhow, Context};
use sitemap::structs::UrlEntry;
use sitemap::writer::SiteMapWriter;
use tracing::info;

/// Public pages of the shop site, relative to the site root.
pub const SITE_PAGES: &[&str] = &[
    "/",
    "/services",
    "/services/alterations",
    "/services/bespoke-suits",
    "/services/wedding-dresses",
    "/about",
    "/reviews",
    "/contact",
];

pub fn page_urls(site_url: &str) -> Vec<String> {
    let site_url = site_url.trim_end_matches('/');
    SITE_PAGES
        .iter()
        .map(|page| format!("{}{}", site_url, page))
        .collect()
}

pub fn write_sitemap<W: Write>(
    site_url: &str,
    output: W,
) -> anyhow::Result<()> {
    let sitemap_writer = SiteMapWriter::new(output);
    let mut url_writer = sitemap_writer
        .start_urlset()
        .map_err(|e| anyhow!("Unable to write urlset: {:?}", e))?;

    for url in page_urls(site_url) {
        url_writer
            .url(UrlEntry::builder().loc(&url))
            .map_err(|e| anyhow!("Unable to write url {}: {:?}", url, e))?;
    }

    url_writer
        .end()
        .map_err(|e| anyhow!("Unable to write close tags: {:?}", e))?;
    Ok(())
}

pub fn generate_sitemap(
    site_url: &str,
    output_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }
    let file = File::create(output_path)
        .with_context(|| format!("Error creating {}", output_path.display()))?;

    write_sitemap(site_url, file)?;
    info!("Wrote {} pages to {}", SITE_PAGES.len(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_urls_strip_trailing_slash() {
        let urls = page_urls("https://tailor.example/");
        assert_eq!(urls[0], "https://tailor.example/");
        assert_eq!(urls[1], "https://tailor.example/services");
        assert_eq!(urls.len(), SITE_PAGES.len());
    }

    #[test]
    fn sitemap_lists_every_page() {
        let mut buffer = Vec::new();
        write_sitemap("https://tailor.example", &mut buffer).unwrap();

        let xml = String::from_utf8(buffer).unwrap();
        assert!(xml.contains("<urlset"));
        for url in page_urls("https://tailor.example") {
            assert!(xml.contains(&format!("<loc>{}</loc>", url)), "missing {}", url);
        }
    }

    #[test]
    fn generate_creates_missing_directories() {
        let root = std::env::temp_dir().join(format!("tailor-sitemap-{}", std::process::id()));
        let output_path = root.join("public").join("nested").join("sitemap.xml");

        generate_sitemap("https://tailor.example/", &output_path).unwrap();

        let xml = fs::read_to_string(&output_path).unwrap();
        assert!(xml.contains("<loc>https://tailor.example/contact</loc>"));
        fs::remove_dir_all(&root).unwrap();
    }
}
