//! Sitemap assembly. Static pages first, then every public project with its
//! last modification date.

use crate::modules::project::application::ports::outgoing::project_query::ProjectView;

const STATIC_ROUTES: [&str; 3] = ["/", "/about/", "/projects/"];

/// Renders the sitemap XML for the given base URL and public projects.
pub fn build_sitemap(base_url: &str, projects: &[ProjectView]) -> String {
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        "\n",
    ));

    for route in STATIC_ROUTES {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{base_url}{route}</loc>\n"));
        xml.push_str("    <changefreq>daily</changefreq>\n");
        xml.push_str("    <priority>0.5</priority>\n");
        xml.push_str("  </url>\n");
    }

    for project in projects {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{base_url}/projects/{}/</loc>\n",
            project.id
        ));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            project.updated_at.format("%Y-%m-%d")
        ));
        xml.push_str("    <changefreq>weekly</changefreq>\n");
        xml.push_str("    <priority>0.8</priority>\n");
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
