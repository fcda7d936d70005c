//! Sitemap generation
//!
//! Fixed page table rendered as sitemaps.org XML, every entry stamped with
//! the current date. The same table doubles as the offline pre-cache list
//! consumed by the browser-side service worker.

use chrono::NaiveDate;

/// One sitemap entry: site-relative path plus crawler hints
#[derive(Debug, Clone, Copy)]
pub struct PageEntry {
    pub path: &'static str,
    pub change_freq: &'static str,
    pub priority: &'static str,
}

/// Every page the site serves, ordered by priority
pub const PAGES: &[PageEntry] = &[
    PageEntry {
        path: "",
        change_freq: "weekly",
        priority: "1.0",
    },
    PageEntry {
        path: "/property",
        change_freq: "monthly",
        priority: "0.9",
    },
    PageEntry {
        path: "/book",
        change_freq: "weekly",
        priority: "0.9",
    },
    PageEntry {
        path: "/highlands-nc-rentals",
        change_freq: "monthly",
        priority: "0.8",
    },
    PageEntry {
        path: "/local-guide",
        change_freq: "monthly",
        priority: "0.7",
    },
    PageEntry {
        path: "/contact",
        change_freq: "monthly",
        priority: "0.6",
    },
    PageEntry {
        path: "/blog",
        change_freq: "weekly",
        priority: "0.6",
    },
    PageEntry {
        path: "/blog/highlands-nc-waterfalls-guide",
        change_freq: "monthly",
        priority: "0.5",
    },
    PageEntry {
        path: "/privacy",
        change_freq: "yearly",
        priority: "0.3",
    },
    PageEntry {
        path: "/terms",
        change_freq: "yearly",
        priority: "0.3",
    },
];

/// Render the sitemap XML with every entry stamped `last_modified`
///
/// Pure given a date; the handler passes today's date.
pub fn render(base_url: &str, last_modified: NaiveDate) -> String {
    let stamp = last_modified.format("%Y-%m-%d").to_string();

    let entries = PAGES
        .iter()
        .map(|page| {
            format!(
                "<url>\n<loc>{}{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{}</priority>\n</url>",
                base_url, page.path, stamp, page.change_freq, page.priority
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        entries
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://highlands-rental.com";

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_sitemap_contains_every_page() {
        let xml = render(BASE, fixed_date());
        assert_eq!(xml.matches("<url>").count(), PAGES.len());
        for page in PAGES {
            let loc = format!("<loc>{}{}</loc>", BASE, page.path);
            assert!(xml.contains(&loc), "Sitemap should contain {}", loc);
        }
    }

    #[test]
    fn test_sitemap_stamps_the_given_date() {
        let xml = render(BASE, fixed_date());
        assert_eq!(
            xml.matches("<lastmod>2024-06-15</lastmod>").count(),
            PAGES.len()
        );
    }

    #[test]
    fn test_sitemap_has_xml_declaration_and_namespace() {
        let xml = render(BASE, fixed_date());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\""));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_homepage_has_top_priority() {
        assert_eq!(PAGES[0].path, "");
        assert_eq!(PAGES[0].priority, "1.0");
    }
}
