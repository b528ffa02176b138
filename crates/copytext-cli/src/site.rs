//! Site configuration: which page sections get copied on which hosts.

/// Copy targets for one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Matched as a substring of the page hostname
    pub hostname: &'static str,
    /// CSS selectors of the copyable sections
    pub selectors: &'static [&'static str],
}

/// Built-in site table
pub const SITES: &[SiteConfig] = &[SiteConfig {
    hostname: "supabase.com",
    selectors: &["#sb-docs-guide-main-article", "section.grid.gap-x-16.gap-y-8"],
}];

/// Find the configuration for a page hostname.
///
/// A leading `www.` is ignored; the first entry whose hostname occurs in the
/// page hostname wins.
pub fn config_for_host<'a>(sites: &'a [SiteConfig], hostname: &str) -> Option<&'a SiteConfig> {
    let hostname = hostname.replacen("www.", "", 1);
    sites.iter().find(|site| hostname.contains(site.hostname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_host() {
        let site = config_for_host(SITES, "supabase.com").unwrap();
        assert_eq!(site.selectors.len(), 2);
    }

    #[test]
    fn test_www_and_subdomains() {
        assert!(config_for_host(SITES, "www.supabase.com").is_some());
        assert!(config_for_host(SITES, "docs.supabase.com").is_some());
    }

    #[test]
    fn test_unknown_host() {
        assert!(config_for_host(SITES, "example.com").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        const TABLE: &[SiteConfig] = &[
            SiteConfig {
                hostname: "example.com",
                selectors: &["main"],
            },
            SiteConfig {
                hostname: "docs.example.com",
                selectors: &["article"],
            },
        ];
        let site = config_for_host(TABLE, "docs.example.com").unwrap();
        assert_eq!(site.selectors, &["main"]);
    }
}
