use crate::error::{Result, ScanError};
use url::Url;

/// One (domain, path) pair to probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub domain: String,
    pub path: String,
}

impl ProbeTarget {
    pub fn new(domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
        }
    }

    /// Full URL for this target.
    ///
    /// Bare domains get `https://` prepended. A scope entry that already names
    /// its scheme keeps it. Trailing slashes are dropped so the join stays single.
    pub fn url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        let base = if has_scheme(domain) {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };

        if self.path.is_empty() || self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }

    pub fn parse_url(&self) -> Result<Url> {
        let url = self.url();
        Url::parse(&url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))
    }
}

fn has_scheme(domain: &str) -> bool {
    let lower = domain.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Cross product of paths and domains, paths outer and domains inner
pub fn build_targets(paths: &[String], domains: &[String]) -> Vec<ProbeTarget> {
    let mut targets = Vec::with_capacity(paths.len() * domains.len());
    for path in paths {
        for domain in domains {
            targets.push(ProbeTarget::new(domain.as_str(), path.as_str()));
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_url_bare_domain() {
        let target = ProbeTarget::new("neko70.net", "/img1.png");
        assert_eq!(target.url(), "https://neko70.net/img1.png");
    }

    #[test]
    fn test_url_keeps_explicit_scheme() {
        let target = ProbeTarget::new("http://127.0.0.1:8080", "/admin");
        assert_eq!(target.url(), "http://127.0.0.1:8080/admin");

        let target = ProbeTarget::new("https://mygo.tw/", "/img2.png");
        assert_eq!(target.url(), "https://mygo.tw/img2.png");
    }

    #[test]
    fn test_url_bare_domain_trailing_slash() {
        let target = ProbeTarget::new("neko70.net/", "/img1.png");
        assert_eq!(target.url(), "https://neko70.net/img1.png");
    }

    #[test]
    fn test_url_path_without_leading_slash() {
        let target = ProbeTarget::new("mygo.tw", "robots.txt");
        assert_eq!(target.url(), "https://mygo.tw/robots.txt");
    }

    #[test]
    fn test_parse_url_invalid() {
        let target = ProbeTarget::new("not a domain", "/x");
        assert!(matches!(target.parse_url(), Err(ScanError::InvalidUrl(_))));
    }

    #[test]
    fn test_build_targets_paths_outer_domains_inner() {
        let paths = strings(&["/img1.png", "/img2.png"]);
        let domains = strings(&["neko70.net", "mygo.tw"]);

        let urls: Vec<String> = build_targets(&paths, &domains)
            .iter()
            .map(ProbeTarget::url)
            .collect();

        assert_eq!(
            urls,
            vec![
                "https://neko70.net/img1.png",
                "https://mygo.tw/img1.png",
                "https://neko70.net/img2.png",
                "https://mygo.tw/img2.png",
            ]
        );
    }

    #[test]
    fn test_build_targets_empty_side() {
        let paths = strings(&["/a"]);
        assert!(build_targets(&paths, &[]).is_empty());
        assert!(build_targets(&[], &paths).is_empty());
    }
}
