//! Global host services: site security and packaged resources

use url::Url;

/// Security header kinds understood by the host's site-security service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityHeaderKind {
    /// HTTP Strict Transport Security
    Hsts,
    /// HTTP Public Key Pinning
    Hpkp,
}

/// Host service answering sitewide security-policy queries
pub trait SiteSecurityService: Send + Sync {
    /// Whether `uri` is marked secure under the given policy kind. `flags`
    /// passes host-specific query modifiers through unchanged.
    fn is_secure_uri(&self, kind: SecurityHeaderKind, uri: &Url, flags: u32) -> bool;
}

/// Resolves packaged static resource names to loadable URLs
pub trait ResourceResolver: Send + Sync {
    fn resource_url(&self, name: &str) -> Option<Url>;
}

/// Resolver serving resources below a fixed base URL, the way a bundled
/// add-on data directory is exposed
#[derive(Debug, Clone)]
pub struct BundledResources {
    base: Url,
}

impl BundledResources {
    pub fn new(base: Url) -> Self {
        Self { base }
    }
}

impl ResourceResolver for BundledResources {
    fn resource_url(&self, name: &str) -> Option<Url> {
        self.base.join(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resources_join() {
        let base = Url::parse("resource://cipherbar/").unwrap();
        let resolver = BundledResources::new(base);
        let url = resolver.resource_url("cipherbar.css").unwrap();
        assert_eq!(url.as_str(), "resource://cipherbar/cipherbar.css");
    }

    #[test]
    fn test_bundled_resources_keep_base_path() {
        let base = Url::parse("https://host.example/addon/data/").unwrap();
        let resolver = BundledResources::new(base);
        let url = resolver.resource_url("cipherbar.css").unwrap();
        assert_eq!(url.as_str(), "https://host.example/addon/data/cipherbar.css");
    }
}
