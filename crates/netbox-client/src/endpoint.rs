//! Request targets: API root joined with a resource path suffix.

use netbox_core::{NetboxError, Result};
use url::Url;

/// A resolved list endpoint, e.g. `https://netbox.example.net/api/dcim/sites/`.
///
/// Object URLs are derived from it as `<list>/<id>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    list_url: Url,
}

impl Endpoint {
    /// Join `root` and `suffix`, keeping any path prefix the root carries
    /// (NetBox is often served below `/netbox/`).
    pub fn new(root: &str, suffix: &str) -> Result<Self> {
        let suffix = suffix.trim();
        if suffix.is_empty() {
            return Err(NetboxError::Config("empty endpoint suffix".into()));
        }

        let mut joined = format!(
            "{}/{}",
            root.trim().trim_end_matches('/'),
            suffix.trim_start_matches('/')
        );
        if !joined.ends_with('/') {
            joined.push('/');
        }

        let list_url = Url::parse(&joined).map_err(|e| NetboxError::InvalidUrl(format!("{joined}: {e}")))?;
        if !matches!(list_url.scheme(), "http" | "https") {
            return Err(NetboxError::InvalidUrl(format!(
                "{joined}: unsupported scheme {}",
                list_url.scheme()
            )));
        }

        Ok(Self { list_url })
    }

    /// URL of the list endpoint, with an optional raw query string such as
    /// `site=ams1&status=active`.
    #[must_use]
    pub fn list_url(&self, query: Option<&str>) -> Url {
        let mut url = self.list_url.clone();
        if let Some(query) = query.map(|q| q.trim().trim_start_matches('?')).filter(|q| !q.is_empty()) {
            url.set_query(Some(query));
        }
        url
    }

    /// List URL filtered down to one object ID (`?id=<id>`). An unknown ID
    /// yields an empty page rather than a 404.
    #[must_use]
    pub fn filter_by_id(&self, id: u64) -> Url {
        let mut url = self.list_url.clone();
        url.query_pairs_mut().append_pair("id", &id.to_string());
        url
    }

    /// URL of a single object
    #[must_use]
    pub fn object_url(&self, id: u64) -> Url {
        let mut url = self.list_url.clone();
        url.set_path(&format!("{}{id}/", self.list_url.path()));
        url
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.list_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_slashes() {
        for (root, suffix) in [
            ("https://netbox.example.net", "/api/dcim/sites/"),
            ("https://netbox.example.net/", "api/dcim/sites"),
            ("https://netbox.example.net/", "/api/dcim/sites"),
        ] {
            let endpoint = Endpoint::new(root, suffix).unwrap();
            assert_eq!(
                endpoint.list_url(None).as_str(),
                "https://netbox.example.net/api/dcim/sites/"
            );
        }
    }

    #[test]
    fn test_root_path_prefix_kept() {
        let endpoint = Endpoint::new("https://infra.example.net/netbox", "/api/ipam/prefixes/").unwrap();
        assert_eq!(
            endpoint.object_url(12).as_str(),
            "https://infra.example.net/netbox/api/ipam/prefixes/12/"
        );
    }

    #[test]
    fn test_query_and_id_filter() {
        let endpoint = Endpoint::new("https://netbox.example.net", "/api/dcim/devices/").unwrap();
        assert_eq!(
            endpoint.list_url(Some("?site=ams1&status=active")).as_str(),
            "https://netbox.example.net/api/dcim/devices/?site=ams1&status=active"
        );
        assert_eq!(
            endpoint.list_url(Some("  ")).as_str(),
            "https://netbox.example.net/api/dcim/devices/"
        );
        assert_eq!(
            endpoint.filter_by_id(42).as_str(),
            "https://netbox.example.net/api/dcim/devices/?id=42"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            Endpoint::new("https://netbox.example.net", ""),
            Err(NetboxError::Config(_))
        ));
        assert!(matches!(
            Endpoint::new("netbox.example.net", "/api/dcim/sites/"),
            Err(NetboxError::InvalidUrl(_))
        ));
        assert!(matches!(
            Endpoint::new("ftp://netbox.example.net", "/api/dcim/sites/"),
            Err(NetboxError::InvalidUrl(_))
        ));
    }
}
