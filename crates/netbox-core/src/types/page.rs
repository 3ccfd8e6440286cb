use serde::{Deserialize, Deserializer, Serialize};

/// Paginated list envelope returned by every NetBox list endpoint.
///
/// `next` and `previous` are absolute URLs. The API reports "no page" as
/// `null`, but some deployments send an empty string; both decode to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of objects matching the request, across all pages
    #[serde(default)]
    pub count: u64,

    /// URL of the following page
    #[serde(default, deserialize_with = "empty_url_as_none")]
    pub next: Option<String>,

    /// URL of the preceding page
    #[serde(default, deserialize_with = "empty_url_as_none")]
    pub previous: Option<String>,

    /// Objects on this page, in server order
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if the server reports another page
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if nothing matched the request at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.results.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

fn empty_url_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"count":2,"next":null,"previous":null,"results":[{"id":1},{"id":2}]}"#;
        let page: Page<Value> = serde_json::from_str(body).unwrap();

        assert_eq!(page.count, 2);
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1]["id"], 2);
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_next_is_none() {
        let body = r#"{"count":60,"next":"","previous":"  ","results":[]}"#;
        let page: Page<Value> = serde_json::from_str(body).unwrap();
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_next_url_kept() {
        let body = r#"{
            "count": 120,
            "next": "https://netbox.example.net/api/dcim/sites/?limit=50&offset=50",
            "previous": null,
            "results": []
        }"#;
        let page: Page<Value> = serde_json::from_str(body).unwrap();
        assert!(page.has_next());
        assert_eq!(
            page.next.as_deref(),
            Some("https://netbox.example.net/api/dcim/sites/?limit=50&offset=50")
        );
    }

    #[test]
    fn test_typed_results() {
        #[derive(Deserialize)]
        struct Site {
            id: u64,
            name: String,
        }

        let body = r#"{"count":1,"results":[{"id":4,"name":"ams1","slug":"ams1"}]}"#;
        let page: Page<Site> = serde_json::from_str(body).unwrap();
        assert_eq!(page.results[0].id, 4);
        assert_eq!(page.results[0].name, "ams1");
    }

    #[test]
    fn test_zero_count_is_empty() {
        let page: Page<Value> =
            serde_json::from_str(r#"{"count":0,"next":null,"previous":null,"results":[]}"#).unwrap();
        assert!(page.is_empty());
    }
}
