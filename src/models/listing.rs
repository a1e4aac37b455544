use serde::{Deserialize, Serialize};

// =============================================================================
// Listing Types
// =============================================================================

/// One entry of a folder listing, as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// File or folder name
    pub name: String,
    /// Absolute path on the server (starts with the configured root)
    pub path: String,
    /// Whether this entry is a folder
    pub is_dir: bool,
    /// Creation time, already formatted by the server
    #[serde(default)]
    pub created_at: String,
    /// Size in bytes (null for folders on some backends)
    #[serde(default)]
    pub size: Option<u64>,
}

/// One page of a folder listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListingPage {
    /// Total number of entries matching the search
    pub count: u64,
    /// Entries on this page, in server order
    #[serde(default)]
    pub results: Vec<DirectoryEntry>,
    #[serde(default, rename = "hasPrevious")]
    pub has_previous: bool,
    #[serde(default, rename = "hasNext")]
    pub has_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_server_json() {
        let json = r#"{
            "count": 2,
            "hasPrevious": false,
            "hasNext": true,
            "results": [
                {"name": "flight_01", "path": "/data/thermal/flight_01", "is_dir": true,
                 "created_at": "2024-03-01 10:00", "size": null},
                {"name": "img.tif", "path": "/data/thermal/img.tif", "is_dir": false,
                 "created_at": "2024-03-01 10:05", "size": 2048}
            ]
        }"#;

        let page: ListingPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert!(page.has_next);
        assert!(!page.has_previous);
        assert_eq!(page.results[0].size, None);
        assert!(page.results[0].is_dir);
        assert_eq!(page.results[1].size, Some(2048));
    }

    #[test]
    fn test_listing_optional_fields() {
        let json = r#"{"count": 1, "results": [{"name": "a", "path": "/a", "is_dir": false}]}"#;
        let page: ListingPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results[0].created_at, "");
        assert_eq!(page.results[0].size, None);
        assert!(!page.has_next);
    }
}
