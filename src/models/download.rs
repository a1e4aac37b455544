//! Download-related data types.

/// What a download button points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Path sent to the server as `file_path`
    pub path: String,
    /// Folders are zipped server-side
    pub is_dir: bool,
}

impl DownloadTarget {
    pub fn new(path: impl Into<String>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            is_dir,
        }
    }
}

/// The download currently tracked by the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadSession {
    pub file_path: String,
    pub is_directory: bool,
    /// Bytes are still arriving
    pub is_downloading: bool,
    /// 0-100
    pub percent_complete: f64,
}

/// A transfer progress event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Bytes received so far
    pub loaded: u64,
    /// Total size, when the server announced one
    pub total: Option<u64>,
}

impl Progress {
    pub fn new(loaded: u64, total: Option<u64>) -> Self {
        Self { loaded, total }
    }

    /// Completion percentage, or `None` when the length is unknown.
    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some(self.loaded as f64 / total as f64 * 100.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(Progress::new(50, Some(200)).percent(), Some(25.0));
        assert_eq!(Progress::new(200, Some(200)).percent(), Some(100.0));
        assert_eq!(Progress::new(50, None).percent(), None);
        assert_eq!(Progress::new(0, Some(0)).percent(), None);
    }
}
