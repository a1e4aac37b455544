//! Download progress controller.
//!
//! Tracks the single download the UI follows: which buttons are disabled,
//! what the progress panel shows, and when it should fade out. Transport is
//! left to a [`DirectoryClient`](crate::core::client::DirectoryClient); the
//! controller only reacts to its events.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --begin--> Downloading --progress 100% / complete / fail--> Finished
//! Finished --(fade delay)--> Idle
//! ```
//!
//! The finished transition fires once per session and tells the caller to
//! schedule the fade-out for that session's generation.

use crate::config::{FOLDER_LABEL_PREFIX, PROGRESS_IDLE_PERCENT, messages};
use crate::core::client::{DownloadFile, DownloadResponse};
use crate::models::{DownloadSession, DownloadTarget, Progress};

/// A download ready to be saved.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedDownload<B> {
    /// Save-as filename
    pub filename: String,
    pub body: B,
}

/// UI state of the download panel.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadController {
    session: Option<DownloadSession>,
    generation: u64,
    buttons_disabled: bool,
    panel_visible: bool,
    finished: bool,
    percent: f64,
    label: String,
    error: Option<String>,
}

impl DownloadController {
    pub fn new() -> Self {
        Self {
            session: None,
            generation: 0,
            buttons_disabled: false,
            panel_visible: false,
            finished: false,
            percent: PROGRESS_IDLE_PERCENT,
            label: String::new(),
            error: None,
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Whether every download button is disabled.
    pub fn buttons_disabled(&self) -> bool {
        self.buttons_disabled
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Progress bar value, 0-100.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Filename shown above the bar.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Inline error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn session(&self) -> Option<&DownloadSession> {
        self.session.as_ref()
    }

    /// Whether a transfer is still in flight (bytes or response assembly).
    pub fn is_busy(&self) -> bool {
        self.buttons_disabled
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Handle a download button click.
    ///
    /// Returns the request to send, or `None` when buttons are disabled.
    pub fn begin(&mut self, target: &DownloadTarget) -> Option<DownloadFile> {
        if self.buttons_disabled {
            return None;
        }

        self.generation += 1;
        self.buttons_disabled = true;
        self.panel_visible = true;
        self.finished = false;
        self.percent = PROGRESS_IDLE_PERCENT;
        self.label = progress_label(target);
        self.session = Some(DownloadSession {
            file_path: target.path.clone(),
            is_directory: target.is_dir,
            is_downloading: true,
            percent_complete: 0.0,
        });

        Some(DownloadFile {
            file_path: target.path.clone(),
            is_directory: target.is_dir,
        })
    }

    /// Apply a progress event.
    ///
    /// Returns the generation to fade out when this event completed the
    /// transfer.
    pub fn progress(&mut self, progress: Progress) -> Option<u64> {
        let percent = progress.percent()?;
        let session = self.session.as_mut()?;
        session.percent_complete = percent;
        self.percent = percent;

        if percent >= 100.0 {
            self.finish()
        } else {
            None
        }
    }

    /// Accept a successful response and re-enable the buttons.
    pub fn complete<B>(&mut self, response: DownloadResponse<B>) -> (SavedDownload<B>, Option<u64>) {
        self.buttons_disabled = false;
        let fade = self.finish();
        let saved = SavedDownload {
            filename: response.filename(),
            body: response.body,
        };
        (saved, fade)
    }

    /// Record a failed or aborted transfer and re-enable the buttons.
    pub fn fail(&mut self) -> Option<u64> {
        self.buttons_disabled = false;
        self.error = Some(messages::DOWNLOAD_FAILED.to_string());
        self.finish()
    }

    /// Hide and reset the panel, unless a newer download has started since.
    pub fn fade_out(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.panel_visible = false;
        self.percent = PROGRESS_IDLE_PERCENT;
        self.label.clear();
        true
    }

    /// Close the error banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn finish(&mut self) -> Option<u64> {
        if let Some(session) = self.session.as_mut() {
            session.is_downloading = false;
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(self.generation)
    }
}

impl Default for DownloadController {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the progress panel: last path segment, folders prefixed.
pub fn progress_label(target: &DownloadTarget) -> String {
    let name = target
        .path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    if target.is_dir {
        format!("{FOLDER_LABEL_PREFIX}{name}")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DOWNLOAD_NAME;

    fn response(disposition: Option<&str>) -> DownloadResponse<Vec<u8>> {
        DownloadResponse {
            status: 200,
            content_disposition: disposition.map(String::from),
            body: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_begin_disables_buttons() {
        let mut controller = DownloadController::new();
        let request = controller
            .begin(&DownloadTarget::new("/data/survey/day1", true))
            .unwrap();

        assert_eq!(request.file_path, "/data/survey/day1");
        assert!(request.is_directory);
        assert!(controller.buttons_disabled());
        assert!(controller.panel_visible());
        assert_eq!(controller.label(), "Folder: day1");
        assert!(controller.session().unwrap().is_downloading);
    }

    #[test]
    fn test_second_click_while_disabled_is_ignored() {
        let mut controller = DownloadController::new();
        assert!(controller.begin(&DownloadTarget::new("a.tif", false)).is_some());
        assert_eq!(controller.begin(&DownloadTarget::new("b.tif", false)), None);
        assert_eq!(controller.session().unwrap().file_path, "a.tif");
    }

    #[test]
    fn test_full_progress_finishes_before_success() {
        let mut controller = DownloadController::new();
        controller.begin(&DownloadTarget::new("/data/a.tif", false));

        assert_eq!(controller.progress(Progress::new(50, Some(100))), None);
        assert_eq!(controller.percent(), 50.0);

        let fade = controller.progress(Progress::new(100, Some(100)));
        assert_eq!(fade, Some(1));
        assert!(!controller.session().unwrap().is_downloading);
        // Bytes are in but the response is still being assembled
        assert!(controller.buttons_disabled());

        let (saved, fade) = controller.complete(response(None));
        assert_eq!(fade, None);
        assert_eq!(saved.filename, DEFAULT_DOWNLOAD_NAME);
        assert!(!controller.buttons_disabled());
    }

    #[test]
    fn test_unknown_length_progress_is_ignored() {
        let mut controller = DownloadController::new();
        controller.begin(&DownloadTarget::new("a.tif", false));
        assert_eq!(controller.progress(Progress::new(10, None)), None);
        assert_eq!(controller.percent(), PROGRESS_IDLE_PERCENT);
    }

    #[test]
    fn test_complete_uses_server_filename() {
        let mut controller = DownloadController::new();
        controller.begin(&DownloadTarget::new("survey", true));
        let (saved, fade) =
            controller.complete(response(Some(r#"attachment; filename="survey.zip""#)));
        assert_eq!(saved.filename, "survey.zip");
        assert_eq!(saved.body, vec![1, 2, 3]);
        assert_eq!(fade, Some(1));
    }

    #[test]
    fn test_fail_shows_banner_and_reenables() {
        let mut controller = DownloadController::new();
        controller.begin(&DownloadTarget::new("a.tif", false));
        let fade = controller.fail();

        assert_eq!(fade, Some(1));
        assert!(!controller.buttons_disabled());
        assert_eq!(controller.error(), Some(messages::DOWNLOAD_FAILED));

        controller.dismiss_error();
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn test_fade_out_resets_panel() {
        let mut controller = DownloadController::new();
        controller.begin(&DownloadTarget::new("a.tif", false));
        controller.progress(Progress::new(100, Some(100)));
        controller.complete(response(None));

        assert!(controller.fade_out(1));
        assert!(!controller.panel_visible());
        assert_eq!(controller.percent(), PROGRESS_IDLE_PERCENT);
        assert_eq!(controller.label(), "");
    }

    #[test]
    fn test_stale_fade_does_not_touch_new_session() {
        let mut controller = DownloadController::new();
        controller.begin(&DownloadTarget::new("a.tif", false));
        let stale = controller.fail().unwrap();

        controller.begin(&DownloadTarget::new("b.tif", false));
        assert!(!controller.fade_out(stale));
        assert!(controller.panel_visible());
        assert_eq!(controller.label(), "b.tif");
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(progress_label(&DownloadTarget::new("/data/a/img.tif", false)), "img.tif");
        assert_eq!(progress_label(&DownloadTarget::new("a/b/", true)), "Folder: b");
        assert_eq!(progress_label(&DownloadTarget::new("root.tif", false)), "root.tif");
    }
}
