//! End-to-end flows through the browser state, table and download
//! controllers against the mock directory client.

use thermal_browser::config::{BrowserConfig, DEFAULT_DOWNLOAD_NAME};
use thermal_browser::core::client::MockDirectoryClient;
use thermal_browser::core::table::run_draw;
use thermal_browser::core::{
    BrowserState, DirectoryClient, DownloadController, DownloadResponse, FetchError,
};
use thermal_browser::models::{DirectoryEntry, DownloadTarget, ListingPage, Progress};

fn config() -> BrowserConfig {
    BrowserConfig::new("/api/thermal-files/", "/data/thermal", "/thermal-files/")
}

fn folder(name: &str) -> DirectoryEntry {
    DirectoryEntry {
        name: name.to_string(),
        path: format!("/data/thermal/{name}"),
        is_dir: true,
        created_at: "2024-05-02 08:30".to_string(),
        size: None,
    }
}

#[tokio::test]
async fn deep_link_then_folder_navigation() {
    let client = MockDirectoryClient::new();
    client.push_listing(Ok(ListingPage {
        count: 12,
        results: vec![folder("a/b/day1")],
        has_previous: true,
        has_next: true,
    }));
    client.push_listing(Ok(ListingPage::default()));

    let mut state = BrowserState::from_url("/thermal-files/?route_path=a/b&page=2&page_size=5");

    let first = state.next_draw();
    let data = run_draw(&client, &first, &config()).await.unwrap();
    assert_eq!(data.records_total, 12);
    assert_eq!(data.rows.len(), 1);

    state.open_folder("/a");
    let second = state.next_draw();
    let data = run_draw(&client, &second, &config()).await.unwrap();
    assert!(data.rows.is_empty());
    assert_eq!(data.records_total, 0);
    assert_eq!(data.records_filtered, 0);

    let requests = client.list_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        (requests[0].page, requests[0].page_size, requests[0].route_path.as_str()),
        (2, 5, "a/b")
    );
    assert_eq!(
        (requests[1].page, requests[1].page_size, requests[1].route_path.as_str()),
        (1, 5, "a")
    );
}

#[tokio::test]
async fn listing_failure_is_reported() {
    let client = MockDirectoryClient::new();
    client.push_listing(Err(FetchError::NetworkError("offline".to_string())));

    let mut state = BrowserState::default();
    let result = run_draw(&client, &state.next_draw(), &config()).await;
    assert!(matches!(result, Err(FetchError::NetworkError(_))));
}

#[tokio::test]
async fn download_finishes_on_full_progress_and_saves() {
    let client = MockDirectoryClient::new();
    client.set_progress(vec![
        Progress::new(512, Some(1024)),
        Progress::new(1024, Some(1024)),
    ]);
    client.push_download(Ok(DownloadResponse {
        status: 200,
        content_disposition: None,
        body: vec![0u8; 1024],
    }));

    let mut controller = DownloadController::new();
    let request = controller
        .begin(&DownloadTarget::new("/data/thermal/survey", true))
        .expect("buttons start enabled");

    // A second click while the first download runs sends nothing
    assert!(controller.begin(&DownloadTarget::new("/data/thermal/other", false)).is_none());

    let mut fades = Vec::new();
    let events = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = events.clone();
    let response = client
        .download(&request, move |progress| sink.borrow_mut().push(progress))
        .await
        .unwrap();

    for progress in events.borrow().iter() {
        if let Some(generation) = controller.progress(*progress) {
            fades.push(generation);
        }
    }
    // Finished before the response was handed over
    assert_eq!(fades, vec![1]);
    assert!(controller.buttons_disabled());

    let (saved, fade) = controller.complete(response);
    assert_eq!(fade, None);
    assert_eq!(saved.filename, DEFAULT_DOWNLOAD_NAME);
    assert_eq!(saved.body.len(), 1024);
    assert!(!controller.buttons_disabled());

    assert_eq!(client.download_requests().len(), 1);
    assert!(controller.fade_out(1));
    assert!(!controller.panel_visible());
}

#[tokio::test]
async fn aborted_download_reenables_buttons() {
    let client = MockDirectoryClient::new();
    client.push_download(Err(FetchError::Aborted));

    let mut controller = DownloadController::new();
    let request = controller
        .begin(&DownloadTarget::new("/data/thermal/img.tif", false))
        .unwrap();
    let result = client.download(&request, |_| {}).await;

    assert_eq!(result, Err(FetchError::Aborted));
    assert_eq!(controller.fail(), Some(1));
    assert!(!controller.buttons_disabled());
    assert!(controller.error().is_some());
    assert!(controller.begin(&DownloadTarget::new("/data/thermal/img.tif", false)).is_some());
}
