//! Integration tests for imgseek
//!
//! These tests drive the search controller end to end against a local fake
//! service that renders real JSON response bodies, so every page also goes
//! through response validation.

use imgseek::api::{ApiError, ImageSearch, SearchRequest, parse_search_body};
use imgseek::search::{
    FETCH_ERROR_MESSAGE, FetchCompletion, FetchWorker, RequestState, Resolution, SearchController,
    SearchPage,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fake service: `total_pages` pages of `per_page` photos for every query,
/// except queries in `failing`, which get a server error.
struct LocalService {
    total_pages: u32,
    failing: Vec<&'static str>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl LocalService {
    fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            failing: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(mut self, query: &'static str) -> Self {
        self.failing.push(query);
        self
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn body(&self, request: &SearchRequest) -> String {
        let results: Vec<_> = (0..request.per_page)
            .map(|n| {
                let id = format!("{}-{}-{n}", request.query, request.page);
                json!({
                    "id": id,
                    "width": 4000,
                    "height": 3000,
                    "description": format!("A {} photo", request.query),
                    "alt_description": format!("{} number {n}", request.query),
                    "likes": n * 10,
                    "downloads": n * 100 + 7,
                    "urls": {
                        "small": format!("https://img.test/{id}?w=400"),
                        "regular": format!("https://img.test/{id}?w=1080"),
                        "full": format!("https://img.test/{id}"),
                    },
                    "user": {
                        "name": "Dorothea Lange",
                        "username": "dlange",
                        "links": { "html": "https://photos.test/@dlange" }
                    }
                })
            })
            .collect();

        json!({
            "total": u64::from(self.total_pages) * u64::from(request.per_page),
            "total_pages": self.total_pages,
            "results": results,
        })
        .to_string()
    }
}

impl ImageSearch for LocalService {
    fn search(&self, request: &SearchRequest) -> Result<SearchPage, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.failing.contains(&request.query.as_str()) {
            return Err(ApiError::Status {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        parse_search_body(&self.body(request))
    }
}

/// Run whatever ticket an action produced and feed the result back
fn drive(
    controller: &mut SearchController,
    service: &LocalService,
    request: Option<imgseek::search::FetchRequest>,
) -> Resolution {
    let request = request.expect("action should issue a fetch");
    controller.complete(FetchCompletion::execute(request, service))
}

#[test]
fn test_search_page_select_close() {
    let service = LocalService::new(5);
    let mut controller = SearchController::new();

    let request = controller.submit_query("mountain");
    assert!(controller.is_loading());
    let resolution = drive(&mut controller, &service, request);

    assert_eq!(
        resolution,
        Resolution::Loaded {
            items: 20,
            total_pages: 5
        }
    );
    assert_eq!(controller.results().len(), 20);
    assert_eq!(controller.page_state().current_page(), 1);
    assert!(!controller.has_previous());
    assert!(controller.has_next());

    let request = controller.go_to_next_page();
    drive(&mut controller, &service, request);
    assert_eq!(controller.page_state().current_page(), 2);
    assert!(controller.has_previous());
    assert_eq!(controller.results()[0].id, "mountain-2-0");

    let item = controller.select_item("mountain-2-3").unwrap();
    assert_eq!(item.title(), "mountain number 3");
    assert_eq!(item.description_text(), "A mountain photo");
    assert_eq!(item.likes, 30);
    assert_eq!(item.downloads, Some(307));
    assert_eq!(item.author.name, "Dorothea Lange");
    assert_eq!(item.author.profile_url.as_deref(), Some("https://photos.test/@dlange"));
    assert_eq!(item.urls.regular, "https://img.test/mountain-2-3?w=1080");

    assert!(controller.close_detail());
    assert!(controller.selection().is_none());
    assert!(!controller.close_detail());
}

#[test]
fn test_last_page_disables_next() {
    let service = LocalService::new(2);
    let mut controller = SearchController::new();

    let request = controller.submit_query("coast");
    drive(&mut controller, &service, request);
    let request = controller.go_to_next_page();
    drive(&mut controller, &service, request);

    assert!(!controller.has_next());
    assert!(controller.go_to_next_page().is_none());
    assert_eq!(service.request_count(), 2);
}

#[test]
fn test_out_of_order_responses_keep_latest() {
    let service = LocalService::new(5);
    let mut controller = SearchController::new();

    let first = controller.submit_query("cats").unwrap();
    let second = controller.submit_query("dogs").unwrap();

    // The newer request resolves first; the older one must not overwrite it.
    let newer = FetchCompletion::execute(second, &service);
    let older = FetchCompletion::execute(first, &service);
    assert!(matches!(controller.complete(newer), Resolution::Loaded { .. }));
    assert_eq!(controller.complete(older), Resolution::Stale);

    assert_eq!(controller.query(), "dogs");
    assert!(controller.results().iter().all(|i| i.id.starts_with("dogs-")));
}

#[test]
fn test_blank_query_changes_nothing() {
    let service = LocalService::new(3);
    let mut controller = SearchController::new();
    let request = controller.submit_query("forest");
    drive(&mut controller, &service, request);

    assert!(controller.submit_query("   ").is_none());

    assert_eq!(controller.query(), "forest");
    assert_eq!(controller.request_state(), &RequestState::Success);
    assert_eq!(controller.results().len(), 20);
    assert_eq!(service.request_count(), 1);
}

#[test]
fn test_failure_keeps_results_and_retry_recovers() {
    let service = LocalService::new(3).failing("broken");
    let mut controller = SearchController::new();
    let request = controller.submit_query("river");
    drive(&mut controller, &service, request);

    let request = controller.submit_query("broken");
    assert_eq!(drive(&mut controller, &service, request), Resolution::Failed);
    assert_eq!(controller.error_message(), Some(FETCH_ERROR_MESSAGE));
    assert!(controller.results().iter().all(|i| i.id.starts_with("river-")));

    // Retrying the same failing query fails again but does not throw away results
    let request = controller.retry();
    assert_eq!(drive(&mut controller, &service, request), Resolution::Failed);
    assert_eq!(controller.results().len(), 20);

    // A new query clears the error
    let request = controller.submit_query("lake");
    assert!(controller.error_message().is_none());
    drive(&mut controller, &service, request);
    assert_eq!(controller.request_state(), &RequestState::Success);
}

#[test]
fn test_background_worker_round_trip() {
    let service = Arc::new(LocalService::new(4));
    let mut worker = FetchWorker::new(service.clone());
    let mut controller = SearchController::new();

    let request = controller.submit_query("desert").unwrap();
    worker.spawn(request).unwrap();

    let completion = worker
        .recv_timeout(Duration::from_secs(5))
        .unwrap()
        .expect("worker should deliver a completion");
    assert!(matches!(controller.complete(completion), Resolution::Loaded { .. }));
    assert_eq!(controller.results()[0].id, "desert-1-0");
    assert_eq!(service.request_count(), 1);
}
