use bloodbank_client::{ApiClient, ApiError, BloodBankApi, Notifier, Severity, ToastBoard};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// 記錄所有通知以便斷言
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

fn client(server: &MockServer) -> (ApiClient<Arc<RecordingNotifier>>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = ApiClient::new(&server.base_url(), notifier.clone()).unwrap();
    (client, notifier)
}

#[tokio::test]
async fn test_success_returns_body_with_single_request() {
    let server = MockServer::start();
    let body = json!({
        "success": true,
        "stats": {
            "totalDonors": 120,
            "unitsInStock": 340,
            "pendingRequests": 4,
            "donationsThisMonth": 17,
            "criticalStock": 2
        }
    });
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/stats");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body.clone());
    });

    let (client, notifier) = client(&server);
    let data = client.dashboard_stats().await.unwrap();

    assert_eq!(data, body);
    mock.assert_hits(1);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_get_shortcuts_hit_expected_paths() {
    let server = MockServer::start();
    let paths = [
        "/api/donors/summary",
        "/api/inventory/stock",
        "/api/requests/pending",
        "/api/analytics/donor_distribution",
    ];
    let mocks: Vec<_> = paths
        .iter()
        .map(|path| {
            server.mock(|when, then| {
                when.method(GET).path(*path);
                then.status(200).json_body(json!({"path": path}));
            })
        })
        .collect();

    let (client, _) = client(&server);
    assert_eq!(client.donor_summary().await.unwrap()["path"], paths[0]);
    assert_eq!(client.inventory_stock().await.unwrap()["path"], paths[1]);
    assert_eq!(client.pending_requests().await.unwrap()["path"], paths[2]);
    assert_eq!(client.donor_distribution().await.unwrap()["path"], paths[3]);

    for mock in &mocks {
        mock.assert_hits(1);
    }
}

#[tokio::test]
async fn test_fulfill_request_renames_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/requests/fulfill")
            .header("content-type", "application/json")
            .json_body(json!({"request_id": 42, "units_supplied": 3}));
        then.status(200)
            .json_body(json!({"success": true, "message": "Request fulfilled"}));
    });

    let (client, _) = client(&server);
    let data = client.fulfill_request(42, 3).await.unwrap();

    assert_eq!(data["success"], true);
    mock.assert();
}

#[tokio::test]
async fn test_add_donor_passes_fields_through() {
    let server = MockServer::start();
    let donor = json!({
        "name": "Asha Rao",
        "blood": "O+",
        "phone": "9876543210",
        "location": "Pune",
        "extra": {"nested": [1, 2, 3]}
    });
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/donors").json_body(donor.clone());
        then.status(200).json_body(json!({"success": true, "donor_id": 7}));
    });

    let (client, _) = client(&server);
    let data = client.add_donor(&donor).await.unwrap();

    assert_eq!(data["donor_id"], 7);
    mock.assert();
}

#[tokio::test]
async fn test_record_donation_posts_json() {
    let server = MockServer::start();
    let donation = json!({"donor_id": 7, "units": 1, "donation_date": "2024-05-02"});
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/donations").json_body(donation.clone());
        then.status(201).json_body(json!({"success": true}));
    });

    let (client, _) = client(&server);
    client.record_donation(&donation).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn test_server_message_becomes_error_and_notification() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/requests/fulfill");
        then.status(400).json_body(json!({
            "success": false,
            "message": "Insufficient stock of O-. Available: 2 units."
        }));
    });

    let (client, notifier) = client(&server);
    let err = client.fulfill_request(9, 5).await.unwrap_err();

    assert!(matches!(err, ApiError::RequestFailed { status: 400, .. }));
    assert_eq!(err.to_string(), "Insufficient stock of O-. Available: 2 units.");
    assert_eq!(
        notifier.messages(),
        vec![(
            "Insufficient stock of O-. Available: 2 units.".to_string(),
            Severity::Error
        )]
    );
    mock.assert_hits(1);
}

#[tokio::test]
async fn test_missing_message_uses_fallback_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/inventory/stock");
        then.status(500).json_body(json!({"success": false}));
    });

    let (client, notifier) = client(&server);
    let err = client.inventory_stock().await.unwrap_err();

    assert_eq!(err.to_string(), "Request failed");
    assert_eq!(
        notifier.messages(),
        vec![("Request failed".to_string(), Severity::Error)]
    );
}

#[tokio::test]
async fn test_html_error_page_is_invalid_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/donors/summary");
        then.status(502)
            .header("Content-Type", "text/html")
            .body("<html><body>Bad Gateway</body></html>");
    });

    let (client, notifier) = client(&server);
    let err = client.donor_summary().await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidBody { status: 502, .. }));
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].1, Severity::Error);
    assert_eq!(messages[0].0, err.to_string());
}

#[tokio::test]
async fn test_success_with_non_json_body_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/analytics/donor_distribution");
        then.status(200).body("");
    });

    let (client, notifier) = client(&server);
    let err = client.donor_distribution().await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidBody { status: 200, .. }));
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // 先佔用一個埠再釋放，確保沒有服務在監聽
    let base_url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let notifier = Arc::new(RecordingNotifier::default());
    let client = ApiClient::new(&base_url, notifier.clone()).unwrap();
    let err = client.dashboard_stats().await.unwrap_err();

    assert!(matches!(err, ApiError::TransportError(_)));
    assert_eq!(notifier.messages().len(), 1);
    assert_eq!(notifier.messages()[0].1, Severity::Error);
}

#[tokio::test]
async fn test_failures_surface_as_toasts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/requests/pending");
        then.status(401)
            .json_body(json!({"success": false, "message": "Unauthorized"}));
    });

    let board = ToastBoard::default();
    let client = ApiClient::new(&server.base_url(), board.clone()).unwrap();
    assert!(client.pending_requests().await.is_err());

    let toasts = board.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Unauthorized");
    assert_eq!(toasts[0].severity, Severity::Error);
    assert!(toasts[0].class_name.contains("bg-red-500"));
}
