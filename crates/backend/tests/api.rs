//! Drives the router end to end against a temporary SQLite file

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backend::shared::config::Config;
use backend::shared::data::db::initialize_database;
use backend::shared::state::AppState;
use contracts::domain::a001_asset::aggregate::Asset;
use contracts::shared::format::format_bdt;
use contracts::shared::list::ListEnvelope;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_router() -> Router {
    let path = std::env::temp_dir().join(format!("travel-erp-{}.db", uuid::Uuid::new_v4()));
    let config = Config::with_database_path(path.to_string_lossy()).unwrap();
    let db = initialize_database(&path).await.unwrap();
    backend::routes::app(AppState::new(db, config))
}

async fn json_request(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    let body = match body {
        Some(json_body) => Body::from(serde_json::to_vec(&json_body).unwrap()),
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

fn laptop() -> Value {
    json!({
        "name": "Laptop",
        "type": "IT Equipment",
        "totalPaidAmount": 50000,
        "paymentDate": "2025-01-10",
        "status": "active"
    })
}

#[tokio::test]
async fn health_answers_ok() {
    let router = test_router().await;
    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn created_asset_shows_up_in_the_list() {
    let router = test_router().await;

    let (status, created) = json_request(&router, "POST", "/api/assets", Some(laptop())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Laptop");
    assert_eq!(created["type"], "IT Equipment");
    assert_eq!(created["paymentDate"], "2025-01-10");
    assert!(created["createdAt"].is_string());

    let (status, list) = json_request(&router, "GET", "/api/assets?page=1&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let page = ListEnvelope::<Asset>::from_value(list, "assets").unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(format_bdt(page.data[0].total_paid_amount), "৳৫০,০০০");
}

#[tokio::test]
async fn missing_required_fields_are_rejected_per_field() {
    let router = test_router().await;
    let (status, body) = json_request(
        &router,
        "POST",
        "/api/assets",
        Some(json!({ "name": "", "totalPaidAmount": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
    assert!(body["fields"]["name"].is_string());
    assert!(body["fields"]["paymentDate"].is_string());

    let (_, list) = json_request(&router, "GET", "/api/assets", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let router = test_router().await;
    let (status, body) = json_request(
        &router,
        "POST",
        "/api/vendors",
        Some(json!({ "name": "Sky Travels", "phone": "01711000000", "email": "sky-at-mail" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["email"].is_string());

    let (status, _) = json_request(
        &router,
        "POST",
        "/api/vendors",
        Some(json!({ "name": "Sky Travels", "phone": "01711000000", "email": "info@sky.com.bd" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn same_page_twice_returns_the_same_rows() {
    let router = test_router().await;
    for i in 0..5 {
        let body = json!({ "name": format!("Agent {i}"), "phone": format!("0170000000{i}") });
        let (status, _) = json_request(&router, "POST", "/api/air-agents", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let uri = "/api/air-agents?page=2&limit=2";
    let (_, first) = json_request(&router, "GET", uri, None).await;
    let (_, second) = json_request(&router, "GET", uri, None).await;
    assert_eq!(first, second);
    assert_eq!(first["data"].as_array().unwrap().len(), 2);
    assert_eq!(first["pagination"]["total"], 5);
    assert_eq!(first["pagination"]["totalPages"], 3);

    let (_, last) = json_request(&router, "GET", "/api/air-agents?page=3&limit=2", None).await;
    assert_eq!(last["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleted_record_disappears_from_the_next_page() {
    let router = test_router().await;
    let (_, created) = json_request(&router, "POST", "/api/assets", Some(laptop())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = json_request(&router, "DELETE", &format!("/api/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = json_request(&router, "GET", "/api/assets", None).await;
    assert_eq!(list["data"], json!([]));

    let (status, body) = json_request(&router, "GET", &format!("/api/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = json_request(&router, "DELETE", &format!("/api/assets/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn refund_amount_is_computed_by_the_server() {
    let router = test_router().await;
    let (status, refund) = json_request(
        &router,
        "POST",
        "/api/air-ticketing/refund",
        Some(json!({
            "passengerName": "Md. Hasan",
            "pnr": "ab12cd",
            "actualFare": 50000,
            "usedAmount": 10000,
            "serviceCharge": 1500,
            "penalty": 3000,
            "refundAmount": 999999
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(refund["refundAmount"], 35500.0);
    assert_eq!(refund["pnr"], "AB12CD");
}

#[tokio::test]
async fn hotel_contract_totals_follow_dates_and_rates() {
    let router = test_router().await;
    let (status, contract) = json_request(
        &router,
        "POST",
        "/api/hotel-contracts",
        Some(json!({
            "hotelName": "Dar Al Eiman",
            "city": "makkah",
            "checkIn": "2025-05-01",
            "checkOut": "2025-05-06",
            "rooms": 2,
            "ratePerNightSar": 450,
            "sarRate": 32.5,
            "paidAmount": 100000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(contract["nights"], 5);
    assert_eq!(contract["totalSar"], 4500.0);
    assert_eq!(contract["totalBdt"], 146250.0);
    assert_eq!(contract["dueAmount"], 46250.0);

    let (status, body) = json_request(
        &router,
        "POST",
        "/api/hotel-contracts",
        Some(json!({
            "hotelName": "Dar Al Eiman",
            "checkIn": "2025-05-06",
            "checkOut": "2025-05-01",
            "rooms": 1,
            "ratePerNightSar": 450,
            "sarRate": 32.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["checkOut"].is_string());
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_created_at() {
    let router = test_router().await;
    let (_, created) = json_request(&router, "POST", "/api/assets", Some(laptop())).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut changed = laptop();
    changed["name"] = json!("Laptop Pro");
    changed["status"] = json!("disposed");
    let (status, updated) =
        json_request(&router, "PUT", &format!("/api/assets/{id}"), Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Laptop Pro");
    assert_eq!(updated["status"], "disposed");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (_, fetched) = json_request(&router, "GET", &format!("/api/assets/{id}"), None).await;
    assert_eq!(fetched["name"], "Laptop Pro");

    let (status, _) = json_request(&router, "PUT", "/api/assets/missing", Some(laptop())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn filters_narrow_the_list() {
    let router = test_router().await;
    let customers = [
        json!({ "name": "Abdur Rahim", "phone": "01811223344", "customerType": "hajj" }),
        json!({ "name": "Karim Uddin", "phone": "01911223344", "customerType": "umrah" }),
        json!({ "name": "Rahima Begum", "phone": "01611223344", "customerType": "umrah" }),
    ];
    for customer in customers {
        let (status, _) =
            json_request(&router, "POST", "/api/hajj-umrah/customers", Some(customer)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, umrah) = json_request(&router, "GET", "/api/hajj-umrah/customers?type=umrah", None).await;
    assert_eq!(umrah["pagination"]["total"], 2);

    let (_, rahim) = json_request(&router, "GET", "/api/hajj-umrah/customers?q=Rahim", None).await;
    assert_eq!(rahim["pagination"]["total"], 2);

    let (_, both) = json_request(
        &router,
        "GET",
        "/api/hajj-umrah/customers?search=Rahim&type=hajj",
        None,
    )
    .await;
    assert_eq!(both["pagination"]["total"], 1);
    assert_eq!(both["data"][0]["name"], "Abdur Rahim");
}

#[tokio::test]
async fn gds_records_filter_by_year_and_provider() {
    let router = test_router().await;
    let records = [
        json!({ "provider": "sabre", "year": 2024, "month": 3, "segments": 120, "incentivePerSegment": 2.5 }),
        json!({ "provider": "amadeus", "year": 2024, "month": 4, "segments": 80, "incentivePerSegment": 3 }),
        json!({ "provider": "sabre", "year": 2025, "month": 1, "segments": 10, "incentivePerSegment": 2 }),
    ];
    for record in records {
        let (status, _) = json_request(&router, "POST", "/api/gds-records", Some(record)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, list) = json_request(&router, "GET", "/api/gds-records?year=2024&provider=sabre", None).await;
    assert_eq!(list["pagination"]["total"], 1);
    assert_eq!(list["data"][0]["incentiveAmount"], 300.0);
}

#[tokio::test]
async fn search_spans_several_collections() {
    let router = test_router().await;
    json_request(
        &router,
        "POST",
        "/api/hajj-umrah/customers",
        Some(json!({ "name": "Rahim Ali", "phone": "01811223344" })),
    )
    .await;
    json_request(
        &router,
        "POST",
        "/api/air-agents",
        Some(json!({ "name": "Rahim Travels", "phone": "01700000000" })),
    )
    .await;
    json_request(
        &router,
        "POST",
        "/api/vendors",
        Some(json!({ "name": "Biman", "phone": "01500000000" })),
    )
    .await;

    let (status, body) = json_request(&router, "GET", "/api/search?q=rahim", None).await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["entity"], "customers");
    assert!(results[0]["route"]
        .as_str()
        .unwrap()
        .starts_with("/hajj-umrah/customers/"));
    assert_eq!(results[1]["entity"], "agents");

    let (_, short) = json_request(&router, "GET", "/api/search?q=r", None).await;
    assert_eq!(short["results"], json!([]));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let router = test_router().await;
    let request = Request::post("/api/assets")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn huge_page_numbers_return_an_empty_page() {
    let router = test_router().await;
    json_request(&router, "POST", "/api/assets", Some(laptop())).await;

    for uri in [
        "/api/assets?page=18446744073709551615",
        "/api/assets?page=100000000000000000&limit=100",
    ] {
        let (status, list) = json_request(&router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(list["data"], json!([]), "{uri}");
        assert_eq!(list["pagination"]["total"], 1, "{uri}");
    }
}

#[tokio::test]
async fn gds_record_needs_year_and_month() {
    let router = test_router().await;
    let (status, body) = json_request(
        &router,
        "POST",
        "/api/gds-records",
        Some(json!({ "provider": "sabre", "segments": 10, "incentivePerSegment": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["year"].is_string());
    assert!(body["fields"]["month"].is_string());

    let (_, list) = json_request(&router, "GET", "/api/gds-records", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}

#[tokio::test]
async fn hotel_room_count_is_bounded() {
    let router = test_router().await;
    let (status, body) = json_request(
        &router,
        "POST",
        "/api/hotel-contracts",
        Some(json!({
            "hotelName": "Dar Al Eiman",
            "checkIn": "2025-05-01",
            "checkOut": "2025-05-02",
            "rooms": 3000000000u64,
            "ratePerNightSar": 1,
            "sarRate": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["rooms"].is_string());

    let (_, list) = json_request(&router, "GET", "/api/hotel-contracts", None).await;
    assert_eq!(list["pagination"]["total"], 0);
}

#[tokio::test]
async fn like_wildcards_in_queries_match_literally() {
    let router = test_router().await;
    json_request(&router, "POST", "/api/assets", Some(laptop())).await;
    json_request(
        &router,
        "POST",
        "/api/hajj-umrah/customers",
        Some(json!({ "name": "Rahim Ali", "phone": "01811223344" })),
    )
    .await;

    let (status, list) = json_request(&router, "GET", "/api/assets?q=%25%25", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["pagination"]["total"], 0);

    let (_, body) = json_request(&router, "GET", "/api/search?q=__", None).await;
    assert_eq!(body["results"], json!([]));

    let (_, list) = json_request(&router, "GET", "/api/assets?q=apto", None).await;
    assert_eq!(list["pagination"]["total"], 1);
}

#[tokio::test]
async fn employees_are_served_from_users() {
    let router = test_router().await;
    let (status, body) = json_request(
        &router,
        "POST",
        "/api/users",
        Some(json!({ "name": "Karim Uddin", "phone": "01912345678", "email": "karim@" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["email"].is_string());

    let (status, created) = json_request(
        &router,
        "POST",
        "/api/users",
        Some(json!({
            "name": "Karim Uddin",
            "phone": "01912345678",
            "designation": "Ticketing Officer",
            "department": "air",
            "salary": 35000,
            "status": "active"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = json_request(&router, "GET", "/api/users?type=air", None).await;
    assert_eq!(list["pagination"]["total"], 1);
    assert_eq!(list["data"][0]["id"], created["id"]);
    assert_eq!(list["data"][0]["salary"], 35000.0);
}
