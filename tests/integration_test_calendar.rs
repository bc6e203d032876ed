mod common;

use axum::http::StatusCode;
use chrono::Weekday;
use common::{create_provider, monday_only_schedule, next_weekday, parse_body, request_appointment, TestApp};
use serde_json::Value;

fn slot_by_hour(slots: &[Value], hour: i64) -> Option<Value> {
    slots.iter().find(|s| s["hour"].as_i64() == Some(hour)).cloned()
}

#[tokio::test]
async fn test_enabled_day_shows_configured_window() {
    let app = TestApp::new().await;
    let provider_id = create_provider(&app, monday_only_schedule()).await;
    let monday = next_weekday(Weekday::Mon);

    let res = app.get(&format!("/api/v1/providers/{}/calendar?date={}", provider_id, monday)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    assert_eq!(slots.first().unwrap()["hour"].as_i64(), Some(9));
    assert_eq!(slots.last().unwrap()["hour"].as_i64(), Some(17));
    assert!(slots.iter().all(|s| s["is_blocked"] == false));
    assert_eq!(slots.first().unwrap()["display_label"].as_str(), Some("9 AM"));
    assert_eq!(slots.last().unwrap()["display_label"].as_str(), Some("5 PM"));
}

#[tokio::test]
async fn test_closed_day_is_fully_blocked_even_when_occupied() {
    let app = TestApp::new().await;
    let provider_id = create_provider(&app, monday_only_schedule()).await;
    let sunday = next_weekday(Weekday::Sun);

    // An out-of-hours booking on a closed day is accepted.
    let appointment = request_appointment(&app, &provider_id, sunday, "12:00").await;
    assert_eq!(appointment["status"].as_str(), Some("PENDING"));

    let res = app.get(&format!("/api/v1/providers/{}/calendar?date={}", provider_id, sunday)).await;
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    // Closed days fall back to the default 9 AM - 8 PM display window.
    assert_eq!(slots.first().unwrap()["hour"].as_i64(), Some(9));
    assert_eq!(slots.last().unwrap()["hour"].as_i64(), Some(20));
    assert!(slots.iter().all(|s| s["is_blocked"] == true), "every slot on a closed day is blocked");

    let noon = slot_by_hour(slots, 12).unwrap();
    assert!(!noon["appointment"].is_null(), "the booking is still visible");
    assert_eq!(noon["is_blocked"], true);
}

#[tokio::test]
async fn test_same_hour_on_enabled_day_is_open() {
    let app = TestApp::new().await;
    let provider_id = create_provider(&app, monday_only_schedule()).await;
    let monday = next_weekday(Weekday::Mon);

    request_appointment(&app, &provider_id, monday, "12:00").await;

    let res = app.get(&format!("/api/v1/providers/{}/calendar?date={}", provider_id, monday)).await;
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    let noon = slot_by_hour(slots, 12).unwrap();
    assert_eq!(noon["is_blocked"], false);
    assert_eq!(noon["is_within_working_hours"], true);
    assert!(!noon["appointment"].is_null());
}

#[tokio::test]
async fn test_window_expands_around_out_of_hours_bookings() {
    let app = TestApp::new().await;
    let provider_id = create_provider(&app, monday_only_schedule()).await;
    let monday = next_weekday(Weekday::Mon);

    request_appointment(&app, &provider_id, monday, "07:00").await;
    request_appointment(&app, &provider_id, monday, "22:00").await;

    let res = app.get(&format!("/api/v1/providers/{}/calendar?date={}", provider_id, monday)).await;
    let body = parse_body(res).await;
    let slots = body["slots"].as_array().unwrap();

    let hours: Vec<i64> = slots.iter().filter_map(|s| s["hour"].as_i64()).collect();
    assert!(hours.contains(&7), "grid expands down to the 7 AM booking");
    assert!(hours.contains(&22), "grid expands up to the 10 PM booking");

    let early = slot_by_hour(slots, 7).unwrap();
    assert_eq!(early["is_blocked"], true);
    assert!(!early["appointment"].is_null());

    let late = slot_by_hour(slots, 22).unwrap();
    assert_eq!(late["is_blocked"], true);
    assert!(!late["appointment"].is_null());
}

#[tokio::test]
async fn test_calendar_requires_valid_date() {
    let app = TestApp::new().await;
    let provider_id = create_provider(&app, monday_only_schedule()).await;

    let res = app.get(&format!("/api/v1/providers/{}/calendar", provider_id)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.get(&format!("/api/v1/providers/{}/calendar?date=not-a-date", provider_id)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar_unknown_provider_is_404() {
    let app = TestApp::new().await;

    let res = app.get("/api/v1/providers/nope/calendar?date=2030-01-07").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
