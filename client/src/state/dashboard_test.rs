use campus_api::Method;
use campus_api::testing::RecordingTransport;
use futures::executor::block_on;
use serde_json::json;

use super::*;

fn api() -> AdminApi<RecordingTransport> {
    AdminApi::new(RecordingTransport::new())
}

#[test]
fn counts_only_active_clubs() {
    let api = api();
    api.transport().respond_json(
        Method::Get,
        "/clubs/",
        200,
        &json!([
            {"id": 1, "name": "Chess", "is_active": true},
            {"id": 2, "name": "Drama", "is_active": false},
            {"id": 3, "name": "Music", "is_active": true}
        ]),
    );
    api.transport().respond_json(Method::Get, "/staff/", 200, &json!({"results": [{"id": 1, "staff_id": "S1", "name": "N", "email": "e"}]}));

    let mut state = DashboardState::default();
    state.begin_load();
    state.apply_load(block_on(load(&api)));

    let values: Vec<_> = state.tiles.iter().map(|t| (t.label, t.value())).collect();
    assert_eq!(
        values,
        vec![
            ("Total Staff", "1".to_owned()),
            ("Total Students", "0".to_owned()),
            ("Active Clubs", "2".to_owned()),
            ("Clusters", "0".to_owned()),
        ]
    );
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failed_list_shows_dash_and_banner() {
    let api = api();
    api.transport().fail(Method::Get, "/students/", "offline");

    let mut state = DashboardState::default();
    state.begin_load();
    state.apply_load(block_on(load(&api)));

    assert_eq!(state.tiles[1].value(), "—");
    assert_eq!(state.tiles[0].value(), "0");
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
    assert!(!state.loading);
}

#[test]
fn loads_all_four_lists() {
    let api = api();
    block_on(load(&api));
    let mut calls = api.transport().call_lines();
    calls.sort();
    assert_eq!(calls, vec!["GET /clubs/", "GET /clusters/", "GET /staff/", "GET /students/"]);
}
