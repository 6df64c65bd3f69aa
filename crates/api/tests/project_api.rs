//! Integration tests for the `/api/v1/projects` resource over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: create returns 201 and the row resolves via get-by-id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/projects",
        json!({
            "name": "Side Project",
            "description": "Weekend hacking",
            "background_color": "#00aaff"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["name"], "Side Project");
    assert!(created["created_at"].is_string());
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Side Project");
    assert_eq!(fetched["description"], "Weekend hacking");
    assert_eq!(fetched["background_color"], "#00aaff");
    assert_eq!(fetched["status_id"], 1); // Active default
}

// ---------------------------------------------------------------------------
// Test: get-by-id of a missing project is a 404 problem response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_project_returns_problem_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/projects/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Project with id 9999 not found");
    assert_eq!(json["values"], serde_json::json!(["Project", 9999]));
}

// ---------------------------------------------------------------------------
// Test: malformed create body is a 400 problem response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_name_returns_problem_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/projects", json!({ "description": "no name" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(
        json["message"].as_str().unwrap().contains("name"),
        "message should name the missing field, got {}",
        json["message"]
    );
    assert!(json["values"].is_array());
}

// ---------------------------------------------------------------------------
// Test: a non-numeric pagination parameter is a 400 problem response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_page_returns_problem_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/projects?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].is_string());
    assert!(json["values"].is_array());
}

// ---------------------------------------------------------------------------
// Test: update applies changes and refreshes updated_at
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_project_applies_partial_changes(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/projects",
            json!({ "name": "Old Name", "description": "keep me" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/projects/{id}"),
        json!({ "name": "New Name", "status_id": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "New Name");
    assert_eq!(updated["status_id"], 3); // OnHold
    assert_eq!(updated["description"], "keep me");
}

// ---------------------------------------------------------------------------
// Test: delete returns 204, then get-by-id is 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_get_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json(app.clone(), "/api/v1/projects", json!({ "name": "Ephemeral" })).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: deleting a missing project is a 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, "/api/v1/projects/31337").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: page 2 of size 10 over 25 projects yields rows 11-20 in stored order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_page_two_returns_rows_eleven_to_twenty(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 1..=25 {
        let response = post_json(
            app.clone(),
            "/api/v1/projects",
            json!({ "name": format!("Project {i:02}") }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/projects?page=2&page_size=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["name"], "Project 11");
    assert_eq!(items[9]["name"], "Project 20");
}

// ---------------------------------------------------------------------------
// Test: stats endpoint partitions project counts by status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_stats_counts_by_status(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Active x3, Completed x2, OnHold x1.
    for status_id in [1, 1, 1, 2, 2, 3] {
        let response = post_json(
            app.clone(),
            "/api/v1/projects",
            json!({ "name": "Stats", "status_id": status_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/projects/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 6);
    assert_eq!(json["data"]["active"], 3);
    assert_eq!(json["data"]["completed"], 2);
    assert_eq!(json["data"]["on_hold"], 1);
}
