//! HTTP-level integration tests for the comments API.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, post_json_auth, project_payload, put_json_auth, report_payload,
};
use sqlx::PgPool;

/// Seed a project and one report on it, returning (project_id, report_id).
async fn seed_report(pool: &PgPool, admin_token: &str, user_id: i64) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    let project = body_json(
        post_json_auth(
            app,
            "/api/projects",
            project_payload("Commented"),
            Some(admin_token),
        )
        .await,
    )
    .await;
    let project_id = project["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let report = body_json(
        post_json_auth(
            app,
            "/api/reports",
            report_payload(project_id, user_id, "Host report"),
            Some(admin_token),
        )
        .await,
    )
    .await;
    (project_id, report["data"]["id"].as_i64().unwrap())
}

fn comment_payload(report_id: i64, user_id: i64, body: &str) -> serde_json::Value {
    serde_json::json!({
        "body": body,
        "report": report_id,
        "user": user_id
    })
}

// ---------------------------------------------------------------------------
// Creation and visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_visible_immediately(pool: PgPool) {
    let (admin_id, admin_token) = common::seed_admin(&pool).await;
    let (project_id, report_id) = seed_report(&pool, &admin_token, admin_id).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/comments",
        comment_payload(report_id, admin_id, "First"),
        Some(&admin_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // No approval gate: both scoped listings carry it right away, even
    // though the host report is still pending.
    let app = common::build_test_app(pool.clone());
    let by_report = body_json(get(app, &format!("/api/comments/report/{report_id}")).await).await;
    assert_eq!(by_report["data"].as_array().unwrap().len(), 1);
    assert_eq!(by_report["data"][0]["body"], "First");

    let app = common::build_test_app(pool);
    let by_project =
        body_json(get(app, &format!("/api/comments/project/{project_id}")).await).await;
    assert_eq!(by_project["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_comment_rejects_dangling_report(pool: PgPool) {
    let (user_id, token) = common::seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/comments",
        comment_payload(999_999, user_id, "Nowhere"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_comment_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(app, "/api/comments", comment_payload(1, 1, "x")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_comment(pool: PgPool) {
    let (admin_id, admin_token) = common::seed_admin(&pool).await;
    let (_, report_id) = seed_report(&pool, &admin_token, admin_id).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json_auth(
            app,
            "/api/comments",
            comment_payload(report_id, admin_id, "Draft"),
            Some(&admin_token),
        )
        .await,
    )
    .await;
    let comment_id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let updated = put_json_auth(
        app,
        &format!("/api/comments/{comment_id}"),
        serde_json::json!({"body": "Final"}),
        Some(&admin_token),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(body_json(updated).await["data"]["body"], "Final");

    let app = common::build_test_app(pool.clone());
    let deleted = delete_auth(
        app,
        &format!("/api/comments/{comment_id}"),
        Some(&admin_token),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let gone = delete_auth(
        app,
        &format!("/api/comments/{comment_id}"),
        Some(&admin_token),
    )
    .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Per-user wipe
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_all_for_user_requires_admin(pool: PgPool) {
    let (user_id, user_token) = common::seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/comments/user/{user_id}"),
        Some(&user_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_all_for_user_counts_rows(pool: PgPool) {
    let (admin_id, admin_token) = common::seed_admin(&pool).await;
    let (user_id, user_token) = common::seed_user(&pool).await;
    let (_, report_id) = seed_report(&pool, &admin_token, admin_id).await;

    for body in ["a", "b", "c"] {
        let app = common::build_test_app(pool.clone());
        post_json_auth(
            app,
            "/api/comments",
            comment_payload(report_id, user_id, body),
            Some(&user_token),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/comments/user/{user_id}"),
        Some(&admin_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], 3);
}
