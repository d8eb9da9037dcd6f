//! HTTP-level integration tests for the student directory, class
//! administration, and roster management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, enroll, get, post, post_json, put_json, seed_class, seed_student};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_student(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/students",
        serde_json::json!({
            "external_id": "STU-001",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.edu",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(json["data"]["external_id"], "STU-001");
    assert_eq!(json["data"]["photo_url"], serde_json::Value::Null);

    let fetched = get(app.clone(), &format!("/api/v1/students/{id}")).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await["data"]["first_name"], "Ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_external_id_is_a_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_student(&app, "STU-001").await;

    let response = post_json(
        app.clone(),
        "/api/v1/students",
        serde_json::json!({
            "external_id": "STU-001",
            "first_name": "Someone",
            "last_name": "Else",
            "email": "else@example.edu",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_student_fields_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let blank_external = post_json(
        app.clone(),
        "/api/v1/students",
        serde_json::json!({
            "external_id": "  ",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.edu",
        }),
    )
    .await;
    assert_eq!(blank_external.status(), StatusCode::BAD_REQUEST);

    let blank_name = post_json(
        app.clone(),
        "/api/v1/students",
        serde_json::json!({
            "external_id": "STU-001",
            "first_name": "",
            "last_name": "Lovelace",
            "email": "ada@example.edu",
        }),
    )
    .await;
    assert_eq!(blank_name.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_student_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(
        app.clone(),
        "/api/v1/students/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn class_crud_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = post_json(
        app.clone(),
        "/api/v1/classes",
        serde_json::json!({ "name": "Algorithms", "code": "CS-301" }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = body_json(created).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let listed = get(app.clone(), "/api/v1/classes").await;
    assert_eq!(body_json(listed).await["data"].as_array().unwrap().len(), 1);

    let updated = put_json(
        app.clone(),
        &format!("/api/v1/classes/{id}"),
        serde_json::json!({ "name": "Advanced Algorithms" }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let json = body_json(updated).await;
    assert_eq!(json["data"]["name"], "Advanced Algorithms");
    assert_eq!(json["data"]["code"], "CS-301");

    let deleted = delete(app.clone(), &format!("/api/v1/classes/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = get(app.clone(), &format!("/api/v1/classes/{id}")).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_class_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/classes",
        serde_json::json!({ "name": " ", "code": "CS-301" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn enroll_and_list_roster(pool: PgPool) {
    let app = common::build_test_app(pool);
    let class_id = seed_class(&app, "C1").await;
    seed_student(&app, "S1").await;
    seed_student(&app, "S2").await;
    enroll(&app, &class_id, "S2").await;
    enroll(&app, &class_id, "S1").await;

    let roster = get(app.clone(), &format!("/api/v1/classes/{class_id}/roster")).await;
    assert_eq!(roster.status(), StatusCode::OK);
    let json = body_json(roster).await;
    let students = json["data"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    // Ordered by name, not by insertion.
    assert_eq!(students[0]["external_id"], "S1");
    assert_eq!(students[1]["external_id"], "S2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reenrolling_is_a_no_op(pool: PgPool) {
    let app = common::build_test_app(pool);
    let class_id = seed_class(&app, "C1").await;
    seed_student(&app, "S1").await;

    for _ in 0..2 {
        let response = post(
            app.clone(),
            &format!("/api/v1/classes/{class_id}/roster/S1"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let roster = get(app.clone(), &format!("/api/v1/classes/{class_id}/roster")).await;
    assert_eq!(body_json(roster).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unenroll_removes_only_the_named_pair(pool: PgPool) {
    let app = common::build_test_app(pool);
    let class_a = seed_class(&app, "C1").await;
    let class_b = seed_class(&app, "C2").await;
    seed_student(&app, "S1").await;
    enroll(&app, &class_a, "S1").await;
    enroll(&app, &class_b, "S1").await;

    let response = delete(
        app.clone(),
        &format!("/api/v1/classes/{class_a}/roster/S1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let roster_a = get(app.clone(), &format!("/api/v1/classes/{class_a}/roster")).await;
    assert_eq!(body_json(roster_a).await["data"].as_array().unwrap().len(), 0);
    let roster_b = get(app.clone(), &format!("/api/v1/classes/{class_b}/roster")).await;
    assert_eq!(body_json(roster_b).await["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn roster_operations_require_both_sides_to_exist(pool: PgPool) {
    let app = common::build_test_app(pool);
    let class_id = seed_class(&app, "C1").await;
    seed_student(&app, "S1").await;

    let unknown_student = post(
        app.clone(),
        &format!("/api/v1/classes/{class_id}/roster/GHOST"),
    )
    .await;
    assert_eq!(unknown_student.status(), StatusCode::NOT_FOUND);

    let unknown_class = post(
        app.clone(),
        "/api/v1/classes/00000000-0000-0000-0000-000000000000/roster/S1",
    )
    .await;
    assert_eq!(unknown_class.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_class_cascades_its_roster(pool: PgPool) {
    let app = common::build_test_app(pool);
    let class_id = seed_class(&app, "C1").await;
    let student_id = seed_student(&app, "S1").await;
    enroll(&app, &class_id, "S1").await;

    let deleted = delete(app.clone(), &format!("/api/v1/classes/{class_id}")).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    // The student survives; only the enrollment edge is gone.
    let student = get(app.clone(), &format!("/api/v1/students/{student_id}")).await;
    assert_eq!(student.status(), StatusCode::OK);
}
