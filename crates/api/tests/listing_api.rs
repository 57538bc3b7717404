//! HTTP-level integration tests for listing CRUD, the availability toggle,
//! archival, plan ceilings, and photo attachment.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_listing, delete_auth, get_auth, listing_payload, patch_json_auth,
    post_auth, post_json_auth, put_json_auth, register_seller,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_listing_returns_201_with_defaults(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;

    let item = create_listing(
        &pool,
        &token,
        listing_payload("Neon Tetra", "freshwater_fish", 12),
    )
    .await;

    assert_eq!(item["common_name"], "Neon Tetra");
    assert_eq!(item["is_active"], true);
    assert_eq!(item["is_archived"], false);
    assert_eq!(item["sort_order"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_appends_sort_order(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;

    create_listing(&pool, &token, listing_payload("A", "other", 1)).await;
    let second = create_listing(&pool, &token, listing_payload("B", "other", 1)).await;
    assert_eq!(second["sort_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_normalizes_the_quantity_branch(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;

    // A stale qualitative label alongside an exact count is cleared.
    let item = create_listing(
        &pool,
        &token,
        serde_json::json!({
            "category": "coral_frags",
            "common_name": "Hammer Coral",
            "quantity_type": "exact",
            "quantity_exact": 3,
            "quantity_label": "sold_out",
        }),
    )
    .await;

    assert_eq!(item["quantity_type"], "exact");
    assert_eq!(item["quantity_exact"], 3);
    assert!(item["quantity_label"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_invalid_payloads(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;

    // Unknown category.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/listings",
        &token,
        listing_payload("Raptor", "dinosaurs", 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Quantity branch named but its field missing.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/listings",
        &token,
        serde_json::json!({
            "category": "other",
            "common_name": "Snail",
            "quantity_type": "qualitative",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Negative exact count.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/listings",
        &token,
        listing_payload("Snail", "other", -1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Ownership scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_items_read_as_absent(pool: PgPool) {
    let (owner_token, _) = register_seller(&pool, "owner@example.com", "Owner Shop").await;
    let (other_token, _) = register_seller(&pool, "other@example.com", "Other Shop").await;

    let item = create_listing(&pool, &owner_token, listing_payload("Guppy", "freshwater_fish", 5))
        .await;
    let id = item["id"].as_str().unwrap();

    // The other seller sees a 404, not a 403.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/listings/{id}"), &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = post_auth(app, &format!("/api/v1/listings/{id}/toggle"), &other_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_switches_quantity_branch_and_clears_the_other(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let item = create_listing(&pool, &token, listing_payload("Guppy", "freshwater_fish", 5)).await;
    let id = item["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/listings/{id}"),
        &token,
        serde_json::json!({
            "quantity_type": "qualitative",
            "quantity_label": "limited",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["quantity_type"], "qualitative");
    assert_eq!(json["quantity_label"], "limited");
    assert!(json["quantity_exact"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_rejects_contradictory_merge(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let item = create_listing(&pool, &token, listing_payload("Guppy", "freshwater_fish", 5)).await;
    let id = item["id"].as_str().unwrap();

    // Switching to qualitative without supplying a label: the stored row has
    // none, so the merged triple fails validation.
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/listings/{id}"),
        &token,
        serde_json::json!({"quantity_type": "qualitative"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_null_clears_nullable_fields(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/shipments",
        &token,
        serde_json::json!({
            "label": "Tuesday order",
            "arrival_date": chrono::Utc::now().to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let shipment = body_json(response).await;

    let item = create_listing(
        &pool,
        &token,
        serde_json::json!({
            "category": "freshwater_fish",
            "common_name": "Guppy",
            "quantity_type": "exact",
            "quantity_exact": 5,
            "price_low": 4.0,
            "price_high": 6.0,
            "notes": "assorted colors",
            "shipment_id": shipment["id"],
        }),
    )
    .await;
    let id = item["id"].as_str().unwrap();

    // Explicit nulls clear the prices and detach the shipment; the absent
    // notes key keeps its value.
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/listings/{id}"),
        &token,
        serde_json::json!({
            "price_low": null,
            "price_high": null,
            "shipment_id": null,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["price_low"].is_null());
    assert!(json["price_high"].is_null());
    assert!(json["shipment_id"].is_null());
    assert_eq!(json["notes"], "assorted colors");

    // Cleared prices render as "Contact for price" again.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/listings", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["items"][0]["price_display"], "Contact for price");
}

// ---------------------------------------------------------------------------
// Toggle and archive lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_toggle_is_an_involution_for_regular_items(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let item = create_listing(&pool, &token, listing_payload("Guppy", "freshwater_fish", 5)).await;
    let id = item["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/listings/{id}/toggle"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["is_active"], false);
    assert_eq!(json["is_archived"], false);

    let app = common::build_test_app(pool);
    let response = post_auth(app, &format!("/api/v1/listings/{id}/toggle"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wysiwyg_toggle_archives_instead_of_pausing(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let item = create_listing(
        &pool,
        &token,
        serde_json::json!({
            "category": "coral_frags",
            "common_name": "Torch Coral",
            "quantity_type": "exact",
            "quantity_exact": 1,
            "is_wysiwyg": true,
        }),
    )
    .await;
    let id = item["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/listings/{id}/toggle"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["is_archived"], true);

    // Archival is terminal: no further toggles or edits.
    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/listings/{id}/toggle"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/api/v1/listings/{id}"),
        &token,
        serde_json::json!({"common_name": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_archived_items_leave_the_dashboard(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let keep = create_listing(&pool, &token, listing_payload("Keeper", "other", 1)).await;
    let gone = create_listing(&pool, &token, listing_payload("Goner", "other", 1)).await;

    let app = common::build_test_app(pool.clone());
    let id = gone["id"].as_str().unwrap();
    let response = post_auth(app, &format!("/api/v1/listings/{id}/archive"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/listings", &token).await;
    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], keep["id"]);
    assert_eq!(json["stats"]["total"], 1);
}

// ---------------------------------------------------------------------------
// Plan ceilings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_free_tier_item_ceiling_and_archive_frees_a_slot(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;

    let mut last_id = String::new();
    for i in 0..25 {
        let item = create_listing(&pool, &token, listing_payload(&format!("Fish {i}"), "other", 1))
            .await;
        last_id = item["id"].as_str().unwrap().to_string();
    }

    // The 26th create hits the ceiling before any write.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/listings",
        &token,
        listing_payload("One Too Many", "other", 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "LIMIT_EXCEEDED");

    // Archiving an item frees a slot.
    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, &format!("/api/v1/listings/{last_id}/archive"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    create_listing(&pool, &token, listing_payload("Fits Again", "other", 1)).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_photo_ceiling_follows_the_plan_tier(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let item = create_listing(&pool, &token, listing_payload("Pleco", "freshwater_fish", 2)).await;
    let id = item["id"].as_str().unwrap();

    // Free tier: one photo.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/listings/{id}/photos"),
        &token,
        serde_json::json!({"photo_url": "https://cdn.example.com/pleco-1.jpg"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let photo = body_json(response).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/listings/{id}/photos"),
        &token,
        serde_json::json!({"photo_url": "https://cdn.example.com/pleco-2.jpg"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Upgrading to pro raises the ceiling to three.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/seller/profile",
        &token,
        serde_json::json!({"plan_tier": "pro"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/listings/{id}/photos"),
        &token,
        serde_json::json!({"photo_url": "https://cdn.example.com/pleco-2.jpg"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Removal tolerates gaps and frees a slot.
    let photo_id = photo["id"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/listings/{id}/photos/{photo_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_photo_delete_is_scoped_to_the_addressed_listing(pool: PgPool) {
    let (token, _) = register_seller(&pool, "s@example.com", "Fish Stop").await;
    let first = create_listing(&pool, &token, listing_payload("Guppy", "freshwater_fish", 5)).await;
    let second = create_listing(&pool, &token, listing_payload("Molly", "freshwater_fish", 5)).await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/listings/{second_id}/photos"),
        &token,
        serde_json::json!({"photo_url": "https://cdn.example.com/molly.jpg"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let photo = body_json(response).await;
    let photo_id = photo["id"].as_str().unwrap();

    // The photo is not reachable through another listing's URL.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/listings/{first_id}/photos/{photo_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/listings/{second_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["photos"].as_array().unwrap().len(), 1);

    // Through the owning listing it deletes normally.
    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/listings/{second_id}/photos/{photo_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
