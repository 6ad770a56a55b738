//! Integration tests for the shared influencer procedures.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;

#[tokio::test]
async fn test_created_influencer_is_listed_first() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let name = helpers::unique_name("newest");
    let id = app.create_influencer(&token, &name, 42_000, "3.75").await;

    let response = app.query("influencer.list", "", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    let listed = response.data().as_array().expect("array");
    let position = listed
        .iter()
        .position(|i| i["id"].as_i64() == Some(id))
        .expect("created influencer listed");
    let entry = &listed[position];
    assert_eq!(entry["name"], name.as_str());
    assert_eq!(entry["follower_count"], 42_000);

    // Anything listed before it must be at least as new.
    let created_at = timestamp(entry);
    for earlier in &listed[..position] {
        assert!(timestamp(earlier) >= created_at);
    }
}

fn timestamp(entry: &serde_json::Value) -> DateTime<Utc> {
    entry["created_at"]
        .as_str()
        .expect("timestamp")
        .parse()
        .expect("RFC 3339 timestamp")
}

#[tokio::test]
async fn test_influencers_are_shared_between_users() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, alice) = app.new_user();
    let (_, bob) = app.new_user();
    let id = app
        .create_influencer(&alice, &helpers::unique_name("shared"), 10, "1.00")
        .await;

    let response = app.query("influencer.list", "", Some(&bob)).await;
    let seen = response
        .data()
        .as_array()
        .expect("array")
        .iter()
        .any(|i| i["id"].as_i64() == Some(id));
    assert!(seen);

    // Bob can assign Alice's influencer to his own campaign.
    let campaign = app.create_campaign(&bob, "Borrowed reach").await;
    assert_eq!(app.assign(&bob, campaign, id).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_is_public_by_default() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let response = app.query("influencer.list", "", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response
        .data()
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|i| i["name"].as_str())
        .collect();
    for seeded in ["gameguru", "techpix", "traveljoy"] {
        assert!(names.contains(&seeded), "missing seeded influencer {seeded}");
    }
}

#[tokio::test]
async fn test_create_rejects_out_of_range_values() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();

    let response = app
        .mutate(
            "influencer.create",
            json!({ "name": "", "followerCount": -5, "engagementRate": "1000.00" }),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let fields = &response.body["details"]["fields"];
    assert!(fields.get("name").is_some());
    assert!(fields.get("follower_count").is_some());
    assert!(fields.get("engagement_rate").is_some());
}

#[tokio::test]
async fn test_seeding_twice_inserts_nothing() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let inserted = promohub_database::seed::seed_default_influencers(&app.db_pool)
        .await
        .expect("seed");
    assert_eq!(inserted, 0);
}
