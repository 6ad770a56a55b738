//! Integration tests for campaign procedures: ownership, delete cascade,
//! assignment, metrics, and the dashboard.

mod helpers;

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

#[tokio::test]
async fn test_create_list_and_fetch_own_campaign() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (user, token) = app.new_user();

    let first = app.create_campaign(&token, "Spring launch").await;
    let second = app.create_campaign(&token, "Summer push").await;

    let list = app.query("campaign.list", "", Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    let ids: Vec<i64> = list
        .data()
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![second, first], "newest first");

    let fetched = app
        .query("campaign.byId", &format!("id={first}"), Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "Spring launch");
    assert_eq!(fetched.data()["user_id"], user.to_string());
    assert_eq!(fetched.data()["description"], "integration test");
    assert_eq!(helpers::decimal(&fetched.data()["budget"]), Decimal::new(5000, 0));
    assert_eq!(fetched.data()["start_date"], "2024-01-01");
    assert_eq!(fetched.data()["end_date"], "2099-12-31");
}

#[tokio::test]
async fn test_other_users_campaigns_are_invisible() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, owner) = app.new_user();
    let (_, intruder) = app.new_user();
    let campaign = app.create_campaign(&owner, "Private").await;

    let list = app.query("campaign.list", "", Some(&intruder)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.data(), &json!([]));

    let fetched = app
        .query("campaign.byId", &format!("id={campaign}"), Some(&intruder))
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.error_code(), "NOT_FOUND");

    let updated = app
        .mutate(
            "campaign.update",
            json!({
                "id": campaign,
                "title": "Hijacked",
                "budget": 1,
                "startDate": "2024-01-01",
                "endDate": "2024-01-02",
            }),
            Some(&intruder),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NOT_FOUND);

    let deleted = app
        .mutate("campaign.delete", json!({ "id": campaign }), Some(&intruder))
        .await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);

    // Untouched for the owner.
    let fetched = app
        .query("campaign.byId", &format!("id={campaign}"), Some(&owner))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["title"], "Private");
}

#[tokio::test]
async fn test_update_overwrites_fields_and_checks_dates() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let campaign = app.create_campaign(&token, "Draft").await;

    let updated = app
        .mutate(
            "campaign.update",
            json!({
                "id": campaign,
                "title": "Final",
                "budget": "1250.50",
                "startDate": "2024-03-01",
                "endDate": "2024-03-31",
            }),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.data()["title"], "Final");
    // update replaces every editable field; an omitted description is cleared
    assert_eq!(updated.data()["description"], serde_json::Value::Null);
    assert_eq!(updated.data()["end_date"], "2024-03-31");

    let reversed = app
        .mutate(
            "campaign.update",
            json!({
                "id": campaign,
                "title": "Final",
                "budget": 10,
                "startDate": "2024-04-01",
                "endDate": "2024-03-01",
            }),
            Some(&token),
        )
        .await;
    assert_eq!(reversed.status, StatusCode::BAD_REQUEST);
    assert_eq!(reversed.error_code(), "INVALID_DATE_RANGE");

    // The rejected update left the stored row as it was.
    let stored = app
        .query("campaign.byId", &format!("id={campaign}"), Some(&token))
        .await;
    assert_eq!(stored.status, StatusCode::OK);
    assert_eq!(stored.data()["title"], "Final");
    assert_eq!(helpers::decimal(&stored.data()["budget"]), Decimal::new(125050, 2));
    assert_eq!(stored.data()["start_date"], "2024-03-01");
    assert_eq!(stored.data()["end_date"], "2024-03-31");
}

#[tokio::test]
async fn test_delete_removes_assignments_but_keeps_influencers() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let campaign = app.create_campaign(&token, "Short lived").await;
    let influencer = app
        .create_influencer(&token, &helpers::unique_name("cascade"), 1000, "2.50")
        .await;

    assert_eq!(app.assign(&token, campaign, influencer).await.status, StatusCode::OK);
    assert_eq!(app.assignment_count(campaign).await, 1);

    let deleted = app
        .mutate("campaign.delete", json!({ "id": campaign }), Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.data()["id"].as_i64(), Some(campaign));
    assert_eq!(app.assignment_count(campaign).await, 0);

    let gone = app
        .query("campaign.byId", &format!("id={campaign}"), Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let influencers = app.query("influencer.list", "", Some(&token)).await;
    let still_there = influencers
        .data()
        .as_array()
        .expect("array")
        .iter()
        .any(|i| i["id"].as_i64() == Some(influencer));
    assert!(still_there);
}

#[tokio::test]
async fn test_assignment_is_idempotent() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let campaign = app.create_campaign(&token, "Repeat").await;
    let influencer = app
        .create_influencer(&token, &helpers::unique_name("repeat"), 500, "1.00")
        .await;

    let first = app.assign(&token, campaign, influencer).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.data(), &json!({ "success": true, "created": true }));

    let second = app.assign(&token, campaign, influencer).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.data(), &json!({ "success": true, "created": false }));

    let listed = app
        .query("campaign.influencers", &format!("campaignId={campaign}"), Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_assigning_to_foreign_campaign_is_forbidden() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, owner) = app.new_user();
    let (_, intruder) = app.new_user();
    let campaign = app.create_campaign(&owner, "Guarded").await;
    let influencer = app
        .create_influencer(&owner, &helpers::unique_name("guarded"), 10, "0.50")
        .await;

    let response = app.assign(&intruder, campaign, influencer).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
    assert_eq!(app.assignment_count(campaign).await, 0);
}

#[tokio::test]
async fn test_assigning_missing_influencer_is_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let campaign = app.create_campaign(&token, "Lonely").await;

    let response = app.assign(&token, campaign, i32::MAX as i64).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.assignment_count(campaign).await, 0);
}

#[tokio::test]
async fn test_influencers_of_foreign_campaign_are_not_found() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, owner) = app.new_user();
    let (_, intruder) = app.new_user();
    let campaign = app.create_campaign(&owner, "Roster").await;

    let response = app
        .query("campaign.influencers", &format!("campaignId={campaign}"), Some(&intruder))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let metrics = app
        .query("campaign.metrics", &format!("campaignId={campaign}"), Some(&intruder))
        .await;
    assert_eq!(metrics.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_aggregate_assigned_influencers() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let campaign = app.create_campaign(&token, "Measured").await;
    let a = app
        .create_influencer(&token, &helpers::unique_name("metric-a"), 1000, "2.00")
        .await;
    let b = app
        .create_influencer(&token, &helpers::unique_name("metric-b"), 3000, "4.00")
        .await;
    app.assign(&token, campaign, a).await;
    app.assign(&token, campaign, b).await;

    let response = app
        .query("campaign.metrics", &format!("campaignId={campaign}"), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let metrics = response.data();
    assert_eq!(metrics["campaign_id"].as_i64(), Some(campaign));
    assert_eq!(metrics["influencer_count"], 2);
    assert_eq!(metrics["total_followers"], 4000);
    // 1000 × 2% + 3000 × 4%
    assert_eq!(metrics["estimated_engagements"], 140);
    assert_eq!(helpers::decimal(&metrics["average_engagement_rate"]), Decimal::new(300, 2));
    assert_eq!(metrics["status"], "active");
}

#[tokio::test]
async fn test_dashboard_counts_only_own_campaigns() {
    let Some(app) = helpers::TestApp::try_new().await else {
        return;
    };
    let (_, token) = app.new_user();
    let (_, other) = app.new_user();
    app.create_campaign(&token, "One").await;
    app.create_campaign(&token, "Two").await;
    app.create_campaign(&other, "Elsewhere").await;

    let response = app.query("dashboard.summary", "", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_campaigns"], 2);
    assert_eq!(response.data()["active_campaigns"], 2);
    assert_eq!(helpers::decimal(&response.data()["total_budget"]), Decimal::new(10000, 0));
    assert_eq!(helpers::decimal(&response.data()["average_budget"]), Decimal::new(5000, 0));
}
