use crate::support::*;
use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn malformed_id_is_a_client_error() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, body) = app.get("/api/restaurant/not-a-uuid").await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(
        message.contains("invalid restaurant id"),
        "unexpected message: {message}"
    );
    Ok(())
}

#[tokio::test]
async fn well_formed_but_absent_id_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, body) = app
        .get(&format!("/api/restaurant/{}", Uuid::new_v4()))
        .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(
        message.contains("restaurant not found"),
        "unexpected message: {message}"
    );
    Ok(())
}

#[tokio::test]
async fn existing_restaurant_is_returned_in_wire_format() -> anyhow::Result<()> {
    let app = TestApp::new();
    let id = seed(
        &app,
        RestaurantBuilder::new("Sushi House", "Tokyo").cuisines(&["Sushi", "Japanese"]),
    )?;

    let (status, body) = app.get(&format!("/api/restaurant/{id}")).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], serde_json::json!(id.to_string()));
    assert_eq!(body["name"], serde_json::json!("Sushi House"));
    assert_eq!(body["city"], serde_json::json!("Tokyo"));
    assert_eq!(body["cuisines"], serde_json::json!(["Sushi", "Japanese"]));
    // camelCase wire contract
    for key in ["ownerId", "deliveryPrice", "estimatedDeliveryTime", "menuItems", "imageUrl", "lastUpdated"] {
        assert!(body.get(key).is_some(), "missing key {key}");
    }
    Ok(())
}

#[tokio::test]
async fn surrounding_whitespace_in_id_is_tolerated() -> anyhow::Result<()> {
    let app = TestApp::new();
    let id = seed(&app, RestaurantBuilder::new("Luigi", "Rome"))?;

    let (status, _body) = app.get(&format!("/api/restaurant/%20{id}%20")).await?;

    assert_eq!(status, StatusCode::OK);
    Ok(())
}
