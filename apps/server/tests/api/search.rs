use crate::support::*;
use axum::http::StatusCode;

#[tokio::test]
async fn search_with_defaults_returns_newest_first() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Oldest", "London").updated_minutes_ago(30))?;
    seed(&app, RestaurantBuilder::new("Newest", "London"))?;
    seed(&app, RestaurantBuilder::new("Middle", "London").updated_minutes_ago(10))?;

    let (status, body) = app.get("/api/restaurant/search/London").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Newest", "Middle", "Oldest"]);
    assert_pagination(&body, 3, 1, 1);
    Ok(())
}

#[tokio::test]
async fn city_match_is_case_insensitive_and_exact() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Luigi", "London"))?;
    seed(&app, RestaurantBuilder::new("Derry Diner", "Londonderry"))?;

    let (status, body) = app.get("/api/restaurant/search/london").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Luigi"]);
    Ok(())
}

#[tokio::test]
async fn unknown_city_short_circuits_regardless_of_other_params() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Luigi", "Rome"))?;

    let (status, body) = app
        .get("/api/restaurant/search/Paris?searchQuery=pizza&selectedCuisines=Italian&sortOption=junk&page=7")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(result_names(&body).is_empty());
    assert_pagination(&body, 0, 1, 1);
    Ok(())
}

#[tokio::test]
async fn bad_page_values_coerce_to_page_one() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Luigi", "London"))?;

    for query in ["page=abc", "page=0", "page=-2", "page="] {
        let (status, body) = app
            .get(&format!("/api/restaurant/search/London?{query}"))
            .await?;
        assert_eq!(status, StatusCode::OK);
        assert_pagination(&body, 1, 1, 1);
    }
    Ok(())
}

#[tokio::test]
async fn unknown_sort_option_falls_back_to_last_updated() -> anyhow::Result<()> {
    let app = TestApp::new();
    // Orderings diverge per field: lastUpdated desc -> [Alpha, Zed],
    // name desc -> [Zed, Alpha], deliveryPrice desc -> [Zed, Alpha].
    seed(&app, RestaurantBuilder::new("Zed", "London").delivery_price("9.00").updated_minutes_ago(60))?;
    seed(&app, RestaurantBuilder::new("Alpha", "London").delivery_price("1.00"))?;

    let (status, body) = app
        .get("/api/restaurant/search/London?sortOption=definitely-not-a-field")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Alpha", "Zed"]);
    Ok(())
}

#[tokio::test]
async fn selected_cuisines_use_and_semantics() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Both", "London").cuisines(&["Italian", "Vegan"]))?;
    seed(&app, RestaurantBuilder::new("OnlyItalian", "London").cuisines(&["Italian"]))?;
    seed(&app, RestaurantBuilder::new("OnlyVegan", "London").cuisines(&["Vegan"]))?;

    let (status, body) = app
        .get("/api/restaurant/search/London?selectedCuisines=Italian,Vegan")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Both"]);
    assert_pagination(&body, 1, 1, 1);
    Ok(())
}

#[tokio::test]
async fn search_query_matches_name_or_cuisine() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Sushi House", "Tokyo").cuisines(&["Japanese"]))?;
    seed(
        &app,
        RestaurantBuilder::new("Edo Garden", "Tokyo")
            .cuisines(&["Sushi"])
            .updated_minutes_ago(5),
    )?;
    seed(&app, RestaurantBuilder::new("Burger Barn", "Tokyo").cuisines(&["Burgers"]))?;

    let (status, body) = app
        .get("/api/restaurant/search/Tokyo?searchQuery=Sushi")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Sushi House", "Edo Garden"]);
    Ok(())
}

#[tokio::test]
async fn best_match_ranks_by_relevance() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Sushi House", "Tokyo").cuisines(&["Sushi"]))?;
    seed(&app, RestaurantBuilder::new("Burger Barn", "Tokyo").cuisines(&["Burgers"]))?;

    let (status, body) = app
        .get("/api/restaurant/search/Tokyo?searchQuery=Sushi&sortOption=bestMatch")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Sushi House"]);
    assert_pagination(&body, 1, 1, 1);
    Ok(())
}

#[tokio::test]
async fn best_match_without_query_uses_field_sort_mode() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("Oldest", "London").updated_minutes_ago(30))?;
    seed(&app, RestaurantBuilder::new("Newest", "London"))?;

    let (status, body) = app
        .get("/api/restaurant/search/London?sortOption=bestMatch")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["Newest", "Oldest"]);
    Ok(())
}

#[tokio::test]
async fn second_page_of_fifteen_by_delivery_price() -> anyhow::Result<()> {
    let app = TestApp::new();
    for i in 1..=15 {
        seed(
            &app,
            RestaurantBuilder::new(&format!("R{i:02}"), "London")
                .delivery_price(&format!("{i}.00"))
                .updated_minutes_ago(i),
        )?;
    }

    let (status, body) = app
        .get("/api/restaurant/search/London?sortOption=deliveryPrice&page=2")
        .await?;

    assert_eq!(status, StatusCode::OK);
    // Descending by price: page 2 holds ranks 11..15.
    assert_eq!(result_names(&body), vec!["R05", "R04", "R03", "R02", "R01"]);
    assert_pagination(&body, 15, 2, 2);
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty_with_accurate_totals() -> anyhow::Result<()> {
    let app = TestApp::new();
    for i in 0..3 {
        seed(
            &app,
            RestaurantBuilder::new(&format!("R{i}"), "London").updated_minutes_ago(i),
        )?;
    }

    let (status, body) = app.get("/api/restaurant/search/London?page=9").await?;

    assert_eq!(status, StatusCode::OK);
    assert!(result_names(&body).is_empty());
    assert_pagination(&body, 3, 9, 1);
    Ok(())
}

#[tokio::test]
async fn like_metacharacters_in_query_are_literal() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed(&app, RestaurantBuilder::new("100% Grill", "London"))?;
    seed(&app, RestaurantBuilder::new("Fully Grill", "London"))?;

    let (status, body) = app
        .get("/api/restaurant/search/London?searchQuery=100%25")
        .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_names(&body), vec!["100% Grill"]);
    Ok(())
}
