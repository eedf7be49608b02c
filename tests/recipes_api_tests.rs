use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{request, test_app};

#[tokio::test]
async fn test_list_and_detail() {
    let (_dir, app) = test_app();

    let (status, recipes) = request(&app, "GET", "/recipes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(recipes.as_array().unwrap().len() >= 10);

    let (status, recipe) = request(&app, "GET", "/recipes/pancakes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recipe["name"], "Pancakes");
    assert_eq!(recipe["ingredients"][0]["name"], "Mjöl");

    let (status, _) = request(&app, "GET", "/recipes/Dragon%20Stew", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_scales_by_headcount() {
    let (_dir, app) = test_app();

    let (status, missing) = request(&app, "GET", "/recipes/Pancakes/missing?people=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let missing = missing.as_array().unwrap().clone();
    assert_eq!(missing.len(), 3);
    assert_eq!(missing[0]["name"], "Mjöl");
    assert_eq!(missing[0]["quantity"], 250.0);
    assert_eq!(missing[0]["unit"], "g");
    assert_eq!(missing[1]["name"], "Ägg");
    assert_eq!(missing[1]["quantity"], 2.0);
}

#[tokio::test]
async fn test_missing_omits_covered_ingredients() {
    let (_dir, app) = test_app();
    request(
        &app,
        "POST",
        "/fridge",
        Some(json!({ "name": "Mjöl", "quantity": 300.0, "unit": "g" })),
    )
    .await;

    let (_, missing) = request(&app, "GET", "/recipes/Pancakes/missing?people=2", None).await;
    let names: Vec<&str> = missing
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ägg", "Mjölk"]);
}

#[tokio::test]
async fn test_cook_is_all_or_nothing() {
    let (_dir, app) = test_app();
    for (name, quantity, unit) in [("Mjöl", 300.0, "g"), ("Ägg", 1.0, ""), ("Mjölk", 500.0, "g")] {
        request(
            &app,
            "POST",
            "/fridge",
            Some(json!({ "name": name, "quantity": quantity, "unit": unit })),
        )
        .await;
    }

    // One egg short for two people.
    let (status, body) = request(
        &app,
        "POST",
        "/recipes/Pancakes/cook",
        Some(json!({ "people": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["missing"], json!(["Ägg"]));

    // Nothing was decremented by the failed attempt.
    let (_, items) = request(&app, "GET", "/fridge", None).await;
    let flour = items
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == "Mjöl")
        .unwrap()
        .clone();
    assert_eq!(flour["quantity"], 300.0);

    // With enough eggs the cook succeeds and consumes exactly the scaled
    // amounts; ingredients reaching zero disappear.
    request(
        &app,
        "POST",
        "/fridge",
        Some(json!({ "name": "ägg", "quantity": 1.0 })),
    )
    .await;

    let (status, body) = request(
        &app,
        "POST",
        "/recipes/Pancakes/cook",
        Some(json!({ "people": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cooked"], "Pancakes");

    let (_, items) = request(&app, "GET", "/fridge", None).await;
    let items = items.as_array().unwrap().clone();
    let names: Vec<&str> = items.iter().map(|i| i["name"].as_str().unwrap()).collect();
    assert!(!names.contains(&"Ägg"));
    let flour = items.iter().find(|i| i["name"] == "Mjöl").unwrap();
    assert_eq!(flour["quantity"], 50.0);
    let milk = items.iter().find(|i| i["name"] == "Mjölk").unwrap();
    assert_eq!(milk["quantity"], 100.0);
}

#[tokio::test]
async fn test_cook_people_out_of_range() {
    let (_dir, app) = test_app();
    let (status, _) = request(
        &app,
        "POST",
        "/recipes/Pancakes/cook",
        Some(json!({ "people": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_availability_tracks_the_fridge() {
    let (_dir, app) = test_app();

    let (_, availability) = request(&app, "GET", "/recipes/availability?people=1", None).await;
    assert_eq!(availability["Pancakes"], false);

    for (name, quantity, unit) in [("Mjöl", 125.0, "g"), ("Ägg", 1.0, ""), ("Mjölk", 200.0, "g")] {
        request(
            &app,
            "POST",
            "/fridge",
            Some(json!({ "name": name, "quantity": quantity, "unit": unit })),
        )
        .await;
    }

    let (_, availability) = request(&app, "GET", "/recipes/availability?people=1", None).await;
    assert_eq!(availability["Pancakes"], true);

    let (_, availability) = request(&app, "GET", "/recipes/availability?people=2", None).await;
    assert_eq!(availability["Pancakes"], false);
}

#[tokio::test]
async fn test_ingredient_names_union_catalog_and_fridge() {
    let (_dir, app) = test_app();
    request(
        &app,
        "POST",
        "/fridge",
        Some(json!({ "name": "Hemlig sås", "quantity": 1.0 })),
    )
    .await;

    let (status, names) = request(&app, "GET", "/ingredients", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = names
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    assert!(names.contains(&"Mjöl"));
    assert!(names.contains(&"Hemlig sås"));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
