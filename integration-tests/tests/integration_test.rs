use integration_tests::{http_client, retrieve_api_endpoint};
use serde_json::{json, Value};
use shared::core::{MovieRecord, MovieSummary};

// These run against a deployed and seeded stack:
// STACK_NAME=movies-api cargo test -p integration-tests -- --ignored

#[ignore]
#[tokio::test]
async fn when_listing_movies_should_return_every_seeded_movie() {
    let api_endpoint = retrieve_api_endpoint().await;

    let response = http_client()
        .get(format!("{}movies", api_endpoint))
        .send()
        .await
        .expect("List request should be sent");

    assert_eq!(response.status(), 200);

    let movies: Vec<MovieRecord> = serde_json::from_str(
        response.text().await.unwrap().as_str(),
    )
    .expect("Response to be a JSON array of movies");

    assert_eq!(movies.len(), 6);
    assert!(movies
        .iter()
        .any(|m| m.title.as_deref() == Some("Jurassic World Dominion")));
}

#[ignore]
#[tokio::test]
async fn when_filtering_by_seeded_year_should_return_normalized_movie() {
    let api_endpoint = retrieve_api_endpoint().await;

    let response = http_client()
        .get(format!("{}movies/by-year", api_endpoint))
        .query(&[("year", "1993")])
        .send()
        .await
        .expect("Filter request should be sent");

    assert_eq!(response.status(), 200);

    let movies: Vec<MovieSummary> = serde_json::from_str(
        response.text().await.unwrap().as_str(),
    )
    .expect("Response to be a JSON array of normalized movies");

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Jurassic Park");
    assert_eq!(movies[0].rating, "8.2");
}

#[ignore]
#[tokio::test]
async fn when_filtering_by_unknown_year_should_return_404() {
    let api_endpoint = retrieve_api_endpoint().await;

    let response = http_client()
        .get(format!("{}movies/by-year", api_endpoint))
        .query(&[("year", "1800")])
        .send()
        .await
        .expect("Filter request should be sent");

    assert_eq!(response.status(), 404);

    let body: Value = serde_json::from_str(response.text().await.unwrap().as_str()).unwrap();
    assert_eq!(body, json!({"message": "No movies found for the year 1800."}));
}

#[ignore]
#[tokio::test]
async fn when_filtering_without_year_should_return_400() {
    let api_endpoint = retrieve_api_endpoint().await;

    let response = http_client()
        .get(format!("{}movies/by-year", api_endpoint))
        .send()
        .await
        .expect("Filter request should be sent");

    assert_eq!(response.status(), 400);
}
