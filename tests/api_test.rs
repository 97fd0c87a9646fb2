//! Gateway tests using wiremock.
//!
//! Verify that the ApiClient issues requests with exactly the pagination
//! parameters it was given, decodes the resource-keyed envelopes, and maps
//! non-success statuses to `ApiError::Status`.

use dummydash::api::{ApiClient, ApiError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn products_body(count: usize, total: usize, skip: usize, limit: usize) -> serde_json::Value {
    let products: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": skip + i + 1,
                "title": format!("Product {}", skip + i + 1),
                "price": 10.0,
                "stock": 5,
                "category": "beauty"
            })
        })
        .collect();
    serde_json::json!({
        "products": products,
        "total": total,
        "skip": skip,
        "limit": limit
    })
}

#[tokio::test]
async fn get_products_carries_limit_and_skip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "12"))
        .and(query_param("skip", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(12, 194, 24, 12)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let page = client.get_products(12, 24).await.unwrap();

    assert_eq!(page.total, 194);
    assert_eq!(page.skip, 24);
    assert!(page.items.len() <= 12);
    assert_eq!(page.items[0].id, 25);
}

#[tokio::test]
async fn get_products_is_idempotent_against_unchanged_remote() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(3, 3, 0, 12)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let first = client.get_products(12, 0).await.unwrap();
    let second = client.get_products(12, 0).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn search_url_encodes_the_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/search"))
        .and(query_param("q", "red lipstick"))
        .and(query_param("limit", "12"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(1, 1, 0, 12)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let page = client.search_products("red lipstick", 12, 0).await.unwrap();
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn category_listing_uses_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/category/fragrances"))
        .and(query_param("limit", "12"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_body(2, 2, 0, 12)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let page = client
        .get_products_by_category("fragrances", 12, 0)
        .await
        .unwrap();
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let err = client.get_products(12, 0).await.unwrap_err();

    match err {
        ApiError::Status {
            status,
            status_text,
        } => {
            assert_eq!(status, 500);
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_body_maps_to_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let err = client.get_product(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}

#[tokio::test]
async fn user_carts_and_post_comments_decode_their_envelopes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carts/user/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "carts": [{
                "id": 19,
                "userId": 5,
                "total": 2492.0,
                "discountedTotal": 2230.0,
                "totalProducts": 2,
                "totalQuantity": 5,
                "products": [{
                    "id": 144,
                    "title": "Cricket Helmet",
                    "price": 44.99,
                    "quantity": 4,
                    "total": 179.96,
                    "discountPercentage": 11.47,
                    "discountedTotal": 159.32
                }]
            }],
            "total": 1,
            "skip": 0,
            "limit": 1
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/posts/3/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "comments": [{
                "id": 1,
                "body": "Great read",
                "postId": 3,
                "user": {"id": 10, "username": "lena", "fullName": "Lena Meyer"}
            }],
            "total": 1,
            "skip": 0,
            "limit": 1
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());

    let carts = client.get_user_carts(5).await.unwrap();
    assert_eq!(carts.items.len(), 1);
    assert_eq!(carts.items[0].products[0].quantity, 4);
    // The cart snapshot's discounted price decodes from either field name.
    assert_eq!(carts.items[0].products[0].discounted_price, 159.32);

    let comments = client.get_post_comments(3).await.unwrap();
    assert_eq!(comments.items[0].user.username, "lena");
}

#[tokio::test]
async fn categories_decode_slug_and_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"},
            {"slug": "fragrances", "name": "Fragrances", "url": "https://dummyjson.com/products/category/fragrances"}
        ])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri());
    let categories = client.get_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].slug, "beauty");
    assert_eq!(categories[1].name, "Fragrances");
}
