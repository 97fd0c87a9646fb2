//! API client for the DummyJSON backend.
//!
//! A thin typed gateway: each method maps one domain operation onto exactly
//! one HTTP GET against the fixed base host and decodes the JSON response
//! into the records in [`crate::models`]. No retries, no caching, no write
//! endpoints — every call re-fetches.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{Cart, Category, Comment, Page, Post, Product, Todo, User};

/// Fixed base host for the public DummyJSON API.
pub const API_BASE_URL: &str = "https://dummyjson.com";

/// Error type for API client operations.
#[derive(Debug)]
pub enum ApiError {
    /// HTTP transport failed (connection, DNS, timeout).
    Http(reqwest::Error),
    /// JSON deserialization failed.
    Json(serde_json::Error),
    /// Server returned a non-success status.
    Status { status: u16, status_text: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "HTTP error: {}", e),
            ApiError::Json(e) => write!(f, "JSON error: {}", e),
            ApiError::Status {
                status,
                status_text,
            } => write!(f, "API error: {} {}", status, status_text),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Json(e) => Some(e),
            ApiError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(e)
    }
}

// List endpoints wrap the collection under a resource-specific key. Each
// envelope is decoded privately and normalized into a `Page<T>`.
macro_rules! envelope {
    ($name:ident, $key:ident, $item:ty) => {
        #[derive(Deserialize)]
        struct $name {
            $key: Vec<$item>,
            #[serde(default)]
            total: usize,
            #[serde(default)]
            skip: usize,
            #[serde(default)]
            limit: usize,
        }

        impl From<$name> for Page<$item> {
            fn from(env: $name) -> Self {
                Page {
                    items: env.$key,
                    total: env.total,
                    skip: env.skip,
                    limit: env.limit,
                }
            }
        }
    };
}

envelope!(ProductsEnvelope, products, Product);
envelope!(UsersEnvelope, users, User);
envelope!(CartsEnvelope, carts, Cart);
envelope!(PostsEnvelope, posts, Post);
envelope!(CommentsEnvelope, comments, Comment);
envelope!(TodosEnvelope, todos, Todo);

/// Client for the DummyJSON REST API.
///
/// Holds one reusable `reqwest::Client`; cloning is cheap and shares the
/// underlying connection pool, so fetch tasks clone the whole client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL for the API.
    pub base_url: String,
    client: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a client pointing at the public DummyJSON host.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (used by tests to point at a
    /// mock server).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Perform one GET round trip and decode the JSON body.
    ///
    /// Non-2xx statuses become [`ApiError::Status`] carrying the status code
    /// and canonical reason text.
    async fn request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "api request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // Products

    pub async fn get_products(&self, limit: usize, skip: usize) -> Result<Page<Product>, ApiError> {
        let env: ProductsEnvelope = self
            .request(&format!("/products?limit={}&skip={}", limit, skip))
            .await?;
        Ok(env.into())
    }

    pub async fn get_product(&self, id: u64) -> Result<Product, ApiError> {
        self.request(&format!("/products/{}", id)).await
    }

    pub async fn search_products(
        &self,
        query: &str,
        limit: usize,
        skip: usize,
    ) -> Result<Page<Product>, ApiError> {
        let env: ProductsEnvelope = self
            .request(&format!(
                "/products/search?q={}&limit={}&skip={}",
                urlencoding::encode(query),
                limit,
                skip
            ))
            .await?;
        Ok(env.into())
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.request("/products/categories").await
    }

    pub async fn get_products_by_category(
        &self,
        slug: &str,
        limit: usize,
        skip: usize,
    ) -> Result<Page<Product>, ApiError> {
        let env: ProductsEnvelope = self
            .request(&format!(
                "/products/category/{}?limit={}&skip={}",
                slug, limit, skip
            ))
            .await?;
        Ok(env.into())
    }

    // Users

    pub async fn get_users(&self, limit: usize, skip: usize) -> Result<Page<User>, ApiError> {
        let env: UsersEnvelope = self
            .request(&format!("/users?limit={}&skip={}", limit, skip))
            .await?;
        Ok(env.into())
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        self.request(&format!("/users/{}", id)).await
    }

    /// Carts belonging to one user. The endpoint is not paginated by the
    /// caller; DummyJSON returns the full set.
    pub async fn get_user_carts(&self, user_id: u64) -> Result<Page<Cart>, ApiError> {
        let env: CartsEnvelope = self.request(&format!("/carts/user/{}", user_id)).await?;
        Ok(env.into())
    }

    // Posts

    pub async fn get_posts(&self, limit: usize, skip: usize) -> Result<Page<Post>, ApiError> {
        let env: PostsEnvelope = self
            .request(&format!("/posts?limit={}&skip={}", limit, skip))
            .await?;
        Ok(env.into())
    }

    pub async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.request(&format!("/posts/{}", id)).await
    }

    pub async fn get_post_comments(&self, post_id: u64) -> Result<Page<Comment>, ApiError> {
        let env: CommentsEnvelope = self
            .request(&format!("/posts/{}/comments", post_id))
            .await?;
        Ok(env.into())
    }

    // Todos

    pub async fn get_todos(&self, limit: usize, skip: usize) -> Result<Page<Todo>, ApiError> {
        let env: TodosEnvelope = self
            .request(&format!("/todos?limit={}&skip={}", limit, skip))
            .await?;
        Ok(env.into())
    }
}
