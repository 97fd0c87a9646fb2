//! Detail screen state: one entity plus its co-fetched satellites.

use crate::models::{Cart, Comment, Post, Product, User};

/// State for the product detail screen.
#[derive(Debug, Clone, Default)]
pub struct ProductDetailState {
    pub product: Option<Product>,
}

/// State for the user detail screen. The user's carts are fetched in the
/// same join as the profile.
#[derive(Debug, Clone, Default)]
pub struct UserDetailState {
    pub user: Option<User>,
    pub carts: Vec<Cart>,
}

/// State for the post detail screen. Comments are fetched in the same join
/// as the post.
#[derive(Debug, Clone, Default)]
pub struct PostDetailState {
    pub post: Option<Post>,
    pub comments: Vec<Comment>,
}
