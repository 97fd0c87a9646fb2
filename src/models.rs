//! Typed records for the DummyJSON resources.
//!
//! Every entity is a flat serde record decoded straight off the wire and
//! owned by the screen that fetched it. There is no shared cache: the same
//! entity fetched on two screens is two independent copies.

use serde::Deserialize;

/// A product as returned by `/products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u64,
    /// Some products ship without a brand.
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A product category entry from `/products/categories`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

/// Company details nested inside a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

/// Address details nested inside a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
}

/// A user as returned by `/users`.
///
/// `company` and `address` are value objects owned by the user record;
/// they have no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: Option<String>,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub username: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub address: Address,
}

impl User {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A denormalized product snapshot inside a [`Cart`].
///
/// This is a copy taken at cart-creation time, not a reference into the
/// product catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default, alias = "discountedTotal")]
    pub discounted_price: f64,
    #[serde(default)]
    pub thumbnail: String,
}

/// A cart as returned by `/carts/user/{id}`.
///
/// Aggregate totals are computed server-side and trusted as-is; the client
/// never recomputes them from the line items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: u64,
    pub products: Vec<CartProduct>,
    pub total: f64,
    #[serde(default)]
    pub discounted_total: f64,
    pub user_id: u64,
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub total_quantity: u32,
}

/// Reaction counts nested inside a [`Post`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

/// A post as returned by `/posts`.
///
/// `user_id` is a weak reference: it identifies the author but the owning
/// user is never fetched alongside the post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub views: u64,
}

/// The commenting user snapshot embedded in a [`Comment`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
}

/// A comment as returned by `/posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub body: String,
    pub post_id: u64,
    pub user: CommentUser,
}

/// A todo as returned by `/todos`.
///
/// `completed` is the one mutable field in the model: toggling it is a
/// local-only demo action that is never sent upstream, so a reload always
/// reverts to server truth.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub todo: String,
    pub completed: bool,
    pub user_id: u64,
}

/// One page of a collection endpoint, normalized from the resource-keyed
/// envelope the API returns (`{products: [...], total, skip, limit}`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_camel_case_fields() {
        let json = serde_json::json!({
            "id": 1,
            "title": "iPhone 9",
            "description": "An apple mobile",
            "price": 549.0,
            "discountPercentage": 12.96,
            "rating": 4.69,
            "stock": 94,
            "brand": "Apple",
            "category": "smartphones",
            "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.jpg",
            "images": ["https://cdn.dummyjson.com/1/1.jpg"]
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.discount_percentage, 12.96);
        assert_eq!(product.stock, 94);
        assert_eq!(product.brand.as_deref(), Some("Apple"));
    }

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let json = serde_json::json!({
            "id": 2,
            "title": "Mystery item",
            "price": 10.0,
            "category": "misc"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.brand.is_none());
        assert!(product.images.is_empty());
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn comment_carries_user_snapshot() {
        let json = serde_json::json!({
            "id": 1,
            "body": "Nice post",
            "postId": 3,
            "user": {"id": 5, "username": "emmaj", "fullName": "Emma Johnson"}
        });
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(comment.post_id, 3);
        assert_eq!(comment.user.full_name, "Emma Johnson");
    }

    #[test]
    fn user_full_name_joins_first_and_last() {
        let json = serde_json::json!({
            "id": 1,
            "firstName": "Terry",
            "lastName": "Medhurst",
            "email": "t@example.com",
            "username": "terrym"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.full_name(), "Terry Medhurst");
    }
}
