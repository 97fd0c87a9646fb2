//! Dashboard state and the derived category/stock aggregation.

use crate::models::Product;

/// How many products the dashboard samples for the stock chart.
///
/// The chart aggregates only this bounded sample, not the whole catalog.
/// A deliberate approximation; do not "fix" it by fetching everything.
pub const DASHBOARD_SAMPLE_LIMIT: usize = 100;

/// Maximum category groups shown in the chart.
pub const CHART_CATEGORY_LIMIT: usize = 7;

/// Headline totals for the stat cards.
///
/// `products`/`users`/`posts` are server-reported collection totals;
/// `total_stock` is summed over the sampled products only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub products: usize,
    pub users: usize,
    pub posts: usize,
    pub total_stock: u64,
}

/// One bar of the stock-by-category chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStock {
    pub name: String,
    pub stock: u64,
}

/// State for the dashboard screen.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub chart: Vec<CategoryStock>,
    pub loaded: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sum `stock` grouped by `category`, in first-seen order, truncated to the
/// first [`CHART_CATEGORY_LIMIT`] groups.
pub fn aggregate_stock_by_category(products: &[Product]) -> Vec<CategoryStock> {
    let mut groups: Vec<CategoryStock> = Vec::new();
    for product in products {
        match groups.iter_mut().find(|g| g.name == product.category) {
            Some(group) => group.stock += product.stock,
            None => groups.push(CategoryStock {
                name: product.category.clone(),
                stock: product.stock,
            }),
        }
    }
    groups.truncate(CHART_CATEGORY_LIMIT);
    groups
}
