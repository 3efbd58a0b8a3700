//! Category filtering for the lifestyle grid.
//!
//! Posts with no category only ever appear under [`CategoryFilter::All`].

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use crate::net::types::Post;

/// Number of posts in the primary lifestyle grid.
pub const PRIMARY_GRID_SIZE: usize = 4;
/// Number of posts in the secondary lifestyle list.
pub const SECONDARY_GRID_SIZE: usize = 4;

/// Category tabs offered by the lifestyle grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Travel,
    Recipes,
    HealthFitness,
    Music,
}

impl CategoryFilter {
    /// Tabs in display order.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Travel,
        CategoryFilter::Recipes,
        CategoryFilter::HealthFitness,
        CategoryFilter::Music,
    ];

    /// Tab label; for named categories this is also the exact backend name.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Travel => "Travel",
            CategoryFilter::Recipes => "Recipes",
            CategoryFilter::HealthFitness => "Health & Fitness",
            CategoryFilter::Music => "Music",
        }
    }

    pub fn matches(self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            named => post.category_name() == Some(named.label()),
        }
    }
}

/// Posts visible under `filter`, in fetch order.
pub fn filter_posts(posts: &[Post], filter: CategoryFilter) -> Vec<Post> {
    posts.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// First [`PRIMARY_GRID_SIZE`] filtered posts.
pub fn primary_grid(filtered: &[Post]) -> &[Post] {
    &filtered[..filtered.len().min(PRIMARY_GRID_SIZE)]
}

/// The [`SECONDARY_GRID_SIZE`] posts following the primary grid.
pub fn secondary_grid(filtered: &[Post]) -> &[Post] {
    let start = filtered.len().min(PRIMARY_GRID_SIZE);
    let end = filtered.len().min(PRIMARY_GRID_SIZE + SECONDARY_GRID_SIZE);
    &filtered[start..end]
}
