mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based `page` query parameter. Missing or unparseable values fall
/// back to the first page instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: first_page() }
    }
}

fn first_page() -> usize {
    1
}

/// Slices an ordered result set into the requested fixed-size page.
/// Out-of-range pages yield an empty slice; callers decide whether
/// that means not-found.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * QUESTIONS_PER_PAGE;
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_a_full_slice() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(items, 1), (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(items, 3), (21..=25).collect::<Vec<i64>>());
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<i64> = (1..=25).collect();
        assert!(paginate(items, 4).is_empty());
    }

    #[test]
    fn page_zero_behaves_like_the_first_page() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(items, 0), (1..=10).collect::<Vec<i64>>());
    }
}
