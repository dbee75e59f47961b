//! Page slicing with clamped cursors.

use cardshelf_core::Item;
use serde::{Deserialize, Serialize};

/// One page of an ordered view, plus the cursor facts the pagination
/// controls need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Item>,
    /// 1-based page actually served, after clamping.
    pub current_page: usize,
    /// Always at least 1, even for an empty collection.
    pub total_pages: usize,
}

/// Slices an already filtered/sorted collection into one page.
///
/// `total_pages = max(1, ceil(len / page_size))` and the requested page is
/// silently clamped into `[1, total_pages]`; out-of-range requests are a
/// navigation artifact, not an error. A `page_size` of 0 is treated as 1;
/// config validation rejects it upstream but pagination stays total.
#[must_use]
pub fn paginate(items: &[Item], page_size: usize, requested_page: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        current_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_items(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item {
                id: Uuid::new_v4(),
                name: format!("card-{i:02}"),
                category: "Pokemon".to_string(),
                collection_set: String::new(),
                condition: String::new(),
                image_ref: None,
                quantity: 1,
                list_price: 0.0,
                market_price: 0.0,
                external_link: None,
            })
            .collect()
    }

    #[test]
    fn slices_a_middle_page() {
        let items = make_items(20);
        let page = paginate(&items, 9, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.items[0].name, "card-09");
    }

    #[test]
    fn out_of_range_request_clamps_to_last_page() {
        // 20 items at page size 9 -> 3 pages; page 999 serves items 19-20.
        let items = make_items(20);
        let page = paginate(&items, 9, 999);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "card-18");
        assert_eq!(page.items[1].name, "card-19");
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let items = make_items(5);
        let page = paginate(&items, 3, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items[0].name, "card-00");
    }

    #[test]
    fn empty_collection_is_one_empty_page() {
        let page = paginate(&[], 9, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let items = make_items(18);
        let page = paginate(&items, 9, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items = make_items(3);
        let page = paginate(&items, 0, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "card-01");
    }

    #[test]
    fn pages_cover_the_collection_exactly_once() {
        let items = make_items(20);
        let mut seen = Vec::new();
        let total = paginate(&items, 9, 1).total_pages;
        for page_number in 1..=total {
            seen.extend(
                paginate(&items, 9, page_number)
                    .items
                    .into_iter()
                    .map(|i| i.name),
            );
        }
        let expected: Vec<String> = items.iter().map(|i| i.name.clone()).collect();
        assert_eq!(seen, expected);
    }
}
