//! Featured/remainder split and page windowing for the browse view.

/// Number of leading posts shown as featured, never paginated.
pub const FEATURED_COUNT: usize = 3;

/// Posts per page of the remainder.
pub const PAGE_SIZE: usize = 4;

/// One page of a filtered list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub featured: &'a [T],
    pub items: &'a [T],
    pub page_count: usize,
}

/// Split `filtered` into featured items and the requested page of the rest.
///
/// Pages are 1-based; a page past the end yields no items.
pub fn paginate<T>(filtered: &[T], page: usize) -> Page<'_, T> {
    let split = filtered.len().min(FEATURED_COUNT);
    let (featured, remainder) = filtered.split_at(split);

    let start = page
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE)
        .min(remainder.len());
    let end = start.saturating_add(PAGE_SIZE).min(remainder.len());

    Page {
        featured,
        items: &remainder[start..end],
        page_count: remainder.len().div_ceil(PAGE_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_list_is_all_featured() {
        let page = paginate(&[1, 2], 1);
        assert_eq!(page.featured, &[1, 2]);
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 0);
    }

    #[test]
    fn test_remainder_of_seven_spans_two_pages() {
        let posts: Vec<u32> = (1..=10).collect();

        let first = paginate(&posts, 1);
        assert_eq!(first.featured, &[1, 2, 3]);
        assert_eq!(first.items, &[4, 5, 6, 7]);
        assert_eq!(first.page_count, 2);

        let second = paginate(&posts, 2);
        assert_eq!(second.featured, &[1, 2, 3]);
        assert_eq!(second.items, &[8, 9, 10]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let posts: Vec<u32> = (1..=5).collect();
        let page = paginate(&posts, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_page_zero_reads_as_first() {
        let posts: Vec<u32> = (1..=6).collect();
        assert_eq!(paginate(&posts, 0).items, &[4, 5, 6]);
    }

    #[test]
    fn test_empty() {
        let page = paginate::<u32>(&[], 1);
        assert!(page.featured.is_empty());
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 0);
    }
}
