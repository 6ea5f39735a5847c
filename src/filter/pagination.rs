use serde::Serialize;

pub const DEFAULT_PER_PAGE: usize = 20;
pub const MAX_PER_PAGE: usize = 100;

/// Position of one page within a filtered result
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of items plus where it sits in the whole result
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Slice `items` into 1-based pages.
///
/// `page` below 1 is treated as 1 and `per_page` is clamped to
/// `1..=MAX_PER_PAGE`. A page past the end comes back empty with
/// correct totals.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Paged<T> {
    let page = page.max(1);
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total = items.len();
    let pages = total.div_ceil(per_page);

    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Paged {
        items,
        info: PageInfo {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_many() {
        let paged = paginate((1..=45).collect(), 1, 20);
        assert_eq!(paged.items, (1..=20).collect::<Vec<_>>());
        assert_eq!(
            paged.info,
            PageInfo {
                page: 1,
                per_page: 20,
                total: 45,
                pages: 3,
                has_next: true,
                has_prev: false,
            }
        );
    }

    #[test]
    fn last_page_is_partial() {
        let paged = paginate((1..=45).collect(), 3, 20);
        assert_eq!(paged.items, (41..=45).collect::<Vec<_>>());
        assert!(!paged.info.has_next);
        assert!(paged.info.has_prev);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let paged = paginate(vec!['a', 'b'], 7, 20);
        assert!(paged.items.is_empty());
        assert_eq!(paged.info.total, 2);
        assert_eq!(paged.info.pages, 1);
        assert!(!paged.info.has_next);
    }

    #[test]
    fn per_page_is_clamped() {
        let paged = paginate((0..250).collect::<Vec<u32>>(), 1, 500);
        assert_eq!(paged.info.per_page, MAX_PER_PAGE);
        assert_eq!(paged.items.len(), 100);

        let paged = paginate(vec![1, 2, 3], 0, 0);
        assert_eq!(paged.info.page, 1);
        assert_eq!(paged.info.per_page, 1);
        assert_eq!(paged.items, vec![1]);
        assert_eq!(paged.info.pages, 3);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let paged = paginate(Vec::<u8>::new(), 1, DEFAULT_PER_PAGE);
        assert_eq!(paged.info.pages, 0);
        assert!(!paged.info.has_next);
        assert!(!paged.info.has_prev);
    }
}
