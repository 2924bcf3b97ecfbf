use serde::Serialize;

/// Page size used by the paginated index pages.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 3;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of a larger ordered result set plus the metadata templates need
/// to render pager controls.
///
/// The caller fetches the slice and the total count (two reads against the
/// store); this type only derives the numbers. Page indices are 1-based. A
/// requested page is never range-checked: asking for a page past the end
/// simply pairs an empty slice with flags computed from the requested index.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Window of page numbers for the pager, `None` marking an ellipsis gap.
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total_items: usize, current_page: usize, per_page: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(per_page)
        };

        let pages = get_pages(total_pages, page, 2, 2, 4, 2);

        Self {
            items,
            page,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
            pages,
        }
    }
}
