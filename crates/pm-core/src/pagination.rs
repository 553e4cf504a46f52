//! Pagination window calculator and page arithmetic.
//!
//! [`compute_window`] decides which page controls to show for a given
//! current page and page count: every page when there are few, otherwise the
//! first page, the pages around the current one, and the last page, with
//! [`PageToken::Ellipsis`] markers standing in for collapsed runs.
//!
//! ```text
//! compute_window(5, 10)  →  1 … 4 5 6 … 10
//! compute_window(1, 10)  →  1 2 … 10
//! compute_window(10, 10) →  1 … 9 10
//! ```
//!
//! Pages are 1-based throughout.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

/// Page counts at or below this are always shown in full.
pub const FULL_WINDOW_MAX: usize = 7;

/// A single page control: a page number or a collapsed-run marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A selectable page (1-based).
    Page(usize),
    /// A placeholder for one or more hidden pages. Not selectable.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number, or `None` for an ellipsis.
    #[inline]
    #[must_use]
    pub const fn page(self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    /// Returns `true` for [`PageToken::Ellipsis`].
    #[inline]
    #[must_use]
    pub const fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n as u64),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// The ordered page controls to render. Never longer than seven tokens.
pub type PageWindow = SmallVec<[PageToken; FULL_WINDOW_MAX]>;

/// Computes the page controls for `current_page` out of `total_pages`.
///
/// Callers are expected to skip rendering page controls entirely when
/// `total_pages <= 1`; in that case the returned window is empty.
///
/// Out-of-range input (`current_page == 0` or `current_page > total_pages`)
/// does not panic; the window degrades to the first and last page.
///
/// # Examples
///
/// ```
/// use pm_core::{compute_window, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(compute_window(5, 10).as_slice(),
///            &[Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
/// assert!(compute_window(1, 1).is_empty());
/// ```
#[must_use]
pub fn compute_window(current_page: usize, total_pages: usize) -> PageWindow {
    let mut pages = PageWindow::new();

    if total_pages <= 1 {
        return pages;
    }

    if total_pages <= FULL_WINDOW_MAX {
        pages.extend((1..=total_pages).map(PageToken::Page));
        return pages;
    }

    pages.push(PageToken::Page(1));

    if current_page > 3 {
        pages.push(PageToken::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = current_page.saturating_add(1).min(total_pages - 1);
    for page in start..=end {
        if !pages.contains(&PageToken::Page(page)) {
            pages.push(PageToken::Page(page));
        }
    }

    if current_page < total_pages - 2 {
        pages.push(PageToken::Ellipsis);
    }

    if !pages.contains(&PageToken::Page(total_pages)) {
        pages.push(PageToken::Page(total_pages));
    }

    pages
}

/// Returns the number of pages needed for `item_count` items.
///
/// Zero items (or a zero page size) need zero pages.
///
/// # Examples
///
/// ```
/// use pm_core::total_pages;
///
/// assert_eq!(total_pages(17, 8), 3);
/// assert_eq!(total_pages(16, 8), 2);
/// assert_eq!(total_pages(0, 8), 0);
/// ```
#[must_use]
pub const fn total_pages(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    item_count.div_ceil(per_page)
}

/// Returns the index range of the items on `page`.
///
/// The range is clipped to `item_count`, so a page past the end is empty.
#[must_use]
pub fn page_range(page: usize, per_page: usize, item_count: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    start..end
}

/// Clamps `page` into `1..=total_pages` (or to 1 when there are no pages).
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Navigation targets for the first/previous/next/last controls.
///
/// A `None` target means the control is disabled.
///
/// # Examples
///
/// ```
/// use pm_core::PageControls;
///
/// let controls = PageControls::new(1, 4);
/// assert_eq!(controls.previous, None);
/// assert_eq!(controls.next, Some(2));
/// assert_eq!(controls.last, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    /// The current page.
    pub current: usize,
    /// The page count.
    pub total: usize,
    /// Jump to page 1, unless already there.
    pub first: Option<usize>,
    /// One page back, unless on page 1.
    pub previous: Option<usize>,
    /// One page forward, unless on the last page.
    pub next: Option<usize>,
    /// Jump to the last page, unless already there.
    pub last: Option<usize>,
    /// Numbered page controls.
    pub window: PageWindow,
}

impl PageControls {
    /// Builds the controls for `current` out of `total` pages.
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        let at_start = current <= 1;
        let at_end = current >= total;
        Self {
            current,
            total,
            first: (!at_start).then_some(1),
            previous: (!at_start).then(|| current - 1),
            next: (!at_end).then(|| current + 1),
            last: (!at_end).then_some(total),
            window: compute_window(current, total),
        }
    }

    /// Returns `true` if the controls should be rendered at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    fn window(current: usize, total: usize) -> Vec<PageToken> {
        compute_window(current, total).into_vec()
    }

    #[test]
    fn test_small_set_fully_enumerated() {
        assert_eq!(window(1, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
        assert_eq!(window(4, 7).len(), 7);
        assert!(window(4, 7).iter().all(|t| !t.is_ellipsis()));
    }

    #[test]
    fn test_single_page_suppressed() {
        assert!(window(1, 1).is_empty());
        assert!(window(1, 0).is_empty());
    }

    #[test]
    fn test_start_boundary() {
        assert_eq!(window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(window(2, 10), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        assert_eq!(
            window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_middle() {
        assert_eq!(
            window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_end_boundary() {
        assert_eq!(window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_eq!(window(9, 10), vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);
        assert_eq!(
            window(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_eight_pages_fourth() {
        assert_eq!(
            window(4, 8),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(8)]
        );
    }

    #[test]
    fn test_out_of_range_does_not_panic() {
        assert_eq!(window(0, 10), vec![Page(1), Ellipsis, Page(10)]);
        assert_eq!(window(15, 10), vec![Page(1), Ellipsis, Page(10)]);
        assert_eq!(window(usize::MAX, 10), vec![Page(1), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_window_invariants() {
        for total in 0..40 {
            for current in 0..=total + 2 {
                let tokens = window(current, total);
                assert!(tokens.len() <= FULL_WINDOW_MAX);
                for pair in tokens.windows(2) {
                    assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()));
                }
                let mut numbers: Vec<usize> = tokens.iter().filter_map(|t| t.page()).collect();
                let len = numbers.len();
                numbers.dedup();
                assert_eq!(numbers.len(), len, "duplicate page in {current}/{total}");
                assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_display_and_serialize() {
        let line: Vec<String> = window(5, 10).iter().map(ToString::to_string).collect();
        assert_eq!(line.join(" "), "1 ... 4 5 6 ... 10");
        insta::assert_json_snapshot!(compute_window(1, 10), @r#"
        [
          1,
          2,
          "...",
          10
        ]
        "#);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(1, 8, 20), 0..8);
        assert_eq!(page_range(3, 8, 20), 16..20);
        assert_eq!(page_range(4, 8, 20), 20..20);
        assert_eq!(page_range(0, 8, 20), 0..8);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn test_page_controls_disabled_ends() {
        let last = PageControls::new(4, 4);
        assert_eq!(last.first, Some(1));
        assert_eq!(last.previous, Some(3));
        assert_eq!(last.next, None);
        assert_eq!(last.last, None);

        let hidden = PageControls::new(1, 1);
        assert!(!hidden.is_visible());
        assert!(hidden.window.is_empty());
    }
}
