//! # Page Window Calculator
//!
//! Computes the bounded run of page numbers shown in pagination controls.
//! The calculator only returns the raw window; prefixing `1` or suffixing
//! the last page with ellipsis markers when the window does not already
//! touch the edges is the renderer's job, as is suppressing pagination
//! entirely when there is a single page. Keeping those presentation rules
//! out of here leaves a pure function that is independently testable.

/// Window width used when the caller does not specify one.
pub const DEFAULT_WINDOW: usize = 5;

/// Returns the ordered page numbers to display for `current_page` out of
/// `total_pages`, at most `max_visible` of them.
///
/// When `total_pages <= max_visible` the full range `1..=total_pages` is
/// returned. Otherwise a window of exactly `max_visible` pages is centered
/// on `current_page` and slid back from the edges, so the window length is
/// always `min(total_pages, max_visible)`.
///
/// A `current_page` outside `[1, total_pages]` is clamped, never an error:
/// an out-of-range page is normal client input here just as it is in the
/// query engine.
pub fn window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if max_visible == 0 || total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }
    let current_page = current_page.min(total_pages);

    let half = max_visible / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let end = (start + max_visible - 1).min(total_pages);

    // The window hit the ceiling; slide it back so it keeps full width.
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_range_when_few_pages() {
        assert_eq!(window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(window(3, 5, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(1, 1, 5), vec![1]);
    }

    #[test]
    fn test_centered_in_the_middle() {
        assert_eq!(window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(window(6, 20, 3), vec![5, 6, 7]);
    }

    #[test]
    fn test_pinned_at_the_start() {
        assert_eq!(window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(2, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_slides_back_at_the_end() {
        assert_eq!(window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_size_invariant() {
        for total in 1..=12usize {
            for current in 1..=total {
                let w = window(current, total, 5);
                assert_eq!(
                    w.len(),
                    total.min(5),
                    "window({current}, {total}, 5) = {w:?}"
                );
                assert!(w.contains(&current));
            }
        }
    }

    #[test]
    fn test_current_page_beyond_total_is_clamped() {
        // Same window as for the real last page.
        assert_eq!(window(100, 10, 5), window(10, 10, 5));
        assert_eq!(window(100, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(11, 10, 5), vec![6, 7, 8, 9, 10]);
        // Zero current page degrades like page 1.
        assert_eq!(window(0, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(window(1, 0, 5).is_empty());
        assert!(window(1, 10, 0).is_empty());
    }
}
