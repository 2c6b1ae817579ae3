#![forbid(unsafe_code)]

//! Property tests for the page-window computation and the pagination
//! controller.
//!
//! Run:
//!   cargo test -p tabstop-widgets --test proptest_window_invariants

use proptest::prelude::*;
use tabstop_widgets::page_window::{PageToken, VISIBLE_THRESHOLD, page_window};
use tabstop_widgets::pagination::PaginationState;

proptest! {
    /// The window always starts with page 1 and, for more than one page,
    /// ends with the last page.
    #[test]
    fn window_is_anchored_at_both_ends(
        total in 1usize..=1000,
        siblings in 0usize..=5,
        current_seed in 0usize..=999,
    ) {
        let current = 1 + current_seed % total;
        let tokens = page_window(current, total, siblings);

        prop_assert_eq!(tokens.first(), Some(&PageToken::Number(1)));
        if total > 1 {
            prop_assert_eq!(tokens.last(), Some(&PageToken::Number(total)));
        }
    }

    /// No two consecutive ellipsis tokens, ever.
    #[test]
    fn no_consecutive_ellipses(
        total in 1usize..=1000,
        siblings in 0usize..=5,
        current_seed in 0usize..=999,
    ) {
        let current = 1 + current_seed % total;
        let tokens = page_window(current, total, siblings);

        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0] == PageToken::Ellipsis && pair[1] == PageToken::Ellipsis)
            );
        }
    }

    /// At or under the visible threshold, the window is the exact page run
    /// with no ellipsis.
    #[test]
    fn under_threshold_is_exact_run(
        total in 1usize..=VISIBLE_THRESHOLD,
        siblings in 0usize..=5,
        current_seed in 0usize..=6,
    ) {
        let current = 1 + current_seed % total;
        let tokens = page_window(current, total, siblings);

        let expected: Vec<PageToken> = (1..=total).map(PageToken::Number).collect();
        prop_assert_eq!(tokens, expected);
    }

    /// Page numbers in the window are strictly increasing.
    #[test]
    fn window_numbers_strictly_increase(
        total in 1usize..=1000,
        siblings in 0usize..=5,
        current_seed in 0usize..=999,
    ) {
        let current = 1 + current_seed % total;
        let numbers: Vec<usize> = page_window(current, total, siblings)
            .into_iter()
            .filter_map(PageToken::number)
            .collect();

        for pair in numbers.windows(2) {
            prop_assert!(pair[0] < pair[1], "numbers out of order: {:?}", numbers);
        }
    }

    /// The current page is always visible in the window.
    #[test]
    fn current_page_is_visible(
        total in 1usize..=1000,
        siblings in 0usize..=5,
        current_seed in 0usize..=999,
    ) {
        let current = 1 + current_seed % total;
        let tokens = page_window(current, total, siblings);

        prop_assert!(tokens.contains(&PageToken::Number(current)));
    }

    /// Rejected go_to requests leave the controller untouched and report
    /// nothing.
    #[test]
    fn rejected_go_to_changes_nothing(
        total in 1usize..=100,
        start_seed in 0usize..=99,
        request in 0usize..=300,
    ) {
        let mut state = PaginationState::new(total);
        let start = 1 + start_seed % total;
        state.sync_page(start);

        let accepted = request >= 1 && request <= total && request != start;
        let change = state.go_to(request);

        prop_assert_eq!(change.is_some(), accepted);
        if !accepted {
            prop_assert_eq!(state.current(), start);
        }
    }
}
