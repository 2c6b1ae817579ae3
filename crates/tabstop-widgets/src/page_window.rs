#![forbid(unsafe_code)]

//! Page-window computation for paginated lists.
//!
//! Maps `(current_page, total_pages, sibling_count)` to the ordered sequence
//! of tokens a pagination row displays: page numbers, with runs of elided
//! pages collapsed into ellipsis markers.
//!
//! # Algorithm
//!
//! 1. `total_pages <= 1` always yields `[Number(1)]`, so callers have a
//!    single default token even for an empty list. Whether anything is
//!    rendered at all for an empty list is the controller's decision.
//! 2. Up to [`VISIBLE_THRESHOLD`] pages, every page is listed and no
//!    ellipsis appears.
//! 3. Above the threshold, the window is: page 1, an optional left ellipsis,
//!    the sibling run around the current page, an optional right ellipsis,
//!    and the last page.
//!
//! # Invariants
//!
//! - Output always starts with `Number(1)`.
//! - When `total_pages > 1`, output ends with `Number(total_pages)`.
//! - No two consecutive `Ellipsis` tokens.
//! - Deterministic: same inputs, same window.

/// Maximum page count rendered without collapsing into ellipses.
///
/// Fixed at 7 regardless of `sibling_count`. A larger sibling count can
/// therefore collapse inconsistently near the threshold; this is preserved
/// compatibility behavior, not a tuning knob (see the threshold tests).
pub const VISIBLE_THRESHOLD: usize = 7;

/// One slot in a pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A concrete page number, `>= 1`.
    Number(usize),

    /// A run of elided pages.
    Ellipsis,
}

impl PageToken {
    /// The page number, if this token is one.
    #[must_use]
    pub const fn number(self) -> Option<usize> {
        match self {
            Self::Number(n) => Some(n),
            Self::Ellipsis => None,
        }
    }
}

/// Compute the ordered token window for a pagination row.
///
/// `current_page` outside `[1, total_pages]` is clamped before the window
/// is computed; callers may pass unvalidated values.
#[must_use]
pub fn page_window(current_page: usize, total_pages: usize, sibling_count: usize) -> Vec<PageToken> {
    if total_pages <= 1 {
        return vec![PageToken::Number(1)];
    }
    if total_pages <= VISIBLE_THRESHOLD {
        return (1..=total_pages).map(PageToken::Number).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let left_sibling = current.saturating_sub(sibling_count).max(1);
    let right_sibling = current.saturating_add(sibling_count).min(total_pages);

    let mut tokens = Vec::with_capacity(sibling_count.saturating_mul(2).saturating_add(5));
    tokens.push(PageToken::Number(1));
    if left_sibling > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    for page in left_sibling..=right_sibling {
        if page != 1 && page != total_pages {
            tokens.push(PageToken::Number(page));
        }
    }
    if right_sibling < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Number(total_pages));
    tokens
}
