#![forbid(unsafe_code)]

//! Pagination controller and button row.
//!
//! [`PaginationState`] validates page-change requests, derives the
//! enabled/disabled state of the previous/next controls, and computes the
//! visible token window. It is not the source of truth for the current page
//! across renders: the caller owns persistent state, the controller clamps
//! and forwards requests and reports each accepted change exactly once as a
//! [`PageChange`] return value.
//!
//! [`PaginationBar`] is the button-row consumer: it lays the window tokens
//! out as one roving-focus group (ellipsis slots are permanently disabled
//! items) and routes activations back into the controller.

use crate::ItemView;
use crate::focus::{EnabledGate, FocusItem, NavOutcome, RovingFocus};
use crate::page_window::{PageToken, page_window};
use crate::selection::SelectionModel;
use tabstop_core::event::{KeyCode, KeyEvent};

/// An accepted page change, reported exactly once per accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// The new current page.
    pub page: usize,
}

/// Validated pagination state for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current: usize,
    total: usize,
    siblings: usize,
}

impl PaginationState {
    /// Create a controller over `total_pages` pages, starting on page 1.
    #[must_use]
    pub const fn new(total_pages: usize) -> Self {
        Self {
            current: 1,
            total: total_pages,
            siblings: 1,
        }
    }

    /// Derive the page count from an item count and page size.
    ///
    /// `total_pages = ceil(total_items / page_size)`; a zero page size
    /// yields zero pages (nothing to render).
    #[must_use]
    pub const fn from_items(total_items: usize, page_size: usize) -> Self {
        let total = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self::new(total)
    }

    /// Set how many page numbers appear on each side of the current page.
    #[must_use]
    pub const fn siblings(mut self, sibling_count: usize) -> Self {
        self.siblings = sibling_count;
        self
    }

    /// Current page (1-based; meaningful only when `should_render`).
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total
    }

    /// Whether a navigation element should be rendered at all.
    ///
    /// With no pages the consumer renders nothing, not an empty row.
    #[must_use]
    pub const fn should_render(&self) -> bool {
        self.total > 0
    }

    /// Whether the previous control is enabled.
    #[must_use]
    pub const fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether the next control is enabled.
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.current < self.total
    }

    /// Request a jump to `page`.
    ///
    /// Out-of-range or same-page requests are no-ops and report nothing.
    pub fn go_to(&mut self, page: usize) -> Option<PageChange> {
        if page < 1 || page > self.total || page == self.current {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "pagination.go_to", from = self.current, to = page);
        self.current = page;
        Some(PageChange { page })
    }

    /// Go to the next page.
    pub fn next(&mut self) -> Option<PageChange> {
        self.go_to(self.current.saturating_add(1))
    }

    /// Go to the previous page.
    pub fn previous(&mut self) -> Option<PageChange> {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Go to the first page.
    pub fn first(&mut self) -> Option<PageChange> {
        self.go_to(1)
    }

    /// Go to the last page.
    pub fn last(&mut self) -> Option<PageChange> {
        self.go_to(self.total)
    }

    /// Recompute the page count for a new page size, clamping the current
    /// page into the new range. Reports a change iff the clamp moved it.
    pub fn set_page_size(&mut self, total_items: usize, page_size: usize) -> Option<PageChange> {
        self.total = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        let clamped = if self.total == 0 {
            1
        } else {
            self.current.clamp(1, self.total)
        };
        if clamped == self.current {
            return None;
        }
        self.current = clamped;
        Some(PageChange { page: clamped })
    }

    /// Track a caller-owned page value (controlled operation).
    ///
    /// The value is clamped into range and does not report a change; the
    /// caller already knows what it passed in.
    pub fn sync_page(&mut self, page: usize) {
        self.current = if self.total == 0 {
            1
        } else {
            page.clamp(1, self.total)
        };
    }

    /// The visible token window for the current state.
    #[must_use]
    pub fn tokens(&self) -> Vec<PageToken> {
        page_window(self.current, self.total, self.siblings)
    }

    /// Keyboard paging for a standalone controller (no button row):
    /// Left/Right page, Home/End jump.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<PageChange> {
        match key.code {
            KeyCode::Left => self.previous(),
            KeyCode::Right => self.next(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            _ => None,
        }
    }
}

/// Stable item ids for the previous/next buttons.
const PREV_ID: &str = "prev";
const NEXT_ID: &str = "next";

/// Roving-focus button row over a [`PaginationState`].
#[derive(Debug, Clone)]
pub struct PaginationBar {
    state: PaginationState,
    focus: RovingFocus,
    selection: SelectionModel,
}

impl PaginationBar {
    /// Build a button row for `state`.
    #[must_use]
    pub fn new(state: PaginationState) -> Self {
        let selection = SelectionModel::uncontrolled(Some(&state.current().to_string()));
        let focus = RovingFocus::new(Self::build_items(&state));
        Self {
            state,
            focus,
            selection,
        }
    }

    /// The underlying controller.
    #[must_use]
    pub const fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Whether anything should be rendered.
    #[must_use]
    pub const fn should_render(&self) -> bool {
        self.state.should_render()
    }

    /// Index currently holding the tab stop, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Focus the first enabled button.
    pub fn focus_first(&mut self) -> bool {
        self.focus.focus_first()
    }

    /// Release the tab stop.
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Feed a key event: arrows rove, Enter/Space activates the focused
    /// button. An accepted activation reports the page change.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<PageChange> {
        match self.focus.handle_key(key, &EnabledGate) {
            NavOutcome::Activated(index) => self.activate_at(index),
            NavOutcome::FocusMoved(_) | NavOutcome::Ignored => None,
        }
    }

    /// Activate the button at `index` directly (the click path).
    pub fn activate_at(&mut self, index: usize) -> Option<PageChange> {
        let item = self.focus.items().get(index)?;
        if item.is_disabled() {
            return None;
        }
        let change = match item.id() {
            PREV_ID => self.state.previous(),
            NEXT_ID => self.state.next(),
            id => {
                let page: usize = id.parse().ok()?;
                self.state.go_to(page)
            }
        }?;
        self.refresh();
        Some(change)
    }

    /// Per-button view state for the renderer.
    #[must_use]
    pub fn views(&self) -> Vec<ItemView> {
        if !self.should_render() {
            return Vec::new();
        }
        self.focus
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView {
                id: item.id().to_owned(),
                label: Self::label_for(item.id()),
                selected: self.selection.is_selected(item.id()),
                disabled: item.is_disabled(),
                focused: self.focus.focused() == Some(index),
            })
            .collect()
    }

    /// Rebuild the button row after an external state change.
    ///
    /// Focus re-anchors by id where the button survives the new window.
    pub fn refresh(&mut self) {
        self.focus.set_items(Self::build_items(&self.state));
        let current = self.state.current().to_string();
        self.selection.sync(Some(&current));
    }

    fn build_items(state: &PaginationState) -> Vec<FocusItem> {
        if !state.should_render() {
            return Vec::new();
        }
        let mut items = Vec::new();
        items.push(FocusItem::new(PREV_ID).disabled(!state.can_go_previous()));
        let mut gap = 0usize;
        for token in state.tokens() {
            match token {
                PageToken::Number(page) => items.push(FocusItem::new(page.to_string())),
                PageToken::Ellipsis => {
                    items.push(FocusItem::new(format!("gap-{gap}")).disabled(true));
                    gap += 1;
                }
            }
        }
        items.push(FocusItem::new(NEXT_ID).disabled(!state.can_go_next()));
        items
    }

    fn label_for(id: &str) -> String {
        match id {
            PREV_ID => "<".to_owned(),
            NEXT_ID => ">".to_owned(),
            id if id.starts_with("gap-") => "…".to_owned(),
            id => id.to_owned(),
        }
    }
}
