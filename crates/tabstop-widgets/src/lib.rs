#![forbid(unsafe_code)]

//! Widget-state engines for tabstop.
//!
//! Two engines and their three consumers:
//!
//! - [`page_window`]: pure computation of which page numbers (and ellipses)
//!   a paginated list should display.
//! - [`focus`]: the roving-focus controller, a per-widget state machine that
//!   moves a single conceptual tab stop among ordered peer items.
//! - [`selection`]: the single-selected-value model shared by all peer
//!   groups, in controlled or uncontrolled operation.
//! - [`pagination`], [`radio_group`], [`stepper`]: consumers that wire one
//!   roving-focus controller and one selection model together with their own
//!   activation gating.
//!
//! Everything here is headless and synchronous. Controllers hand the host a
//! list of [`ItemView`] values to render and receive `KeyEvent`s back; there
//! is no behavioral feedback from the render side.

pub mod focus;
pub mod page_window;
pub mod pagination;
pub mod radio_group;
pub mod selection;
pub mod stepper;

/// Per-item view state handed to the (opaque) render target.
///
/// Purely an output shape: nothing the renderer does with it flows back
/// into the state machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Stable identifier of the item within its group.
    pub id: String,
    /// Display label. For pagination buttons this is the page number or a
    /// marker string; styling is the host's concern.
    pub label: String,
    /// Whether this item is the group's selected value.
    pub selected: bool,
    /// Whether this item is disabled (never focusable, never activatable).
    pub disabled: bool,
    /// Whether this item currently holds the roving tab stop.
    pub focused: bool,
}
