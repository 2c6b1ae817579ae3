#![forbid(unsafe_code)]

//! Roving-focus controller.
//!
//! Implements the roving-tabindex pattern: in a group of peer controls only
//! one item holds the conceptual tab stop at a time, and arrow keys move
//! that single stop among peers. Each widget instance owns one controller;
//! nothing is shared across instances.
//!
//! # State machine
//!
//! ```text
//!            focus(i)
//!   Idle ───────────────▶ Focused(i)
//!    ▲                       │  ▲
//!    │        blur           │  │ move_forward / move_backward /
//!    └───────────────────────┘  │ jump_first / jump_last
//!                               │ (wrapping, disabled items skipped)
//!                               ▼
//!                          Focused(j)
//! ```
//!
//! `activate` does not transition the focus state. It asks the injected
//! [`ActivationGate`] whether the focused item may be activated and reports
//! the index to the caller, which routes it into its selection model.
//!
//! # Invariants
//!
//! - A focused index always points at an enabled item.
//! - Movement wraps past either end; with one enabled item it is a no-op.
//! - A rejected activation changes nothing and reports nothing.

use tabstop_core::event::{KeyCode, KeyEvent};

/// One focusable peer in a group.
///
/// The item's index is its position in the controller's list; the id is the
/// stable identifier the selection model works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusItem {
    id: String,
    disabled: bool,
}

impl FocusItem {
    /// Create an enabled item with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
        }
    }

    /// Set whether this item is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stable identifier of this item.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this item is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Which arrow-key axis moves the tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// ArrowLeft / ArrowRight move backward / forward.
    #[default]
    Horizontal,

    /// ArrowUp / ArrowDown move backward / forward.
    Vertical,
}

/// Per-widget activation gating, injected by the consumer.
///
/// The default policy is [`EnabledGate`]. Consumers with stricter rules
/// (a linear stepper blocking forward jumps) supply their own.
pub trait ActivationGate {
    /// Whether the item at `index` may be activated right now.
    fn can_activate(&self, index: usize, item: &FocusItem) -> bool;
}

/// Default gate: any enabled item may be activated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnabledGate;

impl ActivationGate for EnabledGate {
    fn can_activate(&self, _index: usize, item: &FocusItem) -> bool {
        !item.is_disabled()
    }
}

/// Result of feeding a key event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Key not handled, or the request degraded to a no-op.
    Ignored,

    /// The tab stop moved to this index.
    FocusMoved(usize),

    /// The item at this index was activated (gate accepted).
    Activated(usize),
}

/// Roving-focus state machine for one group of peers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RovingFocus {
    items: Vec<FocusItem>,
    focused: Option<usize>,
    orientation: Orientation,
}

impl RovingFocus {
    /// Create a controller over an ordered item list, initially Idle.
    #[must_use]
    pub fn new(items: Vec<FocusItem>) -> Self {
        Self {
            items,
            focused: None,
            orientation: Orientation::Horizontal,
        }
    }

    /// Set the arrow-key orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Immutable item slice.
    #[must_use]
    pub fn items(&self) -> &[FocusItem] {
        &self.items
    }

    /// Index currently holding the tab stop, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move the tab stop to `index`.
    ///
    /// Rejected if the index is out of range or the item is disabled.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) if !item.is_disabled() => {
                self.log_move("focus", index);
                self.focused = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Focus the first enabled item.
    pub fn focus_first(&mut self) -> bool {
        match self.first_enabled() {
            Some(index) => self.focus(index),
            None => false,
        }
    }

    /// Release the tab stop (Focused → Idle).
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Move to the next enabled item, wrapping past the end.
    ///
    /// No-op in Idle or when no other enabled item exists.
    pub fn move_forward(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    /// Move to the previous enabled item, wrapping past the start.
    pub fn move_backward(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    /// Jump to the first enabled item (Home). No-op in Idle.
    pub fn jump_first(&mut self) -> bool {
        if self.focused.is_none() {
            return false;
        }
        match self.first_enabled() {
            Some(index) => self.focus(index),
            None => false,
        }
    }

    /// Jump to the last enabled item (End). No-op in Idle.
    pub fn jump_last(&mut self) -> bool {
        if self.focused.is_none() {
            return false;
        }
        match self.last_enabled() {
            Some(index) => self.focus(index),
            None => false,
        }
    }

    /// Attempt to activate the focused item through `gate`.
    ///
    /// Returns the focused index when the gate accepts; a rejected or Idle
    /// activation is a silent no-op.
    #[must_use]
    pub fn activate(&self, gate: &dyn ActivationGate) -> Option<usize> {
        let index = self.focused?;
        let item = self.items.get(index)?;
        if gate.can_activate(index, item) {
            Some(index)
        } else {
            None
        }
    }

    /// Feed a key event, routing movement and activation per orientation.
    ///
    /// Horizontal binds Left/Right, vertical binds Up/Down; Home/End jump
    /// to the first/last enabled item; Enter and Space activate through
    /// `gate`.
    pub fn handle_key(&mut self, key: &KeyEvent, gate: &dyn ActivationGate) -> NavOutcome {
        if key.is_activation() {
            return match self.activate(gate) {
                Some(index) => NavOutcome::Activated(index),
                None => NavOutcome::Ignored,
            };
        }
        let moved = match (self.orientation, key.code) {
            (Orientation::Horizontal, KeyCode::Left) => self.move_backward(),
            (Orientation::Horizontal, KeyCode::Right) => self.move_forward(),
            (Orientation::Vertical, KeyCode::Up) => self.move_backward(),
            (Orientation::Vertical, KeyCode::Down) => self.move_forward(),
            (_, KeyCode::Home) => self.jump_first(),
            (_, KeyCode::End) => self.jump_last(),
            _ => return NavOutcome::Ignored,
        };
        match (moved, self.focused) {
            (true, Some(index)) => NavOutcome::FocusMoved(index),
            _ => NavOutcome::Ignored,
        }
    }

    /// Replace the item list.
    ///
    /// Focus re-anchors by id: if the previously focused id still exists
    /// and is enabled, it keeps the tab stop; otherwise the controller
    /// resets to Idle.
    pub fn set_items(&mut self, items: Vec<FocusItem>) {
        let previous_id = self
            .focused
            .and_then(|i| self.items.get(i))
            .map(|item| item.id.clone());
        self.items = items;
        self.focused = previous_id.and_then(|id| {
            self.items
                .iter()
                .position(|item| item.id == id && !item.is_disabled())
        });
    }

    fn step(&mut self, direction: Direction) -> bool {
        let Some(current) = self.focused else {
            return false;
        };
        let len = self.items.len();
        if len == 0 || current >= len {
            return false;
        }
        let next = (1..len)
            .map(|distance| match direction {
                Direction::Forward => (current + distance) % len,
                Direction::Backward => (current + len - distance) % len,
            })
            .find(|&candidate| !self.items[candidate].is_disabled());
        match next {
            Some(index) => {
                self.log_move("step", index);
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }

    fn first_enabled(&self) -> Option<usize> {
        self.items.iter().position(|item| !item.is_disabled())
    }

    fn last_enabled(&self) -> Option<usize> {
        self.items.iter().rposition(|item| !item.is_disabled())
    }

    #[cfg(feature = "tracing")]
    fn log_move(&self, reason: &str, to: usize) {
        tracing::debug!(message = "focus.move", reason, from = ?self.focused, to);
    }

    #[cfg(not(feature = "tracing"))]
    fn log_move(&self, _reason: &str, _to: usize) {}
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(spec: &[(&str, bool)]) -> RovingFocus {
        RovingFocus::new(
            spec.iter()
                .map(|(id, disabled)| FocusItem::new(*id).disabled(*disabled))
                .collect(),
        )
    }

    // --- Idle / Focused transitions ---

    #[test]
    fn starts_idle() {
        let focus = group(&[("a", false), ("b", false)]);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn focus_and_blur() {
        let mut focus = group(&[("a", false), ("b", false)]);
        assert!(focus.focus(1));
        assert_eq!(focus.focused(), Some(1));
        focus.blur();
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn focus_rejects_disabled_and_out_of_range() {
        let mut focus = group(&[("a", false), ("b", true)]);
        assert!(!focus.focus(1));
        assert!(!focus.focus(7));
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn focus_first_skips_leading_disabled() {
        let mut focus = group(&[("a", true), ("b", false)]);
        assert!(focus.focus_first());
        assert_eq!(focus.focused(), Some(1));
    }

    #[test]
    fn focus_first_all_disabled_stays_idle() {
        let mut focus = group(&[("a", true), ("b", true)]);
        assert!(!focus.focus_first());
        assert_eq!(focus.focused(), None);
    }

    // --- Movement ---

    #[test]
    fn forward_skips_disabled_items() {
        let mut focus = group(&[("a", false), ("b", true), ("c", false)]);
        focus.focus(0);
        assert!(focus.move_forward());
        assert_eq!(focus.focused(), Some(2));
    }

    #[test]
    fn forward_wraps_to_first_enabled() {
        let mut focus = group(&[("a", false), ("b", true), ("c", false)]);
        focus.focus(2);
        assert!(focus.move_forward());
        assert_eq!(focus.focused(), Some(0));
    }

    #[test]
    fn backward_wraps_to_last_enabled() {
        let mut focus = group(&[("a", false), ("b", false), ("c", true)]);
        focus.focus(0);
        assert!(focus.move_backward());
        assert_eq!(focus.focused(), Some(1));
    }

    #[test]
    fn single_enabled_item_movement_is_noop() {
        let mut focus = group(&[("a", true), ("b", false), ("c", true)]);
        focus.focus(1);
        assert!(!focus.move_forward());
        assert!(!focus.move_backward());
        assert_eq!(focus.focused(), Some(1));
    }

    #[test]
    fn movement_in_idle_is_noop() {
        let mut focus = group(&[("a", false), ("b", false)]);
        assert!(!focus.move_forward());
        assert!(!focus.move_backward());
        assert!(!focus.jump_first());
        assert!(!focus.jump_last());
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn jump_first_and_last_respect_disabled_ends() {
        let mut focus = group(&[("a", true), ("b", false), ("c", false), ("d", true)]);
        focus.focus(2);
        assert!(focus.jump_first());
        assert_eq!(focus.focused(), Some(1));
        assert!(focus.jump_last());
        assert_eq!(focus.focused(), Some(2));
    }

    // --- Activation gating ---

    #[test]
    fn activate_reports_focused_index() {
        let mut focus = group(&[("a", false), ("b", false)]);
        focus.focus(1);
        assert_eq!(focus.activate(&EnabledGate), Some(1));
    }

    #[test]
    fn activate_in_idle_is_noop() {
        let focus = group(&[("a", false)]);
        assert_eq!(focus.activate(&EnabledGate), None);
    }

    #[test]
    fn activate_rejected_by_gate_is_silent() {
        struct DenyAll;
        impl ActivationGate for DenyAll {
            fn can_activate(&self, _index: usize, _item: &FocusItem) -> bool {
                false
            }
        }
        let mut focus = group(&[("a", false)]);
        focus.focus(0);
        assert_eq!(focus.activate(&DenyAll), None);
        assert_eq!(focus.focused(), Some(0));
    }

    // --- Key handling ---

    #[test]
    fn horizontal_binds_left_right() {
        let mut focus = group(&[("a", false), ("b", false), ("c", false)]);
        focus.focus(0);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Right), &EnabledGate);
        assert_eq!(out, NavOutcome::FocusMoved(1));
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Left), &EnabledGate);
        assert_eq!(out, NavOutcome::FocusMoved(0));
        // Vertical keys are not bound on a horizontal group.
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Down), &EnabledGate);
        assert_eq!(out, NavOutcome::Ignored);
    }

    #[test]
    fn vertical_binds_up_down() {
        let mut focus =
            group(&[("a", false), ("b", false)]).orientation(Orientation::Vertical);
        focus.focus(0);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Down), &EnabledGate);
        assert_eq!(out, NavOutcome::FocusMoved(1));
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Right), &EnabledGate);
        assert_eq!(out, NavOutcome::Ignored);
    }

    #[test]
    fn home_end_jump_to_enabled_extremes() {
        let mut focus = group(&[("a", false), ("b", false), ("c", false)]);
        focus.focus(1);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::End), &EnabledGate);
        assert_eq!(out, NavOutcome::FocusMoved(2));
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Home), &EnabledGate);
        assert_eq!(out, NavOutcome::FocusMoved(0));
    }

    #[test]
    fn enter_and_space_activate() {
        let mut focus = group(&[("a", false), ("b", false)]);
        focus.focus(1);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Enter), &EnabledGate);
        assert_eq!(out, NavOutcome::Activated(1));
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Char(' ')), &EnabledGate);
        assert_eq!(out, NavOutcome::Activated(1));
    }

    #[test]
    fn unhandled_key_is_ignored() {
        let mut focus = group(&[("a", false)]);
        focus.focus(0);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Char('x')), &EnabledGate);
        assert_eq!(out, NavOutcome::Ignored);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Tab), &EnabledGate);
        assert_eq!(out, NavOutcome::Ignored);
    }

    #[test]
    fn home_in_idle_is_ignored() {
        let mut focus = group(&[("a", false)]);
        let out = focus.handle_key(&KeyEvent::new(KeyCode::Home), &EnabledGate);
        assert_eq!(out, NavOutcome::Ignored);
    }

    // --- Item-list replacement (re-anchor policy) ---

    #[test]
    fn set_items_reanchors_by_id() {
        let mut focus = group(&[("a", false), ("b", false)]);
        focus.focus(1);
        focus.set_items(vec![
            FocusItem::new("x"),
            FocusItem::new("a"),
            FocusItem::new("b"),
        ]);
        assert_eq!(focus.focused(), Some(2));
    }

    #[test]
    fn set_items_resets_when_id_removed() {
        let mut focus = group(&[("a", false), ("b", false)]);
        focus.focus(1);
        focus.set_items(vec![FocusItem::new("a")]);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn set_items_resets_when_id_now_disabled() {
        let mut focus = group(&[("a", false), ("b", false)]);
        focus.focus(1);
        focus.set_items(vec![FocusItem::new("a"), FocusItem::new("b").disabled(true)]);
        assert_eq!(focus.focused(), None);
    }

    // --- Property: movement stays on enabled items ---

    #[test]
    fn property_focus_never_lands_on_disabled() {
        let mut focus = group(&[
            ("a", false),
            ("b", true),
            ("c", false),
            ("d", true),
            ("e", false),
        ]);
        focus.focus_first();
        for _ in 0..50 {
            focus.move_forward();
            let index = focus.focused().unwrap();
            assert!(!focus.items()[index].is_disabled());
        }
        for _ in 0..50 {
            focus.move_backward();
            let index = focus.focused().unwrap();
            assert!(!focus.items()[index].is_disabled());
        }
    }
}
