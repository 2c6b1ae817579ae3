#![forbid(unsafe_code)]

//! Radio group: mutually-exclusive options behind one roving tab stop.
//!
//! Combines one [`RovingFocus`] with one [`SelectionModel`]. The default
//! activation gate applies: any enabled option may be selected, with no
//! ordering restriction.
//!
//! Selection has two independent but consistent triggers:
//!
//! 1. explicit activation (Enter/Space on the focused option, or a click
//!    routed through [`RadioGroup::activate_focused`]), and
//! 2. the platform's own grouped-input behavior for native radio inputs,
//!    reported through [`RadioGroup::native_change`].
//!
//! Both paths route through the same selection model. Pure focus movement
//! on this controller never mutates the selection; for native radios the
//! platform itself may select on focus, which arrives here as a
//! `native_change`.

use crate::ItemView;
use crate::focus::{EnabledGate, FocusItem, NavOutcome, Orientation, RovingFocus};
use crate::selection::{SelectionChange, SelectionModel};
use tabstop_core::event::KeyEvent;

/// One option in a radio group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    id: String,
    label: String,
    disabled: bool,
}

impl RadioOption {
    /// Create an enabled option.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Set whether this option is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this option is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A group of mutually-exclusive options with roving focus.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    options: Vec<RadioOption>,
    focus: RovingFocus,
    selection: SelectionModel,
}

impl RadioGroup {
    /// An uncontrolled group with an optional default selection.
    #[must_use]
    pub fn uncontrolled(options: Vec<RadioOption>, default: Option<&str>) -> Self {
        let selection = SelectionModel::uncontrolled(default);
        Self::build(options, selection)
    }

    /// A controlled group displaying the caller-supplied value.
    #[must_use]
    pub fn controlled(options: Vec<RadioOption>, value: Option<&str>) -> Self {
        let selection = SelectionModel::controlled(value);
        Self::build(options, selection)
    }

    fn build(options: Vec<RadioOption>, selection: SelectionModel) -> Self {
        let focus = RovingFocus::new(Self::focus_items(&options));
        Self {
            options,
            focus,
            selection,
        }
    }

    /// Set the arrow-key orientation (horizontal by default).
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.focus = self.focus.orientation(orientation);
        self
    }

    /// Immutable option slice.
    #[must_use]
    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    /// The currently displayed selection.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Index currently holding the tab stop, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Focus the first enabled option.
    pub fn focus_first(&mut self) -> bool {
        self.focus.focus_first()
    }

    /// Move the tab stop to the option at `index`.
    pub fn focus(&mut self, index: usize) -> bool {
        self.focus.focus(index)
    }

    /// Release the tab stop.
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Feed a key event. Arrow keys move the tab stop without touching the
    /// selection; Enter/Space activates the focused option.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<SelectionChange> {
        match self.focus.handle_key(key, &EnabledGate) {
            NavOutcome::Activated(index) => self.select_index(index),
            NavOutcome::FocusMoved(_) | NavOutcome::Ignored => None,
        }
    }

    /// Activate the focused option (explicit trigger).
    pub fn activate_focused(&mut self) -> Option<SelectionChange> {
        let index = self.focus.activate(&EnabledGate)?;
        self.select_index(index)
    }

    /// A native grouped input changed selection on its own (second
    /// trigger). Routes through the same selection model; focus follows
    /// the natively selected option when it is enabled.
    pub fn native_change(&mut self, id: &str) -> Option<SelectionChange> {
        let index = self.options.iter().position(|option| option.id() == id)?;
        if self.options[index].is_disabled() {
            return None;
        }
        self.focus.focus(index);
        self.selection.select(id, self.focus.items())
    }

    /// Track an externally supplied controlled value.
    pub fn sync_value(&mut self, value: Option<&str>) {
        self.selection.sync(value);
    }

    /// Replace the option list. Focus re-anchors by id; a selection whose
    /// id disappeared stays as-is until the caller syncs or selects.
    pub fn set_options(&mut self, options: Vec<RadioOption>) {
        self.focus.set_items(Self::focus_items(&options));
        self.options = options;
    }

    /// Per-option view state for the renderer.
    #[must_use]
    pub fn views(&self) -> Vec<ItemView> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| ItemView {
                id: option.id().to_owned(),
                label: option.label().to_owned(),
                selected: self.selection.is_selected(option.id()),
                disabled: option.is_disabled(),
                focused: self.focus.focused() == Some(index),
            })
            .collect()
    }

    fn select_index(&mut self, index: usize) -> Option<SelectionChange> {
        let id = self.options.get(index)?.id().to_owned();
        self.selection.select(&id, self.focus.items())
    }

    fn focus_items(options: &[RadioOption]) -> Vec<FocusItem> {
        options
            .iter()
            .map(|option| FocusItem::new(option.id()).disabled(option.is_disabled()))
            .collect()
    }
}
