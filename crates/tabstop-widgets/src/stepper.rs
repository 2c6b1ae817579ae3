#![forbid(unsafe_code)]

//! Wizard stepper: step tabs behind one roving tab stop.
//!
//! Combines one [`RovingFocus`] with one [`SelectionModel`]. In linear mode
//! the activation gate additionally blocks forward jumps: a step tab may
//! only be (re)activated if it is the current step or an earlier one.
//! Activating a future step is always rejected, whether by keyboard or by
//! click, and regardless of the step's `disabled` flag. Non-linear steppers
//! use the default enabled-only gate.
//!
//! Focus movement is unrestricted in both modes; the user may rove across
//! future steps to read them, only activation is gated.

use crate::ItemView;
use crate::focus::{ActivationGate, EnabledGate, FocusItem, NavOutcome, RovingFocus};
use crate::selection::{SelectionChange, SelectionModel};
use tabstop_core::event::KeyEvent;

/// One step tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: String,
    label: String,
    disabled: bool,
}

impl Step {
    /// Create an enabled step.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Set whether this step is disabled.
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

    /// Whether this step is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Linear-mode gate: enabled steps at or before the active index.
#[derive(Debug, Clone, Copy)]
pub struct LinearGate {
    /// Index of the currently active step.
    pub active_index: usize,
}

impl ActivationGate for LinearGate {
    fn can_activate(&self, index: usize, item: &FocusItem) -> bool {
        !item.is_disabled() && index <= self.active_index
    }
}

/// A wizard step row with roving focus and gated activation.
#[derive(Debug, Clone)]
pub struct Stepper {
    steps: Vec<Step>,
    focus: RovingFocus,
    selection: SelectionModel,
    linear: bool,
}

impl Stepper {
    /// An uncontrolled stepper; `active` defaults to the first step when
    /// not supplied.
    #[must_use]
    pub fn uncontrolled(steps: Vec<Step>, active: Option<&str>) -> Self {
        let default = active
            .map(str::to_owned)
            .or_else(|| steps.first().map(|step| step.id().to_owned()));
        let selection = SelectionModel::uncontrolled(default.as_deref());
        Self::build(steps, selection)
    }

    /// A controlled stepper displaying the caller-supplied active step.
    #[must_use]
    pub fn controlled(steps: Vec<Step>, active: Option<&str>) -> Self {
        let selection = SelectionModel::controlled(active);
        Self::build(steps, selection)
    }

    fn build(steps: Vec<Step>, selection: SelectionModel) -> Self {
        let focus = RovingFocus::new(Self::focus_items(&steps));
        Self {
            steps,
            focus,
            selection,
            linear: false,
        }
    }

    /// Enable linear mode (forward activation blocked).
    #[must_use]
    pub const fn linear(mut self, linear: bool) -> Self {
        self.linear = linear;
        self
    }

    /// Immutable step slice.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Id of the active step.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Index of the active step; 0 when no step is selected.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.selection
            .selected()
            .and_then(|id| self.steps.iter().position(|step| step.id() == id))
            .unwrap_or(0)
    }

    /// Index currently holding the tab stop, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Focus the first enabled step.
    pub fn focus_first(&mut self) -> bool {
        self.focus.focus_first()
    }

    /// Move the tab stop to the step at `index`.
    pub fn focus(&mut self, index: usize) -> bool {
        self.focus.focus(index)
    }

    /// Release the tab stop.
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Feed a key event. Arrows rove freely across all enabled steps;
    /// Enter/Space activates through the mode's gate.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<SelectionChange> {
        let outcome = if self.linear {
            let gate = LinearGate {
                active_index: self.active_index(),
            };
            self.focus.handle_key(key, &gate)
        } else {
            self.focus.handle_key(key, &EnabledGate)
        };
        match outcome {
            NavOutcome::Activated(index) => self.select_index(index),
            NavOutcome::FocusMoved(_) | NavOutcome::Ignored => None,
        }
    }

    /// Activate the focused step through the mode's gate.
    pub fn activate_focused(&mut self) -> Option<SelectionChange> {
        let index = if self.linear {
            let gate = LinearGate {
                active_index: self.active_index(),
            };
            self.focus.activate(&gate)
        } else {
            self.focus.activate(&EnabledGate)
        }?;
        self.select_index(index)
    }

    /// Activate the step at `index` directly (the click path).
    ///
    /// Subject to the same gate as keyboard activation: linear mode
    /// rejects future steps outright.
    pub fn activate_at(&mut self, index: usize) -> Option<SelectionChange> {
        let item = self.focus.items().get(index)?;
        let allowed = if self.linear {
            LinearGate {
                active_index: self.active_index(),
            }
            .can_activate(index, item)
        } else {
            EnabledGate.can_activate(index, item)
        };
        if !allowed {
            return None;
        }
        self.select_index(index)
    }

    /// Track an externally supplied controlled value.
    pub fn sync_value(&mut self, value: Option<&str>) {
        self.selection.sync(value);
    }

    /// Replace the step list. Focus re-anchors by id.
    pub fn set_steps(&mut self, steps: Vec<Step>) {
        self.focus.set_items(Self::focus_items(&steps));
        self.steps = steps;
    }

    /// Per-step view state for the renderer.
    #[must_use]
    pub fn views(&self) -> Vec<ItemView> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| ItemView {
                id: step.id().to_owned(),
                label: step.label().to_owned(),
                selected: self.selection.is_selected(step.id()),
                disabled: step.is_disabled(),
                focused: self.focus.focused() == Some(index),
            })
            .collect()
    }

    fn select_index(&mut self, index: usize) -> Option<SelectionChange> {
        let id = self.steps.get(index)?.id().to_owned();
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "stepper.activate", index, id = id.as_str());
        self.selection.select(&id, self.focus.items())
    }

    fn focus_items(steps: &[Step]) -> Vec<FocusItem> {
        steps
            .iter()
            .map(|step| FocusItem::new(step.id()).disabled(step.is_disabled()))
            .collect()
    }
}
