#![forbid(unsafe_code)]

//! Single-selection model for peer groups.
//!
//! Holds the one selected identifier of a radio group, stepper, or
//! pagination row, in either controlled or uncontrolled operation:
//!
//! - **Controlled**: the authoritative value lives in the caller. `select`
//!   never mutates the stored value; it only reports the accepted change,
//!   and the caller syncs back whatever it renders next.
//! - **Uncontrolled**: the value lives here. `select` stores it, then
//!   reports the change.
//!
//! Selection is mutated only by explicit activation; pure focus movement in
//! button-style groups never reaches this model. Native grouped inputs that
//! change selection on their own are a second, independent trigger — both
//! paths route through [`SelectionModel::select`].

use crate::focus::FocusItem;

/// Where the authoritative selected value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// The caller owns the value and passes it back in on every render.
    Controlled,

    /// The model owns the value.
    Uncontrolled,
}

/// An accepted selection change, reported exactly once per accepted
/// `select`. The caller forwards this to its own change listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// The newly selected identifier.
    pub id: String,
}

/// Selection state for one peer group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    value: Option<String>,
    source: SelectionSource,
}

impl SelectionModel {
    /// A controlled model displaying the caller-supplied value.
    #[must_use]
    pub fn controlled(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_owned),
            source: SelectionSource::Controlled,
        }
    }

    /// An uncontrolled model with an optional internal default.
    #[must_use]
    pub fn uncontrolled(default: Option<&str>) -> Self {
        Self {
            value: default.map(str::to_owned),
            source: SelectionSource::Uncontrolled,
        }
    }

    /// Where the authoritative value lives.
    #[must_use]
    pub const fn source(&self) -> SelectionSource {
        self.source
    }

    /// The currently displayed selection.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether `id` is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.value.as_deref() == Some(id)
    }

    /// Request selection of `id`.
    ///
    /// An id not present in `known` is rejected silently. Re-selecting the
    /// current value is accepted and reported again (idempotent
    /// re-selection). Controlled models report without mutating.
    pub fn select(&mut self, id: &str, known: &[FocusItem]) -> Option<SelectionChange> {
        if !known.iter().any(|item| item.id() == id) {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "selection.select", id, source = ?self.source);
        if self.source == SelectionSource::Uncontrolled {
            self.value = Some(id.to_owned());
        }
        Some(SelectionChange { id: id.to_owned() })
    }

    /// Track an externally supplied controlled value.
    ///
    /// The displayed value follows the caller unconditionally; no internal
    /// caching overrides an explicit controlled value.
    pub fn sync(&mut self, value: Option<&str>) {
        self.value = value.map(str::to_owned);
    }
}
