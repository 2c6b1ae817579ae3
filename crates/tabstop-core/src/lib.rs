#![forbid(unsafe_code)]

//! Core: canonical input and event types for tabstop.
//!
//! # Role in tabstop
//! `tabstop-core` is the input layer. It owns the normalized event types the
//! widget-state controllers consume. The library is headless: there is no
//! terminal or DOM backend here, the host application translates whatever
//! input it receives into these types and feeds them to the controllers in
//! `tabstop-widgets`.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, focus gained/lost).
//! - **KeyEvent / KeyCode / Modifiers**: normalized keyboard input.
//!
//! # How it fits in the system
//! Controllers in `tabstop-widgets` expose `handle_key(&KeyEvent, ..)` entry
//! points and never read input themselves, so every transition is driven by
//! a value the host constructed. That keeps the state machines deterministic
//! and directly testable.

pub mod event;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
