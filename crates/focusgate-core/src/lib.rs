#![forbid(unsafe_code)]

//! Host-independent data model for focusgate.
//!
//! Two pieces live here:
//!
//! - [`event`]: the keyboard input model ([`KeyEvent`], [`KeyCode`],
//!   [`Modifiers`]) that focus scopes and modal controllers consume.
//! - [`element`]: the element/container model ([`Element`], [`Container`])
//!   that focusable-set queries run over.
//!
//! Nothing in this crate touches a terminal, a DOM, or any other UI
//! runtime. Hosts translate their native input and widget tree into these
//! types at the boundary.

pub mod element;
pub mod event;

pub use element::{Container, Element, ElementId, Role};
pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
