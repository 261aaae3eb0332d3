#![forbid(unsafe_code)]

//! Focus trap and modal overlay lifecycle primitives.
//!
//! Two cooperating pieces:
//!
//! - [`focus::FocusScope`]: traps keyboard Tab navigation within the
//!   focusable elements of a container while active, and releases cleanly
//!   (with optional focus restoration) when deactivated.
//! - [`modal::ModalController`]: a closed/open state machine that composes
//!   a `FocusScope` with the document-global overlay side effects (scroll
//!   lock, background hiding) and escape-key dismissal.
//!
//! [`modal::ModalStack`] extends the controller to nested modals with
//! LIFO ordering and stack-managed acquisition of the global resources.
//!
//! The library is host-agnostic: all external effects flow through the
//! [`focus::FocusHost`] and [`modal::DocumentHost`] traits the embedding
//! runtime implements. There is no rendering, no I/O, and no async — every
//! operation is a synchronous reaction to a host event.

pub mod focus;
pub mod modal;

pub use focus::{FocusHost, FocusScope};
pub use modal::{
    CloseReason, DocumentEffects, DocumentHost, ModalAction, ModalController, ModalHost, ModalId,
    ModalOptions, ModalOutcome, ModalPhase, ModalSemantics, ModalStack, StackAction,
};
