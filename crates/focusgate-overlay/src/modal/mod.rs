#![forbid(unsafe_code)]

//! Modal overlay lifecycle: open/close orchestration, document side
//! effects, dialog semantics, and the nested-modal stack.
//!
//! # Pieces
//!
//! - [`ModalController`]: the closed/open state machine for a single
//!   modal. Opening acquires the document-global side effects (scroll
//!   lock, background hiding) and activates a focus trap; closing reverses
//!   both, unconditionally, on every exit path.
//! - [`DocumentEffects`]: scoped acquisition of those global side effects,
//!   idempotent by construction (a single held/released toggle).
//! - [`ModalSemantics`]: dialog role semantics for assistive technology
//!   (modal role, labelled by its title).
//! - [`ModalStack`]: LIFO stack of modals for nesting; only the top entry
//!   receives input, and the global resources are acquired once for the
//!   whole stack.
//!
//! # Resource model
//!
//! The scroll lock and background-hidden marking are process-wide
//! singleton resources. A single [`ModalController`] holds them
//! exclusively while open; concurrent independent controllers over the
//! same document are unsupported. Use [`ModalStack`] when more than one
//! modal must be open at a time.

mod controller;
mod effects;
mod semantics;
mod stack;

pub use controller::{CloseReason, ModalAction, ModalController, ModalPhase};
pub use effects::{DocumentEffects, DocumentHost};
pub use semantics::ModalSemantics;
pub use stack::{ModalId, ModalOptions, ModalOutcome, ModalStack, StackAction};

use crate::focus::FocusHost;

/// Everything a modal needs from its embedding runtime: a focus surface
/// plus the document-global side-effect switches.
pub trait ModalHost: FocusHost + DocumentHost {}

impl<T: FocusHost + DocumentHost> ModalHost for T {}
