#![forbid(unsafe_code)]

//! Modal open/close lifecycle controller.
//!
//! # State machine
//!
//! ```text
//! Closed --(open())--> Open
//! Open --(close() | Escape)--> Closed
//! ```
//!
//! No other states or transitions exist. `open()` while already open is a
//! no-op; so is `close()` while already closed.
//!
//! # Side-effect symmetry
//!
//! Every way of leaving `Open` — explicit `close()`, an Escape press in
//! `handle_key` — funnels through one internal transition that deactivates
//! the focus trap and releases the document effects. Side-effect reversal
//! therefore happens exactly once per open/close pair, on every exit path.
//!
//! # Close contract
//!
//! The controller reports closure through its return value rather than a
//! callback: the host reacts to [`CloseReason`] by flipping whatever state
//! of its own drives the overlay's visibility.

use focusgate_core::{Container, KeyCode, KeyEvent};

use super::ModalHost;
use super::effects::DocumentEffects;
use super::semantics::ModalSemantics;
use crate::focus::FocusScope;

/// Lifecycle phase of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
}

/// Why a modal left the `Open` phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// `close()` was called (close control, host decision).
    Explicit,
    /// Escape was pressed while open.
    Escape,
}

/// Result of routing a key event through an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Tab focus cycled at a trap boundary; the host must suppress its
    /// default focus movement for this event.
    FocusCycled,
    /// The modal closed.
    Closed(CloseReason),
}

/// Orchestrates a single modal's lifecycle: focus trap, document effects,
/// and escape dismissal.
#[derive(Debug, Clone)]
pub struct ModalController {
    phase: ModalPhase,
    scope: FocusScope,
    effects: DocumentEffects,
    semantics: ModalSemantics,
    close_on_escape: bool,
}

impl ModalController {
    /// Create a closed controller with the given dialog semantics.
    #[must_use]
    pub fn new(semantics: ModalSemantics) -> Self {
        Self {
            phase: ModalPhase::Closed,
            scope: FocusScope::new(),
            effects: DocumentEffects::new(),
            semantics,
            close_on_escape: true,
        }
    }

    /// Set whether Escape closes the modal. Defaults to `true`.
    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set whether closing restores focus to the element focused before
    /// opening. Defaults to `true`.
    #[must_use]
    pub fn restore_focus(mut self, restore: bool) -> Self {
        self.scope = self.scope.restore_on_exit(restore);
        self
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the modal is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// The dialog semantics.
    #[must_use]
    pub fn semantics(&self) -> &ModalSemantics {
        &self.semantics
    }

    /// The composed focus scope.
    #[must_use]
    pub fn scope(&self) -> &FocusScope {
        &self.scope
    }

    /// Enter `Open`: acquire the document effects and activate the focus
    /// trap over `container`. No-op if already open.
    pub fn open(&mut self, container: &Container, host: &mut impl ModalHost) {
        if self.is_open() {
            return;
        }
        self.effects.acquire(host);
        self.scope.activate(container, host);
        self.phase = ModalPhase::Open;

        #[cfg(feature = "tracing")]
        tracing::debug!(title = self.semantics.title(), "modal opened");
    }

    /// Enter `Closed`, reversing every open-time side effect. Returns
    /// `None` if already closed.
    pub fn close(&mut self, host: &mut impl ModalHost) -> Option<CloseReason> {
        self.leave(host, CloseReason::Explicit)
    }

    /// Route a key event through the modal.
    ///
    /// Returns `None` while closed and for keys the modal does not act on.
    /// Escape (when enabled) closes and reports it; Tab is forwarded to
    /// the focus trap.
    pub fn handle_key(&mut self, host: &mut impl ModalHost, key: &KeyEvent) -> Option<ModalAction> {
        if !self.is_open() {
            return None;
        }
        if self.close_on_escape && key.is_press() && key.code == KeyCode::Escape {
            return self
                .leave(host, CloseReason::Escape)
                .map(ModalAction::Closed);
        }
        if self.scope.handle_key(host, key) {
            return Some(ModalAction::FocusCycled);
        }
        None
    }

    /// The single exit transition from `Open`.
    fn leave(&mut self, host: &mut impl ModalHost, reason: CloseReason) -> Option<CloseReason> {
        if !self.is_open() {
            return None;
        }
        self.phase = ModalPhase::Closed;
        self.scope.deactivate(host);
        self.effects.release(host);

        #[cfg(feature = "tracing")]
        tracing::debug!(title = self.semantics.title(), ?reason, "modal closed");

        Some(reason)
    }
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(ModalSemantics::default())
    }
}
