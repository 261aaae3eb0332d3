#![forbid(unsafe_code)]

//! Focus scope: a cyclical keyboard-focus boundary over a container.
//!
//! # Lifecycle
//!
//! [`FocusScope::activate`] snapshots the container's focusable set,
//! records the previously focused element, and moves focus to the first
//! element of the snapshot. [`FocusScope::deactivate`] clears the snapshot
//! and (by default) restores focus to the recorded element. Both are
//! idempotent: activation and deactivation are a single toggle, so
//! repeated calls cannot double-install or double-remove the interceptor.
//!
//! # Snapshot policy
//!
//! The focusable set is computed once, at activation. Elements added to or
//! removed from the container while the scope is active do not participate
//! in the tab cycle until the next activation. This is a deliberate
//! trade-off: the cost of continuous subtree observation is not worth it
//! for dialog-sized containers, and re-activation is the supported refresh
//! path.
//!
//! # Invariants
//!
//! - `handle_key` consumes a key only while active, only for Tab presses,
//!   and only at the cycle boundaries.
//! - Deactivation releases everything activation installed; no state is
//!   retained across an activate/deactivate pair.
//!
//! # Failure Modes
//!
//! - Empty focusable set: activation moves no focus; Tab passes through.
//! - Focus outside the snapshot: Tab passes through (host default order).

use focusgate_core::{Container, ElementId, KeyCode, KeyEvent, Modifiers};

/// The embedding runtime's focus surface.
///
/// `set_focus(None)` clears focus (blur). Hosts may ignore requests for
/// ids they no longer know about; the scope never treats that as an error.
pub trait FocusHost {
    /// The currently focused element, if any.
    fn focused(&self) -> Option<ElementId>;

    /// Move focus to the given element, or clear it with `None`.
    fn set_focus(&mut self, id: Option<ElementId>);
}

/// Traps Tab focus within a container while active.
#[derive(Debug, Clone, Default)]
pub struct FocusScope {
    active: bool,
    order: Vec<ElementId>,
    restore_to: Option<ElementId>,
    restore_on_exit: bool,
}

impl FocusScope {
    /// Create an inactive scope with focus restoration enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: false,
            order: Vec::new(),
            restore_to: None,
            restore_on_exit: true,
        }
    }

    /// Set whether deactivation restores focus to the element that was
    /// focused at activation time. Defaults to `true`.
    #[must_use]
    pub fn restore_on_exit(mut self, restore: bool) -> Self {
        self.restore_on_exit = restore;
        self
    }

    /// Whether the scope is currently trapping focus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The focusable snapshot taken at activation (empty while inactive).
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.order
    }

    /// First element of the snapshot.
    #[must_use]
    pub fn first(&self) -> Option<ElementId> {
        self.order.first().copied()
    }

    /// Last element of the snapshot.
    #[must_use]
    pub fn last(&self) -> Option<ElementId> {
        self.order.last().copied()
    }

    /// Activate the scope over `container`.
    ///
    /// Snapshots the focusable set, records the current focus for later
    /// restoration, and moves focus to the first element of the snapshot
    /// unless it is already focused. No-op if already active.
    pub fn activate(&mut self, container: &Container, host: &mut impl FocusHost) {
        if self.active {
            return;
        }
        self.order = container.focusables();
        self.restore_to = host.focused();
        self.active = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(elements = self.order.len(), "focus scope activated");

        if let Some(first) = self.first()
            && host.focused() != Some(first)
        {
            host.set_focus(Some(first));
        }
    }

    /// Deactivate the scope, restoring focus if configured. No-op if
    /// already inactive.
    pub fn deactivate(&mut self, host: &mut impl FocusHost) {
        if !self.active {
            return;
        }
        self.active = false;
        self.order.clear();

        #[cfg(feature = "tracing")]
        tracing::debug!(restore = self.restore_on_exit, "focus scope deactivated");

        let restore_to = self.restore_to.take();
        if self.restore_on_exit {
            host.set_focus(restore_to);
        }
    }

    /// Deactivate without touching host focus.
    ///
    /// Used when a scope is being discarded from under another overlay and
    /// its restoration target is no longer meaningful.
    pub fn abandon(&mut self) {
        self.active = false;
        self.order.clear();
        self.restore_to = None;
    }

    /// The key interceptor.
    ///
    /// Returns `true` when the event was consumed (focus cycled at a trap
    /// boundary) and the host must suppress its default tab behavior;
    /// `false` lets the default order proceed.
    pub fn handle_key(&self, host: &mut impl FocusHost, key: &KeyEvent) -> bool {
        if !self.active || !key.is_press() || key.code != KeyCode::Tab {
            return false;
        }
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            // Empty snapshot: nothing to cycle.
            return false;
        };

        let focused = host.focused();
        let reverse = key.modifiers.contains(Modifiers::SHIFT);

        if reverse && focused == Some(first) {
            host.set_focus(Some(last));
            true
        } else if !reverse && focused == Some(last) {
            host.set_focus(Some(first));
            true
        } else {
            false
        }
    }
}
