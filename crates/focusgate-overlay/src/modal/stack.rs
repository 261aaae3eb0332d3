#![forbid(unsafe_code)]

//! Modal stack for nested modals with LIFO ordering.
//!
//! A single [`ModalController`](super::ModalController) owns the
//! document-global resources exclusively, which rules out nesting. The
//! stack replaces that boolean ownership with stack-managed acquisition:
//! the effects are acquired when the first modal is pushed and released
//! when the last one is popped, and each entry carries its own focus
//! scope, whose restoration snapshot chains focus back through the stack
//! as modals close.
//!
//! # Invariants
//!
//! - Entries are strictly LIFO-ordered; only the top entry receives input.
//! - The document effects are held iff the stack is non-empty.
//! - Popping restores focus to whatever was focused when that modal
//!   opened (for the bottom entry, the pre-stack focus).
//!
//! # Failure Modes
//!
//! - `pop()` on an empty stack returns `None` (no panic).
//! - `pop_id()` for a non-existent id returns `None`.
//! - `pop_id()` for a non-top entry skips focus restoration: its recorded
//!   focus target sits under the modals still above it.

use std::sync::atomic::{AtomicU64, Ordering};

use focusgate_core::{Container, KeyCode, KeyEvent};

use super::ModalHost;
use super::controller::CloseReason;
use super::effects::DocumentEffects;
use super::semantics::ModalSemantics;
use crate::focus::FocusScope;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a modal in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

impl ModalId {
    fn next() -> Self {
        Self(MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Per-modal configuration for [`ModalStack::push`].
#[derive(Debug, Clone)]
pub struct ModalOptions {
    semantics: ModalSemantics,
    close_on_escape: bool,
    restore_focus: bool,
}

impl ModalOptions {
    /// Options with the given dialog semantics, Escape enabled, and focus
    /// restoration enabled.
    #[must_use]
    pub fn new(semantics: ModalSemantics) -> Self {
        Self {
            semantics,
            close_on_escape: true,
            restore_focus: true,
        }
    }

    /// Set whether Escape closes this modal.
    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set whether popping this modal restores the previous focus.
    #[must_use]
    pub fn restore_focus(mut self, restore: bool) -> Self {
        self.restore_focus = restore;
        self
    }
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self::new(ModalSemantics::default())
    }
}

/// Result returned when a stacked modal closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOutcome {
    /// The modal that closed.
    pub id: ModalId,
    /// Why it closed.
    pub reason: CloseReason,
}

/// Result of routing a key event through the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAction {
    /// The top modal's focus trap cycled focus; suppress default tab
    /// behavior for this event.
    FocusCycled(ModalId),
    /// The top modal closed.
    Closed(ModalOutcome),
}

#[derive(Debug)]
struct StackEntry {
    id: ModalId,
    scope: FocusScope,
    semantics: ModalSemantics,
    close_on_escape: bool,
}

/// LIFO stack of modals sharing the document-global overlay effects.
#[derive(Debug, Default)]
pub struct ModalStack {
    entries: Vec<StackEntry>,
    effects: DocumentEffects,
}

impl ModalStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a modal, activating its focus trap over `container`.
    ///
    /// The first push acquires the document effects; later pushes reuse
    /// the held acquisition.
    pub fn push(
        &mut self,
        options: ModalOptions,
        container: &Container,
        host: &mut impl ModalHost,
    ) -> ModalId {
        if self.entries.is_empty() {
            self.effects.acquire(host);
        }

        let id = ModalId::next();
        let mut scope = FocusScope::new().restore_on_exit(options.restore_focus);
        scope.activate(container, host);

        self.entries.push(StackEntry {
            id,
            scope,
            semantics: options.semantics,
            close_on_escape: options.close_on_escape,
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.id(), depth = self.entries.len(), "modal pushed");

        id
    }

    /// Pop the top modal, restoring focus. The last pop releases the
    /// document effects.
    pub fn pop(&mut self, host: &mut impl ModalHost) -> Option<ModalOutcome> {
        self.remove_top(host, CloseReason::Explicit)
    }

    /// Pop a specific modal by id, from any position.
    ///
    /// Non-top entries are removed without focus restoration (see module
    /// docs).
    pub fn pop_id(&mut self, id: ModalId, host: &mut impl ModalHost) -> Option<ModalOutcome> {
        if self.top_id() == Some(id) {
            return self.pop(host);
        }
        let pos = self.entries.iter().position(|entry| entry.id == id)?;
        let mut entry = self.entries.remove(pos);
        entry.scope.abandon();
        Some(ModalOutcome {
            id: entry.id,
            reason: CloseReason::Explicit,
        })
    }

    /// Pop all modals in LIFO order (top first).
    pub fn pop_all(&mut self, host: &mut impl ModalHost) -> Vec<ModalOutcome> {
        let mut outcomes = Vec::with_capacity(self.entries.len());
        while let Some(outcome) = self.pop(host) {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Route a key event to the top modal only.
    pub fn handle_key(&mut self, host: &mut impl ModalHost, key: &KeyEvent) -> Option<StackAction> {
        let top = self.entries.last()?;
        let top_id = top.id;

        if top.close_on_escape && key.is_press() && key.code == KeyCode::Escape {
            return self
                .remove_top(host, CloseReason::Escape)
                .map(StackAction::Closed);
        }

        let top = self.entries.last_mut()?;
        if top.scope.handle_key(host, key) {
            return Some(StackAction::FocusCycled(top_id));
        }
        None
    }

    /// Number of open modals.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id of the top modal, if any.
    #[must_use]
    pub fn top_id(&self) -> Option<ModalId> {
        self.entries.last().map(|entry| entry.id)
    }

    /// Whether a modal with the given id is open.
    #[must_use]
    pub fn contains(&self, id: ModalId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Dialog semantics of a modal in the stack.
    #[must_use]
    pub fn semantics(&self, id: ModalId) -> Option<&ModalSemantics> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.semantics)
    }

    /// Whether the stack currently holds the document effects.
    #[must_use]
    pub fn holds_document(&self) -> bool {
        self.effects.is_held()
    }

    fn remove_top(
        &mut self,
        host: &mut impl ModalHost,
        reason: CloseReason,
    ) -> Option<ModalOutcome> {
        let mut entry = self.entries.pop()?;
        entry.scope.deactivate(host);
        if self.entries.is_empty() {
            self.effects.release(host);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(id = entry.id.id(), depth = self.entries.len(), "modal popped");

        Some(ModalOutcome {
            id: entry.id,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusHost;
    use crate::modal::DocumentHost;
    use focusgate_core::{Element, ElementId, Role};

    #[derive(Debug, Default)]
    struct TestHost {
        focused: Option<ElementId>,
        locks: u32,
        unlocks: u32,
        hides: u32,
        reveals: u32,
    }

    impl FocusHost for TestHost {
        fn focused(&self) -> Option<ElementId> {
            self.focused
        }

        fn set_focus(&mut self, id: Option<ElementId>) {
            self.focused = id;
        }
    }

    impl DocumentHost for TestHost {
        fn set_scroll_lock(&mut self, locked: bool) {
            if locked {
                self.locks += 1;
            } else {
                self.unlocks += 1;
            }
        }

        fn set_background_hidden(&mut self, hidden: bool) {
            if hidden {
                self.hides += 1;
            } else {
                self.reveals += 1;
            }
        }
    }

    fn container(ids: &[ElementId]) -> Container {
        ids.iter().map(|&id| Element::new(id, Role::Button)).collect()
    }

    #[test]
    fn empty_stack() {
        let stack = ModalStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.depth(), 0);
        assert!(stack.top_id().is_none());
        assert!(!stack.holds_document());
    }

    #[test]
    fn push_acquires_effects_once() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();

        stack.push(ModalOptions::default(), &container(&[1, 2]), &mut host);
        stack.push(ModalOptions::default(), &container(&[10, 11]), &mut host);

        assert_eq!(stack.depth(), 2);
        assert!(stack.holds_document());
        assert_eq!(host.locks, 1);
        assert_eq!(host.hides, 1);
    }

    #[test]
    fn pop_lifo_order() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        let id1 = stack.push(ModalOptions::default(), &container(&[1]), &mut host);
        let id2 = stack.push(ModalOptions::default(), &container(&[2]), &mut host);
        let id3 = stack.push(ModalOptions::default(), &container(&[3]), &mut host);

        assert_eq!(stack.pop(&mut host).map(|o| o.id), Some(id3));
        assert_eq!(stack.pop(&mut host).map(|o| o.id), Some(id2));
        assert_eq!(stack.pop(&mut host).map(|o| o.id), Some(id1));
        assert!(stack.pop(&mut host).is_none());
    }

    #[test]
    fn last_pop_releases_effects() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        stack.push(ModalOptions::default(), &container(&[1]), &mut host);
        stack.push(ModalOptions::default(), &container(&[2]), &mut host);

        stack.pop(&mut host);
        assert!(stack.holds_document());
        assert_eq!(host.unlocks, 0);

        stack.pop(&mut host);
        assert!(!stack.holds_document());
        assert_eq!(host.unlocks, 1);
        assert_eq!(host.reveals, 1);
    }

    #[test]
    fn focus_restoration_chains_through_the_stack() {
        let mut host = TestHost {
            focused: Some(100),
            ..TestHost::default()
        };
        let mut stack = ModalStack::new();

        stack.push(ModalOptions::default(), &container(&[1, 2]), &mut host);
        assert_eq!(host.focused, Some(1));

        stack.push(ModalOptions::default(), &container(&[10, 11]), &mut host);
        assert_eq!(host.focused, Some(10));

        stack.pop(&mut host);
        assert_eq!(host.focused, Some(1));

        stack.pop(&mut host);
        assert_eq!(host.focused, Some(100));
    }

    #[test]
    fn escape_closes_top_only() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        let id1 = stack.push(ModalOptions::default(), &container(&[1]), &mut host);
        let id2 = stack.push(ModalOptions::default(), &container(&[2]), &mut host);

        let action = stack.handle_key(&mut host, &KeyEvent::escape());
        assert_eq!(
            action,
            Some(StackAction::Closed(ModalOutcome {
                id: id2,
                reason: CloseReason::Escape,
            }))
        );
        assert_eq!(stack.top_id(), Some(id1));
    }

    #[test]
    fn escape_disabled_does_not_close() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        stack.push(
            ModalOptions::default().close_on_escape(false),
            &container(&[1]),
            &mut host,
        );

        assert_eq!(stack.handle_key(&mut host, &KeyEvent::escape()), None);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn tab_routes_to_top_scope() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        stack.push(ModalOptions::default(), &container(&[1, 2]), &mut host);
        let top = stack.push(ModalOptions::default(), &container(&[10, 11]), &mut host);

        host.focused = Some(11);
        let action = stack.handle_key(&mut host, &KeyEvent::tab());
        assert_eq!(action, Some(StackAction::FocusCycled(top)));
        assert_eq!(host.focused, Some(10));
    }

    #[test]
    fn keys_on_empty_stack_do_nothing() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        assert_eq!(stack.handle_key(&mut host, &KeyEvent::escape()), None);
    }

    #[test]
    fn pop_id_from_middle() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        let id1 = stack.push(ModalOptions::default(), &container(&[1]), &mut host);
        let id2 = stack.push(ModalOptions::default(), &container(&[2]), &mut host);
        let id3 = stack.push(ModalOptions::default(), &container(&[3]), &mut host);

        let focused_before = host.focused;
        let outcome = stack.pop_id(id2, &mut host);
        assert_eq!(outcome.map(|o| o.id), Some(id2));
        // Middle pops do not disturb focus.
        assert_eq!(host.focused, focused_before);
        assert!(stack.contains(id1));
        assert!(stack.contains(id3));
        assert!(!stack.contains(id2));
    }

    #[test]
    fn pop_id_of_top_behaves_like_pop() {
        let mut host = TestHost {
            focused: Some(100),
            ..TestHost::default()
        };
        let mut stack = ModalStack::new();
        let id = stack.push(ModalOptions::default(), &container(&[1]), &mut host);

        let outcome = stack.pop_id(id, &mut host);
        assert_eq!(outcome.map(|o| o.id), Some(id));
        assert_eq!(host.focused, Some(100));
        assert!(!stack.holds_document());
    }

    #[test]
    fn pop_id_unknown_returns_none() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        stack.push(ModalOptions::default(), &container(&[1]), &mut host);

        let bogus = ModalId(u64::MAX);
        assert!(stack.pop_id(bogus, &mut host).is_none());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn pop_all_drains_in_lifo_order() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        let id1 = stack.push(ModalOptions::default(), &container(&[1]), &mut host);
        let id2 = stack.push(ModalOptions::default(), &container(&[2]), &mut host);
        let id3 = stack.push(ModalOptions::default(), &container(&[3]), &mut host);

        let outcomes = stack.pop_all(&mut host);
        let ids: Vec<_> = outcomes.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![id3, id2, id1]);
        assert!(stack.is_empty());
        assert!(!stack.holds_document());
        assert_eq!(host.locks, host.unlocks);
    }

    #[test]
    fn unique_ids() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        let id1 = stack.push(ModalOptions::default(), &container(&[1]), &mut host);
        let id2 = stack.push(ModalOptions::default(), &container(&[2]), &mut host);
        assert_ne!(id1, id2);
    }

    #[test]
    fn semantics_lookup() {
        let mut host = TestHost::default();
        let mut stack = ModalStack::new();
        let id = stack.push(
            ModalOptions::new(ModalSemantics::new("Settings")),
            &container(&[1]),
            &mut host,
        );

        assert_eq!(stack.semantics(id).map(ModalSemantics::title), Some("Settings"));
        assert!(stack.semantics(ModalId(u64::MAX)).is_none());
    }
}
