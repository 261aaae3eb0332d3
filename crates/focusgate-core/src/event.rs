#![forbid(unsafe_code)]

//! Keyboard input model.
//!
//! Hosts forward their full key stream; only `Tab` and `Escape` carry
//! behavior in this library. The remaining codes exist so callers do not
//! have to pre-filter events before handing them over.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state attached to a [`KeyEvent`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
    }
}

/// Key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Forward tab. Combined with [`Modifiers::SHIFT`] for reverse tab.
    Tab,
    /// Escape / dismiss.
    Escape,
    /// Enter / activate.
    Enter,
    /// A printable character.
    Char(char),
}

/// Press/release discrimination.
///
/// Only `Press` events trigger behavior; releases are accepted and ignored
/// so hosts that report both do not need to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a press event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifier state.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// A forward-tab press.
    #[must_use]
    pub const fn tab() -> Self {
        Self::new(KeyCode::Tab)
    }

    /// A reverse-tab press (Shift held).
    #[must_use]
    pub const fn shift_tab() -> Self {
        Self::new(KeyCode::Tab).with_modifiers(Modifiers::SHIFT)
    }

    /// An escape press.
    #[must_use]
    pub const fn escape() -> Self {
        Self::new(KeyCode::Escape)
    }

    /// Whether this is a press event.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press)
    }
}
