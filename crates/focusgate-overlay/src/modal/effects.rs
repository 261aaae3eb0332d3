#![forbid(unsafe_code)]

//! Scoped acquisition of document-global overlay side effects.
//!
//! Opening a modal mutates two pieces of process-wide state: the document
//! scroll lock and the hidden-from-assistive-technology marking on
//! background content. [`DocumentEffects`] pairs those mutations behind a
//! single acquire/release toggle so that:
//!
//! - acquisition applies each effect exactly once, no matter how many
//!   times `acquire` is called;
//! - release reverses each effect exactly once, in reverse order of
//!   application, no matter how many times `release` is called.
//!
//! # Invariants
//!
//! - After any call sequence, the number of lock applications and lock
//!   releases differ by at most one, and are equal whenever `is_held()`
//!   is false.

/// The embedding runtime's document surface.
pub trait DocumentHost {
    /// Lock or unlock background document scrolling.
    fn set_scroll_lock(&mut self, locked: bool);

    /// Hide background content from assistive technology, or reveal it.
    fn set_background_hidden(&mut self, hidden: bool);
}

/// Held/released toggle over the document-global overlay effects.
#[derive(Debug, Clone, Default)]
pub struct DocumentEffects {
    held: bool,
}

impl DocumentEffects {
    /// Create released effects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the effects are currently applied.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Apply scroll lock and background hiding. Idempotent.
    pub fn acquire(&mut self, host: &mut impl DocumentHost) {
        if self.held {
            return;
        }
        self.held = true;
        host.set_scroll_lock(true);
        host.set_background_hidden(true);

        #[cfg(feature = "tracing")]
        tracing::trace!("document effects acquired");
    }

    /// Reverse both effects, in reverse order of application. Idempotent.
    pub fn release(&mut self, host: &mut impl DocumentHost) {
        if !self.held {
            return;
        }
        self.held = false;
        host.set_background_hidden(false);
        host.set_scroll_lock(false);

        #[cfg(feature = "tracing")]
        tracing::trace!("document effects released");
    }
}
