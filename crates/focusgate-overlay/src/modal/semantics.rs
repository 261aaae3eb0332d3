#![forbid(unsafe_code)]

//! Dialog semantics for assistive technology.
//!
//! A modal overlay carries a dialog role, is labelled by its title, and —
//! when marked modal — signals that interaction with background content is
//! blocked. Hosts surface these through whatever announcement channel
//! their platform provides.

/// Assistive-technology semantics for a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSemantics {
    title: String,
    aria_modal: bool,
}

impl ModalSemantics {
    /// Create dialog semantics labelled by `title`, marked modal.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            aria_modal: true,
        }
    }

    /// Set whether this dialog blocks interaction with background content.
    /// Defaults to `true`.
    #[must_use]
    pub fn with_aria_modal(mut self, aria_modal: bool) -> Self {
        self.aria_modal = aria_modal;
        self
    }

    /// The dialog's label.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether background interaction is blocked.
    #[must_use]
    pub fn aria_modal(&self) -> bool {
        self.aria_modal
    }

    /// The announcement string a host hands to its screen-reader channel
    /// when the dialog opens.
    #[must_use]
    pub fn announcement(&self) -> String {
        if self.aria_modal {
            format!("{}, modal dialog", self.title)
        } else {
            format!("{}, dialog", self.title)
        }
    }
}

impl Default for ModalSemantics {
    fn default() -> Self {
        Self::new("Dialog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_announcement() {
        let semantics = ModalSemantics::new("Confirm delete");
        assert!(semantics.aria_modal());
        assert_eq!(semantics.announcement(), "Confirm delete, modal dialog");
    }

    #[test]
    fn non_modal_announcement() {
        let semantics = ModalSemantics::new("Hints").with_aria_modal(false);
        assert_eq!(semantics.announcement(), "Hints, dialog");
    }

    #[test]
    fn title_accessor() {
        let semantics = ModalSemantics::new("Settings");
        assert_eq!(semantics.title(), "Settings");
    }
}
