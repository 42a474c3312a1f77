//! Tab-key containment for modal dialogs.
//!
//! DESIGN
//! ======
//! The ring is built from an explicit ordered list of focus targets supplied
//! by the dialog, not from DOM queries, so wrap behavior can be tested with
//! plain values. Only the two boundary moves are intercepted; Tab between
//! interior controls keeps the browser's default order.

#[cfg(test)]
#[path = "focus_trap_test.rs"]
mod focus_trap_test;

/// Ordered focus targets of one dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusRing<T> {
    targets: Vec<T>,
}

impl<T: PartialEq> FocusRing<T> {
    pub fn new(targets: Vec<T>) -> Self {
        Self { targets }
    }

    /// Target that receives focus when the dialog opens.
    pub fn initial(&self) -> Option<&T> {
        self.targets.first()
    }

    /// Where focus must jump for a Tab (or Shift+Tab when `backwards`) from
    /// `active`. `None` means the default browser move stays inside the ring.
    pub fn wrap_target(&self, active: Option<&T>, backwards: bool) -> Option<&T> {
        let first = self.targets.first()?;
        let last = self.targets.last()?;
        let active = active?;
        if backwards && active == first {
            Some(last)
        } else if !backwards && active == last {
            Some(first)
        } else {
            None
        }
    }
}

/// Whether a `KeyboardEvent.key` value is the Tab key.
pub fn is_tab_key(key: &str) -> bool {
    key == "Tab"
}
