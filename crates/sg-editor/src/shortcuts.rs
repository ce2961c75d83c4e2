//! Keyboard shortcut mapping for the presenter.
//!
//! Maps `KeyboardEvent.key`-style names to semantic `PresenterAction`s so
//! every front end (CLI, browser shell) shares one key map.

/// Actions a key press can trigger while presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterAction {
    Next,
    Prev,
    First,
    Last,
    ToggleAutoplay,
    Exit,
}

/// Resolves key names into presenter actions.
pub struct PresenterKeys;

impl PresenterKeys {
    /// Resolve a key name (e.g. `"ArrowRight"`, `" "`) to an action.
    /// Returns `None` if the key has no binding.
    pub fn resolve(key: &str) -> Option<PresenterAction> {
        match key {
            "Escape" => Some(PresenterAction::Exit),
            "ArrowRight" | "PageDown" | " " | "Spacebar" => Some(PresenterAction::Next),
            "ArrowLeft" | "PageUp" => Some(PresenterAction::Prev),
            "Home" => Some(PresenterAction::First),
            "End" => Some(PresenterAction::Last),
            "p" | "P" => Some(PresenterAction::ToggleAutoplay),
            _ => None,
        }
    }
}
