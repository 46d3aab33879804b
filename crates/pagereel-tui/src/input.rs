use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FlickForward,
    FlickBackward,
    FirstPage,
    LastPage,
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key dismisses the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Shifted punctuation (e.g. '?') arrives with SHIFT set on some
    // terminals; bindings for those chars are stored without it
    if let KeyCode::Char(_) = key.code {
        if key.modifiers == KeyModifiers::SHIFT {
            let unshifted = KeyBinding::simple(key.code);
            return keymap.get(&unshifted).copied().unwrap_or(Action::None);
        }
    }

    Action::None
}
