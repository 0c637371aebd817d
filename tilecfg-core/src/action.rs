use serde::{Deserialize, Serialize};
use std::fmt;

/// The runtime's action vocabulary.
///
/// These are references into behaviour the window manager implements; nothing
/// here executes them.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    FocusDown,
    FocusUp,
    /// Move focus to the next stack of the current layout
    FocusNextStack,
    ShuffleDown,
    ShuffleUp,
    RotateStack,
    /// Toggle between split and unsplit sides of the stack
    ToggleSplit,
    NextLayout,
    PreviousLayout,
    KillWindow,
    Restart,
    Shutdown,
    /// Open the bar prompt and spawn what is typed
    SpawnPrompt,
    ToggleFloating,
    ToggleFullscreen,
    Spawn(String),
    /// Show the group on the focused screen
    ViewGroup(String),
    MoveToGroup(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(command) => write!(f, "Spawn({command:?})"),
            Self::ViewGroup(group) => write!(f, "ViewGroup({group})"),
            Self::MoveToGroup(group) => write!(f, "MoveToGroup({group})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// What a mouse binding does with the window under the cursor.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MouseAction {
    /// Drag to move, making the window floating
    Move,
    /// Drag to resize, making the window floating
    Resize,
    BringToFront,
}
