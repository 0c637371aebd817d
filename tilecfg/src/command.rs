use serde::{Deserialize, Serialize};

/// The command names usable in the `keybind` section of the config file.
///
/// A command plus the keybind's `value` string is converted into a
/// [`tilecfg_core::Action`]; only `Execute`, `GotoGroup` and `MoveToGroup`
/// take a value.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Execute,
    CloseWindow,
    SoftReload,
    Quit,
    SpawnPrompt,
    FocusWindowUp,
    FocusWindowDown,
    FocusNextStack,
    MoveWindowUp,
    MoveWindowDown,
    RotateStack,
    ToggleSplit,
    NextLayout,
    PreviousLayout,
    ToggleFloating,
    ToggleFullScreen,
    GotoGroup,
    MoveToGroup,
}

impl BaseCommand {
    #[must_use]
    pub const fn needs_value(self) -> bool {
        matches!(self, Self::Execute | Self::GotoGroup | Self::MoveToGroup)
    }
}

/// What a mouse binding does, as written in the config file.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseCommand {
    MoveWindow,
    ResizeWindow,
    BringToFront,
}
