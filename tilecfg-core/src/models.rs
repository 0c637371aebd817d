//! Entities making up a window manager configuration.
mod float_rules;
mod group;
mod key_binding;
mod layout;
mod matcher;
mod palette;
mod policy;
mod screen;
mod widget;
mod window_props;

pub use float_rules::{find_duplicate_rules, first_float_rule, should_float};
pub use group::{resolve_group, Group};
pub use key_binding::{
    build_key_table, find_duplicate_chords, resolve_binding, Chord, KeyBinding, MouseBinding,
};
pub use layout::{next_layout, LayoutConfig, LayoutTheme, MaxOptions, StackOptions};
pub use matcher::{Match, MatchField};
pub use palette::Palette;
pub use policy::{FocusOnActivation, PolicyFlags};
pub use screen::{Bar, Screen};
pub use widget::{
    ClockOptions, GroupBoxOptions, HighlightMethod, KeyboardLayoutOptions, PromptOptions,
    SystrayOptions, Widget, WidgetDefaults, WidgetStyle, WindowNameOptions,
};
pub use window_props::WindowProps;
