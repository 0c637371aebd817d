use crate::errors::Result;
use crate::models::{
    Group, KeyBinding, LayoutConfig, Match, MouseBinding, PolicyFlags, Screen, WidgetDefaults,
};
use crate::utils::modmask_lookup::ModMask;
use std::path::PathBuf;

/// The fixed set of names a runtime reads from a configuration.
///
/// Implementors only describe what the user asked for; [`crate::Snapshot`]
/// generates the group bindings, validates everything and freezes the result.
pub trait Config {
    /// Modifier used by the generated switch-to-group bindings.
    ///
    /// # Errors
    ///
    /// Fails when the configured name is not a modifier.
    fn modkey(&self) -> Result<ModMask>;

    /// The static key bindings, without the generated group bindings.
    ///
    /// # Errors
    ///
    /// Fails when a binding cannot be converted into the runtime's vocabulary.
    fn key_bindings(&self) -> Result<Vec<KeyBinding>>;

    /// # Errors
    ///
    /// Fails when a binding names an unknown button or modifier.
    fn mouse_bindings(&self) -> Result<Vec<MouseBinding>>;

    fn groups(&self) -> Vec<Group>;

    fn layouts(&self) -> Vec<LayoutConfig>;

    fn screens(&self) -> Vec<Screen>;

    fn float_rules(&self) -> Vec<Match>;

    fn flags(&self) -> PolicyFlags;

    fn widget_defaults(&self) -> WidgetDefaults;

    fn extension_defaults(&self) -> WidgetDefaults;

    /// Script run once at first startup, before home expansion.
    fn autostart_script(&self) -> Option<PathBuf>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::action::{Action, MouseAction};
    use crate::models::{Bar, ClockOptions, MaxOptions, Widget};
    use crate::utils::modmask_lookup::Button;

    #[allow(clippy::module_name_repetitions)]
    #[derive(Clone)]
    pub struct TestConfig {
        pub keys: Vec<KeyBinding>,
        pub mouse: Vec<MouseBinding>,
        pub groups: Vec<Group>,
        pub layouts: Vec<LayoutConfig>,
        pub screens: Vec<Screen>,
        pub float_rules: Vec<Match>,
        pub autostart: Option<PathBuf>,
        pub modkey: ModMask,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                keys: vec![
                    KeyBinding::new(ModMask::Super, "k", Action::FocusDown),
                    KeyBinding::new(ModMask::Super, "j", Action::FocusUp),
                    KeyBinding::new(ModMask::Super, "Return", Action::Spawn("xterm".to_owned())),
                ],
                mouse: vec![MouseBinding {
                    modifiers: ModMask::Super,
                    button: Button::Button1,
                    action: MouseAction::Move,
                }],
                groups: vec![Group::new("1", "one"), Group::new("2", "two")],
                layouts: vec![LayoutConfig::Max(MaxOptions::default())],
                screens: vec![Screen {
                    top: None,
                    bottom: Some(Bar {
                        size: 24,
                        background: None,
                        widgets: vec![Widget::Clock(ClockOptions::default())],
                    }),
                }],
                float_rules: vec![Match::wm_class("pinentry").unwrap()],
                autostart: None,
                modkey: ModMask::Super,
            }
        }
    }

    impl Config for TestConfig {
        fn modkey(&self) -> Result<ModMask> {
            Ok(self.modkey)
        }
        fn key_bindings(&self) -> Result<Vec<KeyBinding>> {
            Ok(self.keys.clone())
        }
        fn mouse_bindings(&self) -> Result<Vec<MouseBinding>> {
            Ok(self.mouse.clone())
        }
        fn groups(&self) -> Vec<Group> {
            self.groups.clone()
        }
        fn layouts(&self) -> Vec<LayoutConfig> {
            self.layouts.clone()
        }
        fn screens(&self) -> Vec<Screen> {
            self.screens.clone()
        }
        fn float_rules(&self) -> Vec<Match> {
            self.float_rules.clone()
        }
        fn flags(&self) -> PolicyFlags {
            PolicyFlags::default()
        }
        fn widget_defaults(&self) -> WidgetDefaults {
            WidgetDefaults::default()
        }
        fn extension_defaults(&self) -> WidgetDefaults {
            WidgetDefaults::default()
        }
        fn autostart_script(&self) -> Option<PathBuf> {
            self.autostart.clone()
        }
    }
}
