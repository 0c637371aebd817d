//! `tilecfg` general configuration

mod checks;
mod default;
mod keybind;

pub use self::default::layout_theme;
pub use self::keybind::{Keybind, Modifier, Mousebind};

use crate::utils::file_handler;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tilecfg_core::errors::ConfigError;
use tilecfg_core::models::{
    Group, KeyBinding, LayoutConfig, Match, MouseBinding, Palette, PolicyFlags, Screen,
    WidgetDefaults,
};
use tilecfg_core::utils::modmask_lookup::{into_modmask, is_modifier};
use tilecfg_core::ModMask;

/// General configuration
///
/// Every field has a default, so a config file only needs to name what it
/// changes. Plain values come first and `keybind` last, which keeps the
/// deprecated TOML serialization valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub log_level: String,
    /// Run once at first startup, `~` is expanded
    pub autostart: Option<PathBuf>,
    pub colors: Palette,
    pub flags: PolicyFlags,
    pub widget_defaults: WidgetDefaults,
    /// Defaults for launcher-style extensions, an independent copy of `widget_defaults`
    pub extension_defaults: WidgetDefaults,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutConfig>,
    pub screens: Vec<Screen>,
    pub float_rules: Vec<Match>,
    pub mousebind: Vec<Mousebind>,
    pub keybind: Vec<Keybind>,
}

/// Load the user's configuration, writing the default one on first use.
///
/// # Errors
///
/// Fails if the config file exists but cannot be read or parsed.
pub fn load() -> Result<Config> {
    file_handler::load_config_file()
}

impl tilecfg_core::Config for Config {
    fn modkey(&self) -> tilecfg_core::errors::Result<ModMask> {
        let mask = into_modmask(&[self.modkey.clone()]);
        // `None` and lock keys are modifiers, but none of them can lead a chord.
        if !is_modifier(&self.modkey) || mask == ModMask::Zero {
            return Err(ConfigError::InvalidModifier {
                entry: "modkey".to_owned(),
                modifier: self.modkey.clone(),
            });
        }
        Ok(mask)
    }

    fn key_bindings(&self) -> tilecfg_core::errors::Result<Vec<KeyBinding>> {
        self.keybind
            .iter()
            .map(|keybind| {
                keybind
                    .try_convert_to_core_keybind(self)
                    .map_err(|err| ConfigError::InvalidBinding {
                        entry: format!(
                            "{} + {} ({:?})",
                            keybind.modifier.as_ref().unwrap_or(&"None".into()),
                            keybind.key,
                            keybind.command
                        ),
                        reason: format!("{err:#}"),
                    })
            })
            .collect()
    }

    fn mouse_bindings(&self) -> tilecfg_core::errors::Result<Vec<MouseBinding>> {
        self.mousebind
            .iter()
            .map(|mousebind| {
                mousebind
                    .try_convert_to_core_mousebind(self)
                    .map_err(|err| ConfigError::InvalidButton {
                        entry: format!("{:?}", mousebind.command),
                        button: format!("{} ({err:#})", mousebind.button),
                    })
            })
            .collect()
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
        self.flags.clone()
    }

    fn widget_defaults(&self) -> WidgetDefaults {
        self.widget_defaults.clone()
    }

    fn extension_defaults(&self) -> WidgetDefaults {
        self.extension_defaults.clone()
    }

    fn autostart_script(&self) -> Option<PathBuf> {
        self.autostart.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ron::extensions::Extensions;
    use std::collections::HashSet;
    use tilecfg_core::models::{
        HighlightMethod, MatchField, MaxOptions, StackOptions, Widget, WindowProps,
    };
    use tilecfg_core::{Action, Snapshot};

    #[test]
    fn config_serializes_to_valid_ron_test() {
        let config = Config::default();

        let ron_pretty_conf = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .extensions(Extensions::IMPLICIT_SOME);
        let ron = ron::ser::to_string_pretty(&config, ron_pretty_conf);
        assert!(ron.is_ok(), "Could not serialize default config");

        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let ron_config = options.from_str::<Config>(ron.unwrap().as_str());
        assert_eq!(ron_config.unwrap(), config);
    }

    #[test]
    fn config_serializes_to_valid_toml_test() {
        let config = Config::default();
        let toml = toml::to_string(&config).expect("Could not serialize default config");
        let toml_config: Config = toml::from_str(&toml).unwrap();
        assert_eq!(toml_config, config);
    }

    #[test]
    fn group_names_are_pairwise_distinct() {
        let config = Config::default();
        let names: HashSet<_> = config.groups.iter().map(|g| &g.name).collect();
        assert_eq!(config.groups.len(), 5);
        assert_eq!(names.len(), config.groups.len());
    }

    #[test]
    fn chords_are_pairwise_distinct_including_generated_ones() {
        let snapshot = Snapshot::build(&Config::default()).unwrap();
        let chords: HashSet<_> = snapshot.keys.iter().map(|k| k.chord()).collect();
        assert_eq!(chords.len(), snapshot.keys.len());
    }

    #[test]
    fn one_group_binding_is_generated_per_group() {
        let config = Config::default();
        let snapshot = Snapshot::build(&config).unwrap();
        let generated: Vec<_> = snapshot
            .keys
            .iter()
            .filter(|k| matches!(k.action, Action::ViewGroup(_)))
            .collect();
        assert_eq!(generated.len(), 5);
        assert_eq!(snapshot.keys.len(), config.keybind.len() + 5);
        for (binding, group) in generated.iter().zip(&config.groups) {
            assert_eq!(binding.key, group.name);
            assert_eq!(binding.modifiers, ModMask::Super);
        }
    }

    #[test]
    fn extension_defaults_are_independent_of_widget_defaults() {
        let mut config = Config::default();
        assert_eq!(config.extension_defaults, config.widget_defaults);
        let before = config.extension_defaults.clone();
        config.widget_defaults.fontsize = 20;
        config.widget_defaults.font = "monospace".to_owned();
        assert_eq!(config.extension_defaults, before);

        config.extension_defaults.padding = 10;
        assert_eq!(config.widget_defaults.padding, 4);
    }

    #[test]
    fn float_rules_have_no_duplicates() {
        let config = Config::default();
        let rules: HashSet<_> = config.float_rules.iter().collect();
        assert_eq!(rules.len(), config.float_rules.len());
    }

    #[test]
    fn reloading_yields_identical_tables() {
        let first = Snapshot::build(&Config::default()).unwrap();
        let second = Snapshot::build(&Config::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bar_holds_the_six_widgets_in_order() {
        let config = Config::default();
        let bar = config.screens[0].bottom.as_ref().unwrap();
        let names: Vec<_> = bar.widgets.iter().map(Widget::name).collect();
        assert_eq!(
            names,
            [
                "GroupBox",
                "Prompt",
                "WindowName",
                "Systray",
                "KeyboardLayout",
                "Clock"
            ]
        );
        assert_eq!(bar.size, 32);
        assert_eq!(bar.background.as_deref(), Some("#252932"));
    }

    #[test]
    fn widgets_take_their_colours_from_the_palette() {
        let config = Config::default();
        let bar = config.screens[0].bottom.as_ref().unwrap();
        let Widget::GroupBox(groupbox) = &bar.widgets[0] else {
            panic!("first widget is not the group box");
        };
        assert_eq!(groupbox.active, "#ebcb8b");
        assert_eq!(groupbox.inactive, "#c0c5ce");
        assert_eq!(groupbox.highlight_color, "#3b3f47");
        assert_eq!(groupbox.highlight_method, HighlightMethod::Line);
        assert_eq!(groupbox.borderwidth, 2);
        assert_eq!(groupbox.this_current_screen_border, "#ebcb8b");

        let Widget::KeyboardLayout(keyboard) = &bar.widgets[4] else {
            panic!("fifth widget is not the keyboard layout");
        };
        assert_eq!(keyboard.configured_keyboards, ["us", "bg"]);
        assert_eq!(keyboard.foreground, "#bf616a");

        let Widget::Clock(clock) = &bar.widgets[5] else {
            panic!("last widget is not the clock");
        };
        assert_eq!(clock.format, "%d-%m-%Y %a %I:%M %p");
        assert_eq!(clock.foreground, "#a3be8c");
    }

    #[test]
    fn palette_holds_the_reference_colours() {
        let config = Config::default();
        let colors: Vec<_> = config
            .colors
            .iter()
            .map(|(name, color)| (name.as_str(), color.as_str()))
            .collect();
        assert_eq!(
            colors,
            [
                ("active", "#ebcb8b"),
                ("bg", "#252932"),
                ("fg1", "#bf616a"),
                ("fg2", "#a3be8c"),
                ("focus", "#1ec4d9"),
                ("highlight", "#3b3f47"),
                ("inactive", "#c0c5ce"),
            ]
        );
    }

    #[test]
    fn widget_defaults_are_font_awesome() {
        let config = Config::default();
        assert_eq!(
            config.widget_defaults,
            WidgetDefaults {
                font: "font-awesome".to_owned(),
                fontsize: 16,
                padding: 4,
            }
        );
    }

    #[test]
    fn max_comes_first_and_only_the_stack_is_themed() {
        let config = Config::default();
        assert_eq!(
            config.layouts,
            [
                LayoutConfig::Max(MaxOptions::default()),
                LayoutConfig::Stack(StackOptions {
                    num_stacks: 2,
                    border_focus: "#1ec4d9".to_owned(),
                    ..StackOptions::default()
                }),
            ]
        );
    }

    #[test]
    fn groups_match_the_reference_table() {
        let config = Config::default();
        let labels: Vec<_> = config.groups.iter().map(Group::display_label).collect();
        assert_eq!(labels, ["1 \u{f120}", "2 DEV", "3 WEB", "4 DOC", "5 VID"]);
        let spawns: Vec<_> = config.groups.iter().map(|g| g.spawn.as_deref()).collect();
        assert_eq!(spawns, [Some("xterm"), None, None, None, None]);

        let snapshot = Snapshot::build(&config).unwrap();
        for (class, label) in [
            ("XTerm", "1 \u{f120}"),
            ("code", "2 DEV"),
            ("transmission-qt", "3 WEB"),
            ("Xreader", "4 DOC"),
            ("vlc", "5 VID"),
        ] {
            let group = snapshot.group_for(&WindowProps::with_class(class)).unwrap();
            assert_eq!(group.display_label(), label, "{class}");
        }
    }

    #[test]
    fn float_rules_keep_the_reference_order() {
        let config = Config::default();
        let rules: Vec<_> = config
            .float_rules
            .iter()
            .flat_map(Match::criteria)
            .collect();
        assert_eq!(
            rules,
            [
                (MatchField::WmClass, "confirm"),
                (MatchField::WmClass, "dialog"),
                (MatchField::WmClass, "download"),
                (MatchField::WmClass, "error"),
                (MatchField::WmClass, "file_progress"),
                (MatchField::WmClass, "notification"),
                (MatchField::WmClass, "splash"),
                (MatchField::WmClass, "toolbar"),
                (MatchField::WmClass, "confirmreset"),
                (MatchField::WmClass, "makebranch"),
                (MatchField::WmClass, "maketag"),
                (MatchField::Title, "branchdialog"),
                (MatchField::Title, "pinentry"),
                (MatchField::WmClass, "ssh-askpass"),
            ]
        );
    }

    #[test]
    fn static_keys_match_the_reference_table() {
        let snapshot = Snapshot::build(&Config::default()).unwrap();
        let keys: Vec<_> = snapshot
            .keys
            .iter()
            .filter(|k| !matches!(k.action, Action::ViewGroup(_)))
            .map(|k| (k.chord().to_string(), k.action.clone()))
            .collect();
        assert_eq!(
            keys,
            [
                ("Mod4+j".to_owned(), Action::FocusUp),
                ("Mod4+k".to_owned(), Action::FocusDown),
                ("Mod4+space".to_owned(), Action::FocusNextStack),
                ("Mod4+Return".to_owned(), Action::Spawn("xterm".to_owned())),
                ("Mod4+Tab".to_owned(), Action::NextLayout),
                ("Mod4+w".to_owned(), Action::KillWindow),
                ("Mod4+Control+r".to_owned(), Action::Restart),
                ("Mod4+Control+q".to_owned(), Action::Shutdown),
                ("Mod4+r".to_owned(), Action::SpawnPrompt),
            ]
        );
        assert!(snapshot.mouse.is_empty());
    }

    #[test]
    fn modkey_that_is_no_modifier_is_fatal() {
        for modkey in ["None", "Hyper", "Mod2"] {
            let config = Config {
                modkey: modkey.to_owned(),
                ..Config::default()
            };
            let err = Snapshot::build(&config).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Modifier `{modkey}` of binding modkey is not valid")
            );
        }
    }

    #[test]
    fn both_layouts_are_built_from_the_palette_focus_colour() {
        let config = Config::default();
        let focus = config.colors.get("focus").unwrap();
        assert_eq!(config.layouts[1].border_focus(), focus);
        assert_eq!(layout_theme(&config.colors).border_focus.as_deref(), Some(focus));
    }

    #[test]
    fn git_dialogs_float() {
        let snapshot = Snapshot::build(&Config::default()).unwrap();
        assert!(snapshot.should_float(&WindowProps::with_class("makebranch")));
        assert!(snapshot.should_float(&WindowProps::with_name("branchdialog")));
        assert!(!snapshot.should_float(&WindowProps::with_class("Firefox")));
    }

    #[test]
    fn browser_windows_land_on_the_web_group() {
        let snapshot = Snapshot::build(&Config::default()).unwrap();
        let browser = WindowProps {
            role: Some("browser".to_owned()),
            ..WindowProps::with_class("Firefox")
        };
        let group = snapshot.group_for(&browser).unwrap();
        assert_eq!(group.display_label(), "3 WEB");
        assert!(snapshot
            .group_for(&WindowProps::with_class("Firefox"))
            .is_none());
    }

    #[test]
    fn invalid_keybind_names_its_entry() {
        let mut config = Config::default();
        config.keybind.push(Keybind::new(
            crate::BaseCommand::Execute,
            &["modkey"],
            "e",
        ));
        let err = Snapshot::build(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid key binding modkey + e (Execute): value must not be empty"
        );
    }
}
