use crate::action::Action;
use crate::config::Config;
use crate::errors::{ConfigError, Result};
use crate::models::{
    build_key_table, first_float_rule, resolve_binding, resolve_group, Group, KeyBinding,
    LayoutConfig, Match, MouseBinding, PolicyFlags, Screen, WidgetDefaults, WindowProps,
};
use crate::utils::child_process::expand_path;
use crate::utils::keysym_lookup::is_keysym;
use crate::utils::modmask_lookup::ModMask;
use crate::validate::{
    check_float_rules, check_groups, check_keys, check_layouts, check_modkey, check_mouse,
    check_screens, first_error,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An immutable, validated configuration as handed to the runtime.
///
/// A snapshot is never patched: a restart builds a new one from scratch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Static bindings followed by one switch-to-group binding per group
    pub keys: Vec<KeyBinding>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutConfig>,
    pub screens: Vec<Screen>,
    pub floating_rules: Vec<Match>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub flags: PolicyFlags,
    /// Home-expanded startup script
    pub autostart: Option<PathBuf>,
}

impl Snapshot {
    /// Validate `config` and freeze it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found. There is no partial snapshot: a
    /// configuration that cannot be bound completely is not bound at all.
    pub fn build(config: &impl Config) -> Result<Self> {
        tracing::debug!("Building configuration snapshot");

        let modkey = config.modkey()?;
        first_error(check_modkey(modkey))?;

        let groups = config.groups();
        first_error(check_groups(&groups))?;

        let keys = build_key_table(config.key_bindings()?, &groups, modkey)?;
        first_error(check_keys(&keys))?;

        let mouse = config.mouse_bindings()?;
        first_error(check_mouse(&mouse))?;

        let layouts = config.layouts();
        first_error(check_layouts(&layouts))?;

        let screens = config.screens();
        first_error(check_screens(&screens))?;

        let floating_rules = config.float_rules();
        first_error(check_float_rules(&floating_rules))?;

        let snapshot = Self {
            keys,
            mouse,
            groups,
            layouts,
            screens,
            floating_rules,
            widget_defaults: config.widget_defaults(),
            extension_defaults: config.extension_defaults(),
            flags: config.flags(),
            autostart: config.autostart_script().map(|path| expand_path(&path)),
        };
        tracing::debug!(
            "Snapshot ready: {} key bindings, {} groups, {} layouts",
            snapshot.keys.len(),
            snapshot.groups.len(),
            snapshot.layouts.len()
        );
        Ok(snapshot)
    }

    /// Every problem in `config`, instead of only the first one.
    #[must_use]
    pub fn check_all(config: &impl Config) -> Vec<ConfigError> {
        let groups = config.groups();
        let mut errors = vec![];
        let modkey = match config.modkey() {
            Ok(modkey) => {
                errors.extend(check_modkey(modkey));
                Some(modkey)
            }
            Err(err) => {
                errors.push(err);
                None
            }
        };
        errors.extend(check_groups(&groups));

        match config.key_bindings() {
            Ok(mut keys) => {
                // without a usable modkey the generated bindings cannot be compared
                let modkey = modkey.unwrap_or(ModMask::Zero);
                keys.extend(
                    groups
                        .iter()
                        .filter(|group| is_keysym(&group.name))
                        .map(|group| {
                            KeyBinding::new(modkey, &group.name, Action::ViewGroup(group.name.clone()))
                        }),
                );
                errors.extend(check_keys(&keys));
            }
            Err(err) => errors.push(err),
        }
        match config.mouse_bindings() {
            Ok(mouse) => errors.extend(check_mouse(&mouse)),
            Err(err) => errors.push(err),
        }
        errors.extend(check_layouts(&config.layouts()));
        errors.extend(check_screens(&config.screens()));
        errors.extend(check_float_rules(&config.float_rules()));
        errors
    }

    /// The group a new window is placed on, first match wins.
    #[must_use]
    pub fn group_for(&self, window: &WindowProps) -> Option<&Group> {
        resolve_group(&self.groups, window)
    }

    #[must_use]
    pub fn float_rule_for(&self, window: &WindowProps) -> Option<&Match> {
        first_float_rule(&self.floating_rules, window)
    }

    #[must_use]
    pub fn should_float(&self, window: &WindowProps) -> bool {
        self.float_rule_for(window).is_some()
    }

    #[must_use]
    pub fn action_for(&self, modifiers: ModMask, key: &str) -> Option<&Action> {
        resolve_binding(&self.keys, modifiers, key)
    }
}
