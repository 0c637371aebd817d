//! Integrity checks run before a configuration is handed to the runtime.
use crate::errors::{ConfigError, Result};
use crate::models::{
    find_duplicate_chords, find_duplicate_rules, Group, KeyBinding, LayoutConfig, Match,
    MouseBinding, Screen,
};
use crate::utils::keysym_lookup::is_keysym;
use crate::utils::modmask_lookup::ModMask;
use std::collections::HashSet;

/// The modkey prefixes every generated group binding, so it cannot be empty.
#[must_use]
pub fn check_modkey(modkey: ModMask) -> Vec<ConfigError> {
    if modkey == ModMask::Zero {
        return vec![ConfigError::InvalidModifier {
            entry: "modkey".to_owned(),
            modifier: modkey.to_string(),
        }];
    }
    vec![]
}

/// Empty names, duplicated names and names that cannot double as key symbols.
#[must_use]
pub fn check_groups(groups: &[Group]) -> Vec<ConfigError> {
    let mut errors = vec![];
    let mut names = HashSet::new();
    for (index, group) in groups.iter().enumerate() {
        if group.name.is_empty() {
            errors.push(ConfigError::EmptyGroupName(index));
            continue;
        }
        if !names.insert(group.name.as_str()) {
            errors.push(ConfigError::DuplicateGroup(group.name.clone()));
        }
        if !is_keysym(&group.name) {
            errors.push(ConfigError::InvalidGroupKey(group.name.clone()));
        }
    }
    errors
}

/// Unknown key symbols and chords bound more than once.
#[must_use]
pub fn check_keys(bindings: &[KeyBinding]) -> Vec<ConfigError> {
    let mut errors: Vec<ConfigError> = bindings
        .iter()
        .filter(|binding| !is_keysym(&binding.key))
        .map(|binding| ConfigError::InvalidKey {
            entry: format!("{} => {}", binding.chord(), binding.action),
            key: binding.key.clone(),
        })
        .collect();
    errors.extend(find_duplicate_chords(bindings));
    errors
}

#[must_use]
pub fn check_mouse(bindings: &[MouseBinding]) -> Vec<ConfigError> {
    let mut seen = HashSet::new();
    bindings
        .iter()
        .filter(|binding| !seen.insert((binding.modifiers, binding.button)))
        .map(|binding| {
            ConfigError::DuplicateMouseBinding(format!("{}+{}", binding.modifiers, binding.button))
        })
        .collect()
}

#[must_use]
pub fn check_layouts(layouts: &[LayoutConfig]) -> Vec<ConfigError> {
    if layouts.is_empty() {
        return vec![ConfigError::NoLayouts];
    }
    layouts
        .iter()
        .enumerate()
        .filter_map(|(index, layout)| layout.validate(index).err())
        .collect()
}

#[must_use]
pub fn check_screens(screens: &[Screen]) -> Vec<ConfigError> {
    screens
        .iter()
        .enumerate()
        .filter_map(|(index, screen)| screen.validate(index).err())
        .collect()
}

#[must_use]
pub fn check_float_rules(rules: &[Match]) -> Vec<ConfigError> {
    find_duplicate_rules(rules)
}

/// Turn a list of findings into a fatal error on the first one.
///
/// # Errors
///
/// Returns the first entry of `errors`, if any.
pub fn first_error(errors: Vec<ConfigError>) -> Result<()> {
    errors.into_iter().next().map_or(Ok(()), Err)
}
