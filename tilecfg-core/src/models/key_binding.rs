use super::Group;
use crate::action::{Action, MouseAction};
use crate::errors::{ConfigError, Result};
use crate::utils::keysym_lookup::is_keysym;
use crate::utils::modmask_lookup::{Button, ModMask};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: ModMask,
    pub key: String,
    pub action: Action,
}

impl KeyBinding {
    #[must_use]
    pub fn new(modifiers: ModMask, key: &str, action: Action) -> Self {
        Self {
            modifiers,
            key: key.to_owned(),
            action,
        }
    }

    #[must_use]
    pub fn chord(&self) -> Chord<'_> {
        Chord {
            modifiers: self.modifiers,
            key: &self.key,
        }
    }
}

/// The `(modifiers, key)` pair identifying a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord<'a> {
    pub modifiers: ModMask,
    pub key: &'a str,
}

impl fmt::Display for Chord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers == ModMask::Zero {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MouseBinding {
    pub modifiers: ModMask,
    pub button: Button,
    pub action: MouseAction,
}

/// Build the complete key table: the static bindings in declaration order,
/// followed by one `modkey + <name>` binding per group switching the focused
/// screen to that group.
///
/// # Errors
///
/// Fails if a group name is not a key symbol, or if any two bindings (static
/// or generated) share a chord.
pub fn build_key_table(
    static_bindings: Vec<KeyBinding>,
    groups: &[Group],
    modkey: ModMask,
) -> Result<Vec<KeyBinding>> {
    let mut table = static_bindings;
    table.reserve(groups.len());
    for group in groups {
        if !is_keysym(&group.name) {
            return Err(ConfigError::InvalidGroupKey(group.name.clone()));
        }
        table.push(KeyBinding::new(
            modkey,
            &group.name,
            Action::ViewGroup(group.name.clone()),
        ));
    }
    if let Some(err) = find_duplicate_chords(&table).into_iter().next() {
        return Err(err);
    }
    Ok(table)
}

/// Report every chord bound more than once, naming the first binding and
/// each later one.
#[must_use]
pub fn find_duplicate_chords(bindings: &[KeyBinding]) -> Vec<ConfigError> {
    let mut seen: HashMap<Chord<'_>, &KeyBinding> = HashMap::new();
    let mut errors = vec![];
    for binding in bindings {
        let chord = binding.chord();
        if let Some(first) = seen.get(&chord) {
            errors.push(ConfigError::DuplicateBinding {
                chord: chord.to_string(),
                first: first.action.to_string(),
                second: binding.action.to_string(),
            });
        } else {
            seen.insert(chord, binding);
        }
    }
    errors
}

/// Look up what a chord does. Each chord is bound at most once in a validated
/// table, so the first hit is the only one.
#[must_use]
pub fn resolve_binding<'a>(
    bindings: &'a [KeyBinding],
    modifiers: ModMask,
    key: &str,
) -> Option<&'a Action> {
    bindings
        .iter()
        .find(|binding| binding.modifiers == modifiers && binding.key == key)
        .map(|binding| &binding.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statics() -> Vec<KeyBinding> {
        vec![
            KeyBinding::new(ModMask::Super, "k", Action::FocusDown),
            KeyBinding::new(ModMask::Super, "j", Action::FocusUp),
            KeyBinding::new(ModMask::Super | ModMask::Control, "r", Action::Restart),
        ]
    }

    #[test]
    fn one_binding_is_generated_per_group() {
        let groups = vec![Group::new("1", "a"), Group::new("2", "b")];
        let table = build_key_table(statics(), &groups, ModMask::Super).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table[3],
            KeyBinding::new(ModMask::Super, "1", Action::ViewGroup("1".to_owned()))
        );
        assert_eq!(table[4].action, Action::ViewGroup("2".to_owned()));
    }

    #[test]
    fn group_colliding_with_a_static_binding_is_rejected() {
        let groups = vec![Group::new("k", "")];
        let err = build_key_table(statics(), &groups, ModMask::Super).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateBinding { ref chord, .. } if chord == "Mod4+k"
        ));
    }

    #[test]
    fn group_name_that_is_not_a_keysym_is_rejected() {
        let groups = vec![Group::new("www", "")];
        let err = build_key_table(statics(), &groups, ModMask::Super).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGroupKey(ref name) if name == "www"));
    }

    #[test]
    fn every_duplicate_is_reported() {
        let mut bindings = statics();
        bindings.push(KeyBinding::new(ModMask::Super, "k", Action::KillWindow));
        bindings.push(KeyBinding::new(ModMask::Super, "j", Action::KillWindow));
        // same key with a different modifier set is a different chord
        bindings.push(KeyBinding::new(ModMask::Super | ModMask::Shift, "k", Action::KillWindow));
        assert_eq!(find_duplicate_chords(&bindings).len(), 2);
    }

    #[test]
    fn chords_resolve_to_their_action() {
        let table = statics();
        assert_eq!(
            resolve_binding(&table, ModMask::Super | ModMask::Control, "r"),
            Some(&Action::Restart)
        );
        assert_eq!(resolve_binding(&table, ModMask::Control, "r"), None);
    }
}
