use crate::{BaseCommand, Config, MouseCommand};
use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};
use tilecfg_core::utils::modmask_lookup::{into_button, into_modmask, is_modifier};
use tilecfg_core::{models::KeyBinding, models::MouseBinding, Action, ModMask, MouseAction};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    pub fn new(command: BaseCommand, modifier: &[&str], key: &str) -> Self {
        Self {
            command,
            value: String::default(),
            modifier: Some(modifier.iter().map(|m| (*m).to_owned()).collect::<Vec<_>>().into()),
            key: key.to_owned(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self
    }

    pub fn try_convert_to_core_keybind(&self, config: &Config) -> Result<KeyBinding> {
        let value_is_some = !self.value.is_empty();
        if self.command.needs_value() {
            ensure!(value_is_some, "value must not be empty");
        } else {
            ensure!(!value_is_some, "{:?} does not take a value", self.command);
        }
        if matches!(self.command, BaseCommand::GotoGroup | BaseCommand::MoveToGroup) {
            ensure!(
                config.groups.iter().any(|group| group.name == self.value),
                "no group named `{}`",
                self.value
            );
        }

        let action = match self.command {
            BaseCommand::Execute => Action::Spawn(self.value.clone()),
            BaseCommand::CloseWindow => Action::KillWindow,
            BaseCommand::SoftReload => Action::Restart,
            BaseCommand::Quit => Action::Shutdown,
            BaseCommand::SpawnPrompt => Action::SpawnPrompt,
            BaseCommand::FocusWindowUp => Action::FocusUp,
            BaseCommand::FocusWindowDown => Action::FocusDown,
            BaseCommand::FocusNextStack => Action::FocusNextStack,
            BaseCommand::MoveWindowUp => Action::ShuffleUp,
            BaseCommand::MoveWindowDown => Action::ShuffleDown,
            BaseCommand::RotateStack => Action::RotateStack,
            BaseCommand::ToggleSplit => Action::ToggleSplit,
            BaseCommand::NextLayout => Action::NextLayout,
            BaseCommand::PreviousLayout => Action::PreviousLayout,
            BaseCommand::ToggleFloating => Action::ToggleFloating,
            BaseCommand::ToggleFullScreen => Action::ToggleFullscreen,
            BaseCommand::GotoGroup => Action::ViewGroup(self.value.clone()),
            BaseCommand::MoveToGroup => Action::MoveToGroup(self.value.clone()),
        };

        Ok(KeyBinding {
            modifiers: to_modmask(self.modifier.as_ref(), &config.modkey)?,
            key: self.key.clone(),
            action,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Mousebind {
    pub command: MouseCommand,
    pub modifier: Option<Modifier>,
    pub button: String,
}

impl Mousebind {
    pub fn try_convert_to_core_mousebind(&self, config: &Config) -> Result<MouseBinding> {
        let Some(button) = into_button(&self.button) else {
            bail!("unknown mouse button `{}`", self.button);
        };
        let action = match self.command {
            MouseCommand::MoveWindow => MouseAction::Move,
            MouseCommand::ResizeWindow => MouseAction::Resize,
            MouseCommand::BringToFront => MouseAction::BringToFront,
        };
        Ok(MouseBinding {
            modifiers: to_modmask(self.modifier.as_ref(), &config.modkey)?,
            button,
            action,
        })
    }
}

/// Resolve the `modkey` placeholder and reject names that are not modifiers.
fn to_modmask(modifier: Option<&Modifier>, modkey: &str) -> Result<ModMask> {
    let Some(modifier) = modifier else {
        return Ok(ModMask::Zero);
    };
    let mut names = vec![];
    for m in modifier {
        let m = if m == "modkey" { modkey.to_owned() } else { m };
        ensure!(is_modifier(&m), "modifier `{m}` is not valid");
        names.push(m);
    }
    Ok(into_modmask(&names))
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modkey_placeholder_is_substituted() {
        let config = Config {
            modkey: "Mod1".to_owned(),
            ..Config::default()
        };
        let keybind = Keybind::new(BaseCommand::CloseWindow, &["modkey", "Shift"], "w");
        let binding = keybind.try_convert_to_core_keybind(&config).unwrap();
        assert_eq!(binding.modifiers, ModMask::Alt | ModMask::Shift);
        assert_eq!(binding.action, Action::KillWindow);
    }

    #[test]
    fn execute_requires_a_value() {
        let config = Config::default();
        let keybind = Keybind::new(BaseCommand::Execute, &["modkey"], "Return");
        assert!(keybind.try_convert_to_core_keybind(&config).is_err());
        let binding = keybind
            .with_value("alacritty")
            .try_convert_to_core_keybind(&config)
            .unwrap();
        assert_eq!(binding.action, Action::Spawn("alacritty".to_owned()));
    }

    #[test]
    fn value_on_a_plain_command_is_rejected() {
        let config = Config::default();
        let keybind = Keybind::new(BaseCommand::NextLayout, &["modkey"], "Tab").with_value("x");
        assert!(keybind.try_convert_to_core_keybind(&config).is_err());
    }

    #[test]
    fn goto_group_must_name_a_configured_group() {
        let config = Config::default();
        let ok = Keybind::new(BaseCommand::GotoGroup, &["modkey", "Shift"], "1").with_value("1");
        assert!(ok.try_convert_to_core_keybind(&config).is_ok());
        let bad = Keybind::new(BaseCommand::GotoGroup, &["modkey", "Shift"], "9").with_value("9");
        assert!(bad.try_convert_to_core_keybind(&config).is_err());
    }

    #[test]
    fn unknown_modifier_is_rejected() {
        let config = Config::default();
        let keybind = Keybind::new(BaseCommand::Quit, &["Hyper"], "q");
        let err = keybind.try_convert_to_core_keybind(&config).unwrap_err();
        assert_eq!(err.to_string(), "modifier `Hyper` is not valid");
    }

    #[test]
    fn mouse_button_names_are_checked() {
        let config = Config::default();
        let bind = Mousebind {
            command: MouseCommand::ResizeWindow,
            modifier: Some("modkey".into()),
            button: "Button3".to_owned(),
        };
        let binding = bind.try_convert_to_core_mousebind(&config).unwrap();
        assert_eq!(binding.action, MouseAction::Resize);
        let bad = Mousebind {
            button: "Button9".to_owned(),
            ..bind
        };
        assert!(bad.try_convert_to_core_mousebind(&config).is_err());
    }
}
