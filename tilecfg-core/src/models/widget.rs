use crate::errors::{ConfigError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

const DEFAULT_FOREGROUND: &str = "#ffffff";

/// Font and spacing every widget starts from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "sans".to_owned(),
            fontsize: 12,
            padding: 3,
        }
    }
}

/// Per-widget overrides of [`WidgetDefaults`]. Unset fields inherit.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetStyle {
    pub font: Option<String>,
    pub fontsize: Option<u32>,
    pub padding: Option<u32>,
}

impl WidgetStyle {
    #[must_use]
    pub fn resolve(&self, defaults: &WidgetDefaults) -> WidgetDefaults {
        WidgetDefaults {
            font: self.font.clone().unwrap_or_else(|| defaults.font.clone()),
            fontsize: self.fontsize.unwrap_or(defaults.fontsize),
            padding: self.padding.unwrap_or(defaults.padding),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightMethod {
    #[default]
    Border,
    Block,
    Text,
    Line,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GroupBoxOptions {
    /// Text colour of groups holding windows
    pub active: String,
    /// Text colour of empty groups
    pub inactive: String,
    /// Background of the current group when highlighted with `Line`
    pub highlight_color: String,
    pub highlight_method: HighlightMethod,
    pub borderwidth: u32,
    /// Highlight of the group shown on the focused screen
    pub this_current_screen_border: String,
    pub style: WidgetStyle,
}

impl Default for GroupBoxOptions {
    fn default() -> Self {
        Self {
            active: "#ffffff".to_owned(),
            inactive: "#404040".to_owned(),
            highlight_color: "#282828".to_owned(),
            highlight_method: HighlightMethod::default(),
            borderwidth: 3,
            this_current_screen_border: "#215578".to_owned(),
            style: WidgetStyle::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptOptions {
    pub prompt: String,
    pub style: WidgetStyle,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            prompt: "run: ".to_owned(),
            style: WidgetStyle::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowNameOptions {
    /// Show the focused window of the focused screen instead of this bar's screen
    pub for_current_screen: bool,
    /// `0` means no truncation
    pub max_chars: u32,
    pub style: WidgetStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardLayoutOptions {
    /// Layouts cycled through on click, as `setxkbmap` names
    pub configured_keyboards: Vec<String>,
    pub foreground: String,
    pub style: WidgetStyle,
}

impl Default for KeyboardLayoutOptions {
    fn default() -> Self {
        Self {
            configured_keyboards: vec!["us".to_owned()],
            foreground: DEFAULT_FOREGROUND.to_owned(),
            style: WidgetStyle::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SystrayOptions {
    pub icon_size: u32,
    pub style: WidgetStyle,
}

impl Default for SystrayOptions {
    fn default() -> Self {
        Self {
            icon_size: 20,
            style: WidgetStyle::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClockOptions {
    /// strftime format
    pub format: String,
    pub foreground: String,
    pub style: WidgetStyle,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            format: "%H:%M".to_owned(),
            foreground: DEFAULT_FOREGROUND.to_owned(),
            style: WidgetStyle::default(),
        }
    }
}

/// A bar element. Declaration order is rendering order, left to right.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    GroupBox(GroupBoxOptions),
    Prompt(PromptOptions),
    WindowName(WindowNameOptions),
    KeyboardLayout(KeyboardLayoutOptions),
    Systray(SystrayOptions),
    Clock(ClockOptions),
}

impl Widget {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GroupBox(_) => "GroupBox",
            Self::Prompt(_) => "Prompt",
            Self::WindowName(_) => "WindowName",
            Self::KeyboardLayout(_) => "KeyboardLayout",
            Self::Systray(_) => "Systray",
            Self::Clock(_) => "Clock",
        }
    }

    const fn style_overrides(&self) -> &WidgetStyle {
        match self {
            Self::GroupBox(o) => &o.style,
            Self::Prompt(o) => &o.style,
            Self::WindowName(o) => &o.style,
            Self::KeyboardLayout(o) => &o.style,
            Self::Systray(o) => &o.style,
            Self::Clock(o) => &o.style,
        }
    }

    /// Effective font and spacing of this widget.
    #[must_use]
    pub fn style(&self, defaults: &WidgetDefaults) -> WidgetDefaults {
        self.style_overrides().resolve(defaults)
    }

    /// # Errors
    ///
    /// Fails with [`ConfigError::InvalidWidget`] naming the widget position.
    pub fn validate(&self, screen: usize, index: usize) -> Result<()> {
        let invalid = |reason: String| ConfigError::InvalidWidget {
            screen,
            index,
            name: self.name(),
            reason,
        };
        match self {
            Self::KeyboardLayout(options) => {
                if options.configured_keyboards.is_empty() {
                    return Err(invalid("configured_keyboards must not be empty".to_owned()));
                }
                if options.configured_keyboards.iter().any(String::is_empty) {
                    return Err(invalid("configured_keyboards contains an empty name".to_owned()));
                }
            }
            Self::Clock(options) => {
                if StrftimeItems::new(&options.format).any(|item| matches!(item, Item::Error)) {
                    return Err(invalid(format!("invalid format `{}`", options.format)));
                }
            }
            Self::Systray(options) if options.icon_size == 0 => {
                return Err(invalid("icon_size must be greater than 0".to_owned()));
            }
            _ => {}
        }
        Ok(())
    }
}
