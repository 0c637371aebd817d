use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_BORDER_FOCUS: &str = "#0000ff";
const DEFAULT_BORDER_NORMAL: &str = "#000000";

/// Style shared between layouts.
///
/// Defined once in the configuration and applied to every layout built from
/// it, so changing the focus colour here changes it everywhere. Unset fields
/// leave the layout's own default in place.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutTheme {
    pub border_focus: Option<String>,
    pub border_normal: Option<String>,
    pub border_width: Option<u32>,
    pub margin: Option<u32>,
}

impl LayoutTheme {
    fn apply(
        &self,
        border_focus: &mut String,
        border_normal: &mut String,
        border_width: &mut u32,
        margin: &mut u32,
    ) {
        if let Some(color) = &self.border_focus {
            border_focus.clone_from(color);
        }
        if let Some(color) = &self.border_normal {
            border_normal.clone_from(color);
        }
        if let Some(width) = self.border_width {
            *border_width = width;
        }
        if let Some(px) = self.margin {
            *margin = px;
        }
    }
}

/// One window fills the screen, the others are hidden behind it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MaxOptions {
    pub border_focus: String,
    pub border_normal: String,
    /// `0` draws no border at all
    pub border_width: u32,
    pub margin: u32,
}

impl Default for MaxOptions {
    fn default() -> Self {
        Self {
            border_focus: DEFAULT_BORDER_FOCUS.to_owned(),
            border_normal: DEFAULT_BORDER_NORMAL.to_owned(),
            border_width: 0,
            margin: 0,
        }
    }
}

/// The screen is divided into `num_stacks` columns of windows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StackOptions {
    pub num_stacks: u32,
    /// Every new stack is split on creation
    pub autosplit: bool,
    /// New windows go to the stack with the fewest windows
    pub fair: bool,
    pub border_focus: String,
    pub border_normal: String,
    pub border_width: u32,
    pub margin: u32,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            num_stacks: 2,
            autosplit: false,
            fair: false,
            border_focus: DEFAULT_BORDER_FOCUS.to_owned(),
            border_normal: DEFAULT_BORDER_NORMAL.to_owned(),
            border_width: 1,
            margin: 0,
        }
    }
}

impl From<&LayoutTheme> for StackOptions {
    fn from(theme: &LayoutTheme) -> Self {
        let mut options = Self::default();
        theme.apply(
            &mut options.border_focus,
            &mut options.border_normal,
            &mut options.border_width,
            &mut options.margin,
        );
        options
    }
}

impl From<&LayoutTheme> for MaxOptions {
    fn from(theme: &LayoutTheme) -> Self {
        let mut options = Self::default();
        theme.apply(
            &mut options.border_focus,
            &mut options.border_normal,
            &mut options.border_width,
            &mut options.margin,
        );
        options
    }
}

/// A layout selection with its parameters. The order of the configured list
/// is the order `NextLayout` cycles through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum LayoutConfig {
    Max(MaxOptions),
    Stack(StackOptions),
}

impl LayoutConfig {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Max(_) => "max",
            Self::Stack(_) => "stack",
        }
    }

    #[must_use]
    pub fn border_focus(&self) -> &str {
        match self {
            Self::Max(options) => &options.border_focus,
            Self::Stack(options) => &options.border_focus,
        }
    }

    /// # Errors
    ///
    /// Fails when a parameter is outside of what the layout can draw.
    pub fn validate(&self, index: usize) -> Result<()> {
        match self {
            Self::Stack(options) if options.num_stacks == 0 => Err(ConfigError::InvalidLayout {
                index,
                name: self.name(),
                reason: "num_stacks must be at least 1".to_owned(),
            }),
            _ => Ok(()),
        }
    }
}

/// The layout following `current` in cycle order, wrapping around.
#[must_use]
pub fn next_layout(layouts: &[LayoutConfig], current: usize) -> Option<usize> {
    if layouts.is_empty() {
        return None;
    }
    Some((current + 1) % layouts.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_applied_to_stack_options() {
        let theme = LayoutTheme {
            border_focus: Some("#881111".to_owned()),
            border_width: Some(3),
            ..LayoutTheme::default()
        };
        let stack = StackOptions {
            num_stacks: 3,
            ..StackOptions::from(&theme)
        };
        assert_eq!(stack.border_focus, "#881111");
        assert_eq!(stack.border_width, 3);
        assert_eq!(stack.num_stacks, 3);
    }

    #[test]
    fn unset_theme_fields_keep_layout_defaults() {
        let theme = LayoutTheme {
            border_focus: Some("#1ec4d9".to_owned()),
            ..LayoutTheme::default()
        };
        let stack = StackOptions::from(&theme);
        let max = MaxOptions::from(&theme);
        assert_eq!(stack.border_width, 1);
        assert_eq!(max.border_width, 0);
        assert_eq!(stack.border_normal, DEFAULT_BORDER_NORMAL);
        assert_eq!(max.border_focus, "#1ec4d9");
    }

    #[test]
    fn unknown_layout_option_is_rejected() {
        let ok = serde_json::from_str::<LayoutConfig>(r#"{"Stack":{"num_stacks":3}}"#).unwrap();
        assert_eq!(
            ok,
            LayoutConfig::Stack(StackOptions {
                num_stacks: 3,
                ..StackOptions::default()
            })
        );
        let err = serde_json::from_str::<LayoutConfig>(r#"{"Stack":{"stacks":3}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn zero_stacks_fail_validation() {
        let layout = LayoutConfig::Stack(StackOptions {
            num_stacks: 0,
            ..StackOptions::default()
        });
        assert!(layout.validate(1).is_err());
        assert!(LayoutConfig::Max(MaxOptions::default()).validate(0).is_ok());
    }

    #[test]
    fn next_layout_wraps_around() {
        let layouts = vec![
            LayoutConfig::Stack(StackOptions::default()),
            LayoutConfig::Max(MaxOptions::default()),
        ];
        assert_eq!(next_layout(&layouts, 0), Some(1));
        assert_eq!(next_layout(&layouts, 1), Some(0));
        assert_eq!(next_layout(&[], 0), None);
    }
}
