use super::Widget;
use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Bar {
    /// Height in pixels
    pub size: u32,
    #[serde(default)]
    pub background: Option<String>,
    pub widgets: Vec<Widget>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Screen {
    pub top: Option<Bar>,
    pub bottom: Option<Bar>,
}

impl Screen {
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.top.iter().chain(self.bottom.iter())
    }

    /// # Errors
    ///
    /// Returns the first invalid bar or widget on this screen.
    pub fn validate(&self, screen: usize) -> Result<()> {
        for bar in self.bars() {
            if bar.size == 0 {
                return Err(ConfigError::InvalidBar {
                    screen,
                    reason: "size must be greater than 0".to_owned(),
                });
            }
            for (index, widget) in bar.widgets.iter().enumerate() {
                widget.validate(screen, index)?;
            }
        }
        Ok(())
    }
}
