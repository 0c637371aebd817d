use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbolic colour names.
///
/// Purely an indirection for the configuration author: nothing checks that
/// the palette is complete or that the values are valid colours.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette(BTreeMap<String, String>);

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, color: &str) -> Self {
        self.0.insert(name.to_owned(), color.to_owned());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The colour called `name`, or `fallback` when the palette lacks it.
    #[must_use]
    pub fn get_or(&self, name: &str, fallback: &str) -> String {
        self.get(name).unwrap_or(fallback).to_owned()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_colour_falls_back() {
        let palette = Palette::new().with("accent", "#215578");
        assert_eq!(palette.get("accent"), Some("#215578"));
        assert_eq!(palette.get("urgent"), None);
        assert_eq!(palette.get_or("urgent", "#ff0000"), "#ff0000");
    }
}
