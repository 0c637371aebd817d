use super::WindowProps;
use crate::errors::{ConfigError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which piece of window metadata a [`Match`] criterion looks at.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchField {
    /// Either half of `WM_CLASS`
    WmClass,
    /// The window title
    Title,
    /// `WM_WINDOW_ROLE`
    Role,
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WmClass => write!(f, "wm_class"),
            Self::Title => write!(f, "title"),
            Self::Role => write!(f, "role"),
        }
    }
}

/// A regular expression that has to match the *whole* value.
#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    fn new(source: &str) -> Result<Self> {
        let regex =
            Regex::new(&format!("^(?:{source})$")).map_err(|err| ConfigError::InvalidPattern {
                pattern: source.to_owned(),
                reason: err.to_string(),
            })?;
        Ok(Self {
            source: source.to_owned(),
            regex,
        })
    }

    fn matches(&self, value: Option<&String>) -> bool {
        value.is_some_and(|value| self.regex.is_match(value))
    }
}

/// A predicate over [`WindowProps`].
///
/// Every criterion that is set has to match, so
/// `Match::wm_class("Firefox")?.and_role("browser")?` only matches Firefox
/// windows with the `browser` role. Patterns match the whole value:
/// `Match::wm_class("ssh-askpass")` does not match `ssh-askpass-gnome`.
///
/// In `config.ron`:
///
/// ```ron
/// (wm_class: "Firefox", role: "browser")
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMatch", into = "RawMatch")]
pub struct Match {
    wm_class: Option<Pattern>,
    title: Option<Pattern>,
    role: Option<Pattern>,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wm_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

impl TryFrom<RawMatch> for Match {
    type Error = ConfigError;

    fn try_from(raw: RawMatch) -> Result<Self> {
        let pattern = |source: Option<String>| source.as_deref().map(Pattern::new).transpose();
        let rule = Self {
            wm_class: pattern(raw.wm_class)?,
            title: pattern(raw.title)?,
            role: pattern(raw.role)?,
        };
        if rule.criteria().next().is_none() {
            return Err(ConfigError::EmptyMatch);
        }
        Ok(rule)
    }
}

impl From<Match> for RawMatch {
    fn from(m: Match) -> Self {
        let source = |pattern: Option<Pattern>| pattern.map(|p| p.source);
        Self {
            wm_class: source(m.wm_class),
            title: source(m.title),
            role: source(m.role),
        }
    }
}

impl Match {
    /// A rule with a single criterion.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::InvalidPattern`] when `pattern` is not a valid regex.
    pub fn new(field: MatchField, pattern: &str) -> Result<Self> {
        let empty = Self {
            wm_class: None,
            title: None,
            role: None,
        };
        empty.and(field, pattern)
    }

    /// # Errors
    ///
    /// See [`Match::new`].
    pub fn wm_class(pattern: &str) -> Result<Self> {
        Self::new(MatchField::WmClass, pattern)
    }

    /// # Errors
    ///
    /// See [`Match::new`].
    pub fn title(pattern: &str) -> Result<Self> {
        Self::new(MatchField::Title, pattern)
    }

    /// # Errors
    ///
    /// See [`Match::new`].
    pub fn role(pattern: &str) -> Result<Self> {
        Self::new(MatchField::Role, pattern)
    }

    /// Add (or replace) the criterion on `field`.
    ///
    /// # Errors
    ///
    /// See [`Match::new`].
    pub fn and(mut self, field: MatchField, pattern: &str) -> Result<Self> {
        let pattern = Some(Pattern::new(pattern)?);
        match field {
            MatchField::WmClass => self.wm_class = pattern,
            MatchField::Title => self.title = pattern,
            MatchField::Role => self.role = pattern,
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// See [`Match::new`].
    pub fn and_role(self, pattern: &str) -> Result<Self> {
        self.and(MatchField::Role, pattern)
    }

    /// The pattern set on `field`, if any.
    #[must_use]
    pub fn pattern(&self, field: MatchField) -> Option<&str> {
        let pattern = match field {
            MatchField::WmClass => &self.wm_class,
            MatchField::Title => &self.title,
            MatchField::Role => &self.role,
        };
        pattern.as_ref().map(|p| p.source.as_str())
    }

    /// The set criteria, in `wm_class`, `title`, `role` order.
    pub fn criteria(&self) -> impl Iterator<Item = (MatchField, &str)> {
        [MatchField::WmClass, MatchField::Title, MatchField::Role]
            .into_iter()
            .filter_map(|field| self.pattern(field).map(|pattern| (field, pattern)))
    }

    #[must_use]
    pub fn matches(&self, window: &WindowProps) -> bool {
        let class_ok = self.wm_class.as_ref().map_or(true, |p| {
            p.matches(window.res_name.as_ref()) || p.matches(window.res_class.as_ref())
        });
        let title_ok = self
            .title
            .as_ref()
            .map_or(true, |p| p.matches(window.name.as_ref()));
        let role_ok = self
            .role
            .as_ref()
            .map_or(true, |p| p.matches(window.role.as_ref()));
        class_ok && title_ok && role_ok
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.criteria().eq(other.criteria())
    }
}

impl Eq for Match {}

impl std::hash::Hash for Match {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for criterion in self.criteria() {
            criterion.hash(state);
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let criteria: Vec<String> = self
            .criteria()
            .map(|(field, pattern)| format!("{field}={pattern:?}"))
            .collect();
        write!(f, "{}", criteria.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wm_class_matches_either_half() {
        let rule = Match::wm_class("Firefox").unwrap();
        let window = WindowProps {
            res_name: Some("Navigator".to_owned()),
            res_class: Some("Firefox".to_owned()),
            ..WindowProps::default()
        };
        assert!(rule.matches(&window));
        assert!(Match::wm_class("Navigator").unwrap().matches(&window));
    }

    #[test]
    fn pattern_must_match_whole_value() {
        let rule = Match::wm_class("ssh-askpass").unwrap();
        assert!(rule.matches(&WindowProps::with_class("ssh-askpass")));
        assert!(!rule.matches(&WindowProps::with_class("ssh-askpass-gnome")));
        let alternatives = Match::title("branchdialog|pinentry").unwrap();
        assert!(alternatives.matches(&WindowProps::with_name("pinentry")));
    }

    #[test]
    fn missing_metadata_never_matches() {
        let rule = Match::role("browser").unwrap();
        assert!(!rule.matches(&WindowProps::default()));
        assert!(rule.matches(&WindowProps::with_role("browser")));
    }

    #[test]
    fn every_criterion_has_to_match() {
        let rule = Match::wm_class("Firefox")
            .and_then(|rule| rule.and_role("browser"))
            .unwrap();
        let firefox = WindowProps::with_class("Firefox");
        assert!(!rule.matches(&firefox));
        assert!(!rule.matches(&WindowProps::with_role("browser")));
        let browser = WindowProps {
            role: Some("browser".to_owned()),
            ..firefox
        };
        assert!(rule.matches(&browser));
        assert_eq!(rule.to_string(), r#"wm_class="Firefox" role="browser""#);
    }

    #[test]
    fn rules_compare_by_all_criteria() {
        let class = Match::wm_class("Firefox").unwrap();
        let both = class.clone().and_role("browser").unwrap();
        assert_ne!(class, both);
        assert_ne!(class, Match::title("Firefox").unwrap());
        assert_eq!(class, Match::wm_class("Firefox").unwrap());
    }

    #[test]
    fn invalid_or_empty_rules_are_rejected_on_deserialize() {
        assert!(serde_json::from_str::<Match>(r#"{"title":"("}"#).is_err());
        assert!(serde_json::from_str::<Match>("{}").is_err());
        assert!(serde_json::from_str::<Match>(r#"{"class":"gitk"}"#).is_err());
        let ok: Match =
            serde_json::from_str(r#"{"wm_class":"Firefox","role":"browser"}"#).unwrap();
        assert_eq!(ok.pattern(MatchField::Role), Some("browser"));
        assert_eq!(ok.pattern(MatchField::Title), None);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"wm_class":"Firefox","role":"browser"}"#);
    }
}
