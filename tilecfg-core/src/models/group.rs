use super::{Match, WindowProps};
use serde::{Deserialize, Serialize};

/// A named workspace.
///
/// `name` is the identifier the runtime uses and doubles as the key symbol of
/// the generated switch-to-group binding. `label` is only ever displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub matches: Vec<Match>,
    /// Command launched when the group is first shown.
    #[serde(default)]
    pub spawn: Option<String>,
}

impl Group {
    #[must_use]
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            matches: vec![],
            spawn: None,
        }
    }

    #[must_use]
    pub fn with_matches(mut self, matches: Vec<Match>) -> Self {
        self.matches = matches;
        self
    }

    #[must_use]
    pub fn with_spawn(mut self, command: &str) -> Self {
        self.spawn = Some(command.to_owned());
        self
    }

    /// The label shown in the bar, falling back to the name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// The first of this group's rules that matches `window`.
    #[must_use]
    pub fn first_match(&self, window: &WindowProps) -> Option<&Match> {
        self.matches.iter().find(|rule| rule.matches(window))
    }
}

/// Picks the group a new window is sent to.
///
/// Groups are tried in declaration order, and within a group its rules in
/// declaration order. The first rule that matches wins, so a window matching
/// rules of two groups always lands on the group declared first.
#[must_use]
pub fn resolve_group<'a>(groups: &'a [Group], window: &WindowProps) -> Option<&'a Group> {
    groups
        .iter()
        .find(|group| group.first_match(window).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchField;

    fn groups() -> Vec<Group> {
        vec![
            Group::new("1", "term"),
            Group::new("2", "www").with_matches(vec![
                Match::wm_class("firefox").unwrap(),
                Match::role("browser").unwrap(),
            ]),
            Group::new("3", "dev").with_matches(vec![Match::role("browser").unwrap()]),
        ]
    }

    #[test]
    fn unmatched_window_has_no_group() {
        let groups = groups();
        assert!(resolve_group(&groups, &WindowProps::with_class("xterm")).is_none());
    }

    #[test]
    fn first_declared_group_wins_on_overlap() {
        let groups = groups();
        let group = resolve_group(&groups, &WindowProps::with_role("browser")).unwrap();
        assert_eq!(group.name, "2");
    }

    #[test]
    fn first_rule_inside_a_group_is_reported() {
        let groups = groups();
        let window = WindowProps {
            role: Some("browser".to_owned()),
            ..WindowProps::with_class("firefox")
        };
        let rule = groups[1].first_match(&window).unwrap();
        assert_eq!(rule.pattern(MatchField::WmClass), Some("firefox"));
    }

    #[test]
    fn combined_rule_needs_every_criterion() {
        let groups = vec![Group::new("3", "3 WEB").with_matches(vec![
            Match::wm_class("Firefox")
                .and_then(|rule| rule.and_role("browser"))
                .unwrap(),
            Match::wm_class("transmission-qt").unwrap(),
        ])];
        let firefox = WindowProps::with_class("Firefox");
        assert!(resolve_group(&groups, &firefox).is_none());
        let browser = WindowProps {
            role: Some("browser".to_owned()),
            ..firefox
        };
        assert_eq!(resolve_group(&groups, &browser).unwrap().name, "3");
        let torrent = WindowProps::with_class("transmission-qt");
        assert_eq!(resolve_group(&groups, &torrent).unwrap().name, "3");
    }

    #[test]
    fn label_falls_back_to_name() {
        assert_eq!(Group::new("4", "").display_label(), "4");
        assert_eq!(Group::new("4", "chat").display_label(), "chat");
    }
}
