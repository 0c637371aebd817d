use super::{Match, WindowProps};
use crate::errors::ConfigError;
use std::collections::HashSet;

/// The first rule matching `window`, in declaration order.
///
/// Every rule is an independent predicate, so order does not change whether a
/// window floats; it only decides which rule is reported as the reason.
#[must_use]
pub fn first_float_rule<'a>(rules: &'a [Match], window: &WindowProps) -> Option<&'a Match> {
    rules.iter().find(|rule| rule.matches(window))
}

#[must_use]
pub fn should_float(rules: &[Match], window: &WindowProps) -> bool {
    first_float_rule(rules, window).is_some()
}

#[must_use]
pub fn find_duplicate_rules(rules: &[Match]) -> Vec<ConfigError> {
    let mut seen = HashSet::new();
    rules
        .iter()
        .filter(|rule| !seen.insert(*rule))
        .map(|rule| ConfigError::DuplicateFloatRule(rule.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchField;

    fn rules() -> Vec<Match> {
        vec![
            Match::wm_class("makebranch").unwrap(),
            Match::title("branchdialog").unwrap(),
            Match::title(".*dialog").unwrap(),
        ]
    }

    #[test]
    fn first_matching_rule_is_reported() {
        let rules = rules();
        let rule = first_float_rule(&rules, &WindowProps::with_name("branchdialog")).unwrap();
        assert_eq!(rule.pattern(MatchField::Title), Some("branchdialog"));
        let rule = first_float_rule(&rules, &WindowProps::with_name("open dialog")).unwrap();
        assert_eq!(rule.pattern(MatchField::Title), Some(".*dialog"));
    }

    #[test]
    fn unmatched_window_is_tiled() {
        assert!(!should_float(&rules(), &WindowProps::with_class("firefox")));
        assert!(should_float(&rules(), &WindowProps::with_class("makebranch")));
    }

    #[test]
    fn same_pattern_on_different_fields_is_not_a_duplicate() {
        let mut rules = rules();
        rules.push(Match::wm_class("branchdialog").unwrap());
        assert!(find_duplicate_rules(&rules).is_empty());
        rules.push(Match::title("branchdialog").unwrap());
        assert_eq!(find_duplicate_rules(&rules).len(), 1);
    }
}
