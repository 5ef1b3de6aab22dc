use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Hue used when no rule matches a commit subject.
pub const DEFAULT_HUE: f64 = 240.0;

/// A user-configured `{ regex, hue }` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRule {
    pub regex: String,
    pub hue: f64,
}

impl ColorRule {
    pub fn new(regex: impl Into<String>, hue: f64) -> Self {
        Self {
            regex: regex.into(),
            hue,
        }
    }
}

/// Rules keyed to conventional-commit subject prefixes.
pub fn default_color_rules() -> Vec<ColorRule> {
    vec![
        ColorRule::new("^feat", 234.0),
        ColorRule::new("^fix", 0.0),
        ColorRule::new("^docs", 100.0),
        ColorRule::new("^refactor", 60.0),
        ColorRule::new("^test", 308.0),
    ]
}

/// Compiled, ordered rule list. The first rule whose pattern matches the
/// commit subject decides the hue.
#[derive(Debug, Clone)]
pub struct HueRules {
    rules: Vec<(Regex, f64)>,
    default_hue: f64,
}

impl HueRules {
    /// Compile every rule, skipping those whose pattern does not compile.
    ///
    /// Skipped rules are logged once here and returned so the host can
    /// surface them; the remaining rules keep their relative order.
    pub fn compile(rules: &[ColorRule], default_hue: f64) -> (Self, Vec<Error>) {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut skipped = Vec::new();

        for rule in rules {
            match compile_rule(rule) {
                Ok(re) => compiled.push((re, rule.hue)),
                Err(e) => {
                    warn!("Skipping color rule: {}", e);
                    skipped.push(e);
                }
            }
        }

        (
            Self {
                rules: compiled,
                default_hue,
            },
            skipped,
        )
    }

    pub fn hue_for(&self, subject: &str) -> f64 {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(subject))
            .map(|&(_, hue)| hue)
            .unwrap_or(self.default_hue)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for HueRules {
    fn default() -> Self {
        Self::compile(&default_color_rules(), DEFAULT_HUE).0
    }
}

fn compile_rule(rule: &ColorRule) -> Result<Regex> {
    Regex::new(&rule.regex).map_err(|source| Error::InvalidPattern {
        pattern: rule.regex.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = HueRules::default();
        assert_eq!(rules.len(), 5);
        assert_eq!(rules.hue_for("feat: new"), 234.0);
        assert_eq!(rules.hue_for("fix: bug"), 0.0);
        assert_eq!(rules.hue_for("docs: readme"), 100.0);
        assert_eq!(rules.hue_for("refactor: split module"), 60.0);
        assert_eq!(rules.hue_for("test: more cases"), 308.0);
    }

    #[test]
    fn test_unmatched_falls_back() {
        let rules = HueRules::default();
        assert_eq!(rules.hue_for("chore: cleanup"), DEFAULT_HUE);
        assert_eq!(rules.hue_for(""), DEFAULT_HUE);
        // Anchored patterns do not match mid-subject.
        assert_eq!(rules.hue_for("revert fix: bug"), DEFAULT_HUE);
    }

    #[test]
    fn test_first_match_wins() {
        let (rules, skipped) = HueRules::compile(
            &[ColorRule::new("bug", 10.0), ColorRule::new("^fix", 20.0)],
            DEFAULT_HUE,
        );
        assert!(skipped.is_empty());
        assert_eq!(rules.hue_for("fix: bug"), 10.0);
        assert_eq!(rules.hue_for("fix: typo"), 20.0);
    }

    #[test]
    fn test_invalid_rule_is_skipped() {
        let (rules, skipped) = HueRules::compile(
            &[ColorRule::new("[invalid", 10.0), ColorRule::new("(?i)^wip", 50.0)],
            123.0,
        );
        assert_eq!(rules.len(), 1);
        assert_eq!(skipped.len(), 1);
        assert!(matches!(&skipped[0], Error::InvalidPattern { pattern, .. } if pattern == "[invalid"));
        assert_eq!(rules.hue_for("WIP: half done"), 50.0);
        assert_eq!(rules.hue_for("[invalid"), 123.0);
    }

    #[test]
    fn test_empty_rules_use_default() {
        let (rules, _) = HueRules::compile(&[], 42.0);
        assert!(rules.is_empty());
        assert_eq!(rules.hue_for("feat: anything"), 42.0);
    }
}
