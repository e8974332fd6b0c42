// Rule specification grammar

use std::fmt;

/// Separator between rules in a specification.
pub const RULE_SEPARATOR: char = '|';

/// A single rule parsed out of a rule specification.
///
/// Both slices borrow from the specification string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedRule<'a> {
    /// Rule name, used as the registry key
    pub name: &'a str,

    /// Rule parameter, empty when the rule has none
    pub param: &'a str,
}

impl<'a> ParsedRule<'a> {
    /// Parse a single rule segment (`name` or `name(param)`).
    ///
    /// Everything after the first `(` is the parameter, with any trailing `)`
    /// characters stripped. Unbalanced input degrades instead of failing:
    /// `min(3` and `min(3))` both yield `("min", "3")`.
    pub fn parse(segment: &'a str) -> Self {
        match segment.split_once('(') {
            Some((name, rest)) => Self {
                name,
                param: rest.trim_end_matches(')'),
            },
            None => Self {
                name: segment,
                param: "",
            },
        }
    }

    /// Whether the rule carries a parameter
    pub fn has_param(&self) -> bool {
        !self.param.is_empty()
    }
}

impl fmt::Display for ParsedRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_param() {
            write!(f, "{}({})", self.name, self.param)
        } else {
            f.write_str(self.name)
        }
    }
}

/// Parse a pipe-delimited rule specification into its rules, in order.
///
/// An empty specification yields no rules at all. Rule names are not checked
/// here: names with no registered validator (including the empty name produced
/// by `a||b`) are skipped at dispatch time.
///
/// ```
/// use purify_validation::{parse_rules, ParsedRule};
///
/// let rules = parse_rules("required|min(3)|max(20)");
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[1], ParsedRule { name: "min", param: "3" });
/// ```
pub fn parse_rules(spec: &str) -> Vec<ParsedRule<'_>> {
    if spec.is_empty() {
        return Vec::new();
    }

    spec.split(RULE_SEPARATOR).map(ParsedRule::parse).collect()
}
