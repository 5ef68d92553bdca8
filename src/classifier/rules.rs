use regex::Regex;

/// Which lines a rule applies to, and whether it sees the raw or the
/// literal-stripped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Every line, raw text.
    Always,
    /// Comment lines only, raw text.
    CommentOnly,
    /// Non-comment lines only, literal-stripped text.
    CodeOnly,
}

/// How a rule decides whether it fires on a line of text.
pub enum Matcher {
    /// Fires when the pattern matches.
    Pattern(Regex),
    /// Fires when `pattern` matches and `unless` does not. Used where one
    /// rule's matches are a superset of another's and the more specific
    /// rule takes precedence on the line.
    PatternUnless { pattern: Regex, unless: Regex },
    /// Fires when the predicate returns true.
    Predicate(fn(&str) -> bool),
}

/// A single named style rule: a stateless predicate over one line.
pub struct Rule {
    pub name: &'static str,
    pub gate: Gate,
    matcher: Matcher,
}

impl Rule {
    fn pattern(name: &'static str, gate: Gate, pattern: &str) -> Self {
        Self {
            name,
            gate,
            matcher: Matcher::Pattern(compile(pattern)),
        }
    }

    fn pattern_unless(name: &'static str, gate: Gate, pattern: &str, unless: &str) -> Self {
        Self {
            name,
            gate,
            matcher: Matcher::PatternUnless {
                pattern: compile(pattern),
                unless: compile(unless),
            },
        }
    }

    const fn predicate(name: &'static str, gate: Gate, predicate: fn(&str) -> bool) -> Self {
        Self {
            name,
            gate,
            matcher: Matcher::Predicate(predicate),
        }
    }

    /// Whether this rule fires on the given text (raw or stripped,
    /// according to the rule's gate).
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Pattern(pattern) => pattern.is_match(text),
            Matcher::PatternUnless { pattern, unless } => {
                pattern.is_match(text) && !unless.is_match(text)
            }
            Matcher::Predicate(predicate) => predicate(text),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex")
}

/// Non-whitespace on both sides of a comparator token. Longest tokens
/// first so `<=>` is not consumed as `<`.
const CRAMPED_COMPARATOR: &str = r"\S(<=>|===|==|<=|>=|!=|<|>)\S";

/// An unbalanced single-line brace: exactly one of `{` / `}` present,
/// suggesting a block opened or closed on another line.
fn unbalanced_brace(text: &str) -> bool {
    text.contains('{') != text.contains('}')
}

/// The fixed rule battery, in evaluation (and reporting) order.
///
/// CRAMPED COMPARATOR sits before CRAMPED OPERATOR: the comparator
/// pattern is checked first, and the operator rule stands down on any
/// line the comparator pattern matches, so `a<=b` is not double-reported
/// as a cramped `=`.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::pattern("TRAILING WHITESPACE", Gate::Always, r"\s+$"),
        Rule::pattern("HARD TABS", Gate::Always, r"\t"),
        Rule::pattern(
            "POSSIBLE COMMENTED CODE",
            Gate::CommentOnly,
            r"puts|=|\{|\}|\+|\spp\s",
        ),
        Rule::pattern("VERBAL OPERATORS", Gate::CodeOnly, r"\s(and|or)\s"),
        Rule::pattern(
            "SAME-LINE DO...END",
            Gate::CodeOnly,
            r"(^|\s)do\s(.*\s)?end(\s|$)",
        ),
        Rule::predicate("MULTI-LINE {..}", Gate::CodeOnly, unbalanced_brace),
        Rule::pattern(
            "||= INITIALIZING BOOLEAN",
            Gate::CodeOnly,
            r"\|\|=\s*(true|false)",
        ),
        Rule::pattern("FOR USED", Gate::CodeOnly, r"(^|\s)for\s"),
        Rule::pattern(
            "METHOD DEF W/ EMPTY PARENS",
            Gate::CodeOnly,
            r"(^|\s)def\s.*\(\)",
        ),
        Rule::pattern(
            "SUPERFLUOUS THEN",
            Gate::CodeOnly,
            r"(^|\s)if\s(.*\s)?then(\s|$)",
        ),
        Rule::pattern("CLASS VARIABLE USED", Gate::CodeOnly, r"\s@@"),
        Rule::pattern(
            "BARE EXCEPTION RESCUED",
            Gate::CodeOnly,
            r"(^|\s)rescue\s(.*\s)?Exception(\s|$)",
        ),
        Rule::pattern("CRAMPED COMPARATOR", Gate::CodeOnly, CRAMPED_COMPARATOR),
        Rule::pattern_unless(
            "CRAMPED OPERATOR",
            Gate::CodeOnly,
            r"\S[=+*%-]\S",
            CRAMPED_COMPARATOR,
        ),
    ]
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
