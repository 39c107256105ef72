pub mod date_rules;
pub mod time_rules;

pub use date_rules::*;
pub use time_rules::*;

use regex::{Captures, Regex};

/// How a matched pattern is rewritten
pub enum Rewrite {
    /// `$n`-style replacement template applied to every match
    Template(&'static str),
    /// Computed replacement for every match
    With(fn(&Captures) -> String),
}

/// One named step of a rewrite chain
pub struct RewriteRule {
    /// Stable name, used in logs and tests
    pub name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
    /// Trim surrounding whitespace after the step
    trim: bool,
}

impl RewriteRule {
    /// Build a rule from a pattern known to be valid at compile time
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid pattern for rule {}: {}", name, e)),
            rewrite,
            trim: false,
        }
    }

    fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Apply the rule to the buffer in place. Returns whether the buffer changed.
    pub fn apply(&self, buffer: &mut String) -> bool {
        let rewritten = match &self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(buffer.as_str(), *template),
            Rewrite::With(f) => self.pattern.replace_all(buffer.as_str(), |caps: &Captures| f(caps)),
        };
        let mut next = rewritten.into_owned();
        if self.trim {
            next = next.trim().to_string();
        }
        if next == *buffer {
            return false;
        }
        *buffer = next;
        true
    }

    /// Apply the rule to a copy of `input`
    pub fn rewrite(&self, input: &str) -> String {
        let mut buffer = input.to_string();
        self.apply(&mut buffer);
        buffer
    }
}

/// An ordered list of rules run over one buffer
pub struct RewriteChain {
    rules: Vec<RewriteRule>,
}

impl RewriteChain {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Run every rule in order over a copy of `input`
    pub fn run(&self, input: &str) -> String {
        let mut buffer = input.to_string();
        for rule in &self.rules {
            rule.apply(&mut buffer);
        }
        buffer
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&RewriteRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Rule names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

/// Integer capture group, if it fits in an `i64`
pub(crate) fn capture_number(caps: &Captures, group: usize) -> Option<i64> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}
