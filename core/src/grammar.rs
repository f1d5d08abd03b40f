//! Shape check for initial-order lines.
//!
//! Initial orders arrive one item per line: a quantity, an optional size word,
//! the item (hyphenated names allowed) and a trailing noun, e.g.
//! "2 pepperoni pizzas" or "3 sugar free sodas". Change requests are
//! free-form and skip this check.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{line}' does not look like '<amount> <item> <pizzas|sodas>'")]
pub struct GrammarError {
    line: String,
}

impl GrammarError {
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }
}

static INITIAL_LINE: OnceLock<Regex> = OnceLock::new();

fn initial_line() -> &'static Regex {
    INITIAL_LINE.get_or_init(|| {
        Regex::new(r"^(\d+|\w+)\s+(\w+\s+)?(\w+|\w+-\w+)\s+(\w+)$")
            .expect("valid initial order regex")
    })
}

/// Validate the shape of an initial-order line (case-insensitive, trimmed).
pub fn check_initial_line(line: &str) -> Result<(), GrammarError> {
    let normalized = line.trim().to_lowercase();
    if initial_line().is_match(&normalized) {
        Ok(())
    } else {
        Err(GrammarError {
            line: line.trim().to_string(),
        })
    }
}
