use std::sync::Arc;

use regex::Regex;

use crate::regexp_cache::{InvalidRegexError, PATTERN_CACHE};

/// Validation rule attached to a field. Rules run in the order they were
/// added; the first failing one reports its message.
#[derive(Debug, Clone)]
pub enum Rule {
    Required { message: String },
    MaxLength { message: String, max_length: usize },
    /// The value must be a valid phone number (see
    /// [`PhoneControl::validate_number`](super::PhoneControl::validate_number)).
    PhoneNumber { message: String },
    /// The whole raw value must match `pattern`.
    Pattern { message: String, pattern: String, regex: Arc<Regex> },
}

impl Rule {
    pub fn pattern(pattern: &str, message: &str) -> Result<Self, InvalidRegexError> {
        let regex = PATTERN_CACHE.get_full_match_regex(pattern)?;
        Ok(Rule::Pattern {
            message: message.to_owned(),
            pattern: pattern.to_owned(),
            regex,
        })
    }

    pub fn max_length(max_length: usize) -> Self {
        Rule::MaxLength {
            message: format!("Please enter no more than {} characters.", max_length),
            max_length,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MaxLength { message, .. }
            | Rule::PhoneNumber { message }
            | Rule::Pattern { message, .. } => message,
        }
    }

    /// Rules other than `Required` are skipped for empty optional fields.
    pub fn applies_to_empty(&self) -> bool {
        matches!(self, Rule::Required { .. })
    }
}
