use thiserror::Error;

/// Result type for rule expansion
pub type Result<T> = std::result::Result<T, MalformedRuleError>;

/// A rule violated the precondition of an expansion stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed rule: {reason}")]
pub struct MalformedRuleError {
    pub reason: String,
}

impl MalformedRuleError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Prefix the reason with the name of the rule that failed
    pub fn for_rule(self, name: &str) -> Self {
        Self {
            reason: format!("\"{}\": {}", name, self.reason),
        }
    }
}
