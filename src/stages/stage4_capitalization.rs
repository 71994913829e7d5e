use crate::error::{MalformedRuleError, Result};
use crate::models::{CapitalizationMode, LeafSubstitution, SubstitutionRule};

// JavaScript's `\b` treats `é` as a non-word character, so word characters
// are spelled out as `\w` plus the Latin accented letters U+00C0..U+024F.

/// Preceded by the start of the text, whitespace or a non-letter
pub const DEFAULT_LEADING_BOUNDARY: &str = r"(?<=^|\s|[^\w\u00C0-\u024F])";

/// Followed by the end of the text, whitespace or a non-letter
pub const DEFAULT_TRAILING_BOUNDARY: &str = r"(?=$|\s|[^\w\u00C0-\u024F])";

/// Configuration for Stage 4 capitalisation expansion
#[derive(Debug, Clone)]
pub struct Stage4Config {
    /// Assertion placed before whole-word patterns
    pub leading_boundary: String,
    /// Assertion placed after whole-word patterns
    pub trailing_boundary: String,
}

impl Default for Stage4Config {
    fn default() -> Self {
        Self {
            leading_boundary: DEFAULT_LEADING_BOUNDARY.to_string(),
            trailing_boundary: DEFAULT_TRAILING_BOUNDARY.to_string(),
        }
    }
}

impl Stage4Config {
    /// Wrap a pattern in word-boundary assertions when the rule asks for it
    pub fn boundary_wrap(&self, rule: &SubstitutionRule, pattern: &str) -> String {
        if rule.whole_word_match {
            format!("{}{}{}", self.leading_boundary, pattern, self.trailing_boundary)
        } else {
            pattern.to_string()
        }
    }
}

/// Uppercase the first character, leaving the rest as authored
fn titlecase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Execute Stage 4: Capitalisation expansion
///
/// Lowers each atomic rule into leaf substitutions. `Preserve` rules give
/// three leaves whose order matters, since the engine applies them in
/// list order:
/// 1. all uppercase, case-sensitive
/// 2. leading capital, case-sensitive
/// 3. all lowercase, case-insensitive catch-all
///
/// Other modes give a single leaf with the text as authored.
pub fn expand_capitalization(
    rules: &[SubstitutionRule],
    config: &Stage4Config,
) -> Result<Vec<LeafSubstitution>> {
    let mut leaves = Vec::with_capacity(rules.len() * 3);

    for rule in rules {
        let (input, output) = match (
            rule.primary_inputs.as_slice(),
            rule.reverse_inputs.as_slice(),
        ) {
            ([input], [output]) if !rule.bidirectional => (input, output),
            _ => {
                return Err(MalformedRuleError::new(
                    "rule must be unidirectional and singular before capitalization expansion",
                ));
            }
        };

        match rule.capitalization_mode {
            CapitalizationMode::Preserve => {
                leaves.push(LeafSubstitution::new(
                    config.boundary_wrap(rule, &input.to_uppercase()),
                    true,
                    output.to_uppercase(),
                ));
                leaves.push(LeafSubstitution::new(
                    config.boundary_wrap(rule, &titlecase(input)),
                    true,
                    titlecase(output),
                ));
                leaves.push(LeafSubstitution::new(
                    config.boundary_wrap(rule, &input.to_lowercase()),
                    false,
                    output.to_lowercase(),
                ));
            }
            CapitalizationMode::Ignore | CapitalizationMode::MatchExact => {
                leaves.push(LeafSubstitution::new(
                    config.boundary_wrap(rule, input),
                    rule.capitalization_mode == CapitalizationMode::MatchExact,
                    output.clone(),
                ));
            }
        }
    }

    Ok(leaves)
}
