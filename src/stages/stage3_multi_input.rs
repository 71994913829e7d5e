use crate::error::{MalformedRuleError, Result};
use crate::models::SubstitutionRule;

/// Execute Stage 3: Multi-input expansion
///
/// Splits "any of these spellings" into one rule per spelling, in the
/// authored order, so later stages only ever see a single input.
pub fn expand_inputs(rules: &[SubstitutionRule]) -> Result<Vec<SubstitutionRule>> {
    let mut expanded = Vec::with_capacity(rules.len());

    for rule in rules {
        if rule.bidirectional || !rule.primary_plurals.is_empty() || !rule.reverse_plurals.is_empty()
        {
            return Err(MalformedRuleError::new(
                "rule must be unidirectional without plural data before multi-input expansion",
            ));
        }

        for input in &rule.primary_inputs {
            expanded.push(SubstitutionRule {
                primary_inputs: vec![input.clone()],
                ..rule.clone()
            });
        }
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CapitalizationMode;

    #[test]
    fn test_one_rule_per_input_in_order() {
        let rule = SubstitutionRule::with_alternatives(["the pope", "pope Francis", "pope"], ["Satan"])
            .no_plurals()
            .capitalization(CapitalizationMode::Ignore);
        let expanded = expand_inputs(&[rule.clone()]).unwrap();

        assert_eq!(expanded.len(), 3);
        let inputs: Vec<&str> = expanded.iter().map(|r| r.primary_inputs[0].as_str()).collect();
        assert_eq!(inputs, vec!["the pope", "pope Francis", "pope"]);

        for r in &expanded {
            assert_eq!(r.primary_inputs.len(), 1);
            assert_eq!(r.reverse_inputs, rule.reverse_inputs);
            assert_eq!(r.capitalization_mode, rule.capitalization_mode);
            assert_eq!(r.whole_word_match, rule.whole_word_match);
            assert_eq!(r.token_routing, rule.token_routing);
        }
    }

    #[test]
    fn test_single_input_passes_through() {
        let rule = SubstitutionRule::new("yes", "no").no_plurals();
        assert_eq!(expand_inputs(&[rule.clone()]).unwrap(), vec![rule]);
    }

    #[test]
    fn test_bidirectional_rule_fails() {
        let rule = SubstitutionRule::new("yes", "no").no_plurals().bidirectional();
        assert!(expand_inputs(&[rule]).is_err());
    }
}
