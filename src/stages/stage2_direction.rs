use crate::error::{MalformedRuleError, Result};
use crate::models::SubstitutionRule;

/// Execute Stage 2: Direction expansion
///
/// Produces the forward rule (all primary inputs to the canonical output)
/// and, for bidirectional rules, a reverse rule mapping every reverse
/// spelling back to the first primary input. A multi-spelling output
/// therefore collapses to one form going forward while all of its
/// spellings are matched going back.
pub fn expand_directions(rules: &[SubstitutionRule]) -> Result<Vec<SubstitutionRule>> {
    let mut expanded = Vec::with_capacity(rules.len() * 2);

    for rule in rules {
        if !rule.primary_plurals.is_empty() || !rule.reverse_plurals.is_empty() {
            return Err(MalformedRuleError::new(
                "plural data must be resolved before direction expansion",
            ));
        }

        let (Some(first_input), Some(canonical_output)) =
            (rule.first_input(), rule.canonical_output())
        else {
            return Err(MalformedRuleError::new("rule has no inputs"));
        };

        expanded.push(SubstitutionRule {
            reverse_inputs: vec![canonical_output.to_string()],
            bidirectional: false,
            ..rule.clone()
        });

        if rule.bidirectional {
            // Without tokens the reverse rule would undo the forward one
            if !rule.token_routing {
                return Err(MalformedRuleError::new(
                    "bidirectional rule requires token routing",
                ));
            }

            expanded.push(SubstitutionRule {
                primary_inputs: rule.reverse_inputs.clone(),
                reverse_inputs: vec![first_input.to_string()],
                bidirectional: false,
                ..rule.clone()
            });
        }
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unidirectional_narrows_reverse_inputs() {
        let rule =
            SubstitutionRule::with_alternatives(["concrete"], ["papier mache", "papier-mâché"])
                .no_plurals();
        let expanded = expand_directions(&[rule]).unwrap();

        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].primary_inputs, vec!["concrete"]);
        assert_eq!(expanded[0].reverse_inputs, vec!["papier mache"]);
        assert!(!expanded[0].bidirectional);
    }

    #[test]
    fn test_bidirectional_yields_forward_then_reverse() {
        let rule =
            SubstitutionRule::with_alternatives(["concrete"], ["papier mache", "papier-mâché"])
                .no_plurals()
                .bidirectional();
        let expanded = expand_directions(&[rule]).unwrap();

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].primary_inputs, vec!["concrete"]);
        assert_eq!(expanded[0].reverse_inputs, vec!["papier mache"]);
        assert_eq!(expanded[1].primary_inputs, vec!["papier mache", "papier-mâché"]);
        assert_eq!(expanded[1].reverse_inputs, vec!["concrete"]);
        assert!(expanded.iter().all(|r| !r.bidirectional));
    }

    #[test]
    fn test_reverse_output_is_first_primary_input() {
        let rule = SubstitutionRule::with_alternatives(["verifiable", "verified"], ["legit"])
            .no_plurals()
            .bidirectional();
        let expanded = expand_directions(&[rule]).unwrap();

        assert_eq!(expanded[1].primary_inputs, vec!["legit"]);
        assert_eq!(expanded[1].reverse_inputs, vec!["verifiable"]);
    }

    #[test]
    fn test_bidirectional_without_token_routing_fails() {
        let rule = SubstitutionRule::new("rebuild", "avenge")
            .no_plurals()
            .bidirectional()
            .without_token_routing();
        let err = expand_directions(&[rule]).unwrap_err();

        assert_eq!(err.reason, "bidirectional rule requires token routing");
    }

    #[test]
    fn test_unresolved_plurals_fail() {
        let rule = SubstitutionRule::new("rebuild", "avenge");
        let err = expand_directions(&[rule]).unwrap_err();

        assert_eq!(
            err.reason,
            "plural data must be resolved before direction expansion"
        );
    }

    #[test]
    fn test_empty_inputs_fail() {
        let rule = SubstitutionRule::with_alternatives(Vec::<String>::new(), ["x"]).no_plurals();
        assert!(expand_directions(&[rule]).is_err());
    }
}
