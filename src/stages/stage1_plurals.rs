use crate::models::SubstitutionRule;

/// Execute Stage 1: Plural expansion
///
/// Every rule is emitted with its plural lists cleared to handle the
/// singular form. When both plural lists are populated a second rule
/// follows, with the plurals promoted to inputs.
pub fn expand_plurals(rules: &[SubstitutionRule]) -> Vec<SubstitutionRule> {
    let mut expanded = Vec::with_capacity(rules.len() * 2);

    for rule in rules {
        expanded.push(SubstitutionRule {
            primary_plurals: vec![],
            reverse_plurals: vec![],
            ..rule.clone()
        });

        if rule.has_plurals() {
            expanded.push(SubstitutionRule {
                primary_inputs: rule.primary_plurals.clone(),
                reverse_inputs: rule.reverse_plurals.clone(),
                primary_plurals: vec![],
                reverse_plurals: vec![],
                ..rule.clone()
            });
        }
    }

    expanded
}
