use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::SubstitutionRule;

/// Load rule declarations from a JSON file
pub fn load_rules_file(path: &Path) -> Result<Vec<SubstitutionRule>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_rules_json(&content).with_context(|| format!("Invalid rule file: {:?}", path))
}

/// Parse a JSON array of rule declarations
pub fn parse_rules_json(json: &str) -> Result<Vec<SubstitutionRule>> {
    let rules: Vec<SubstitutionRule> =
        serde_json::from_str(json).context("Failed to parse rule JSON")?;

    for (index, rule) in rules.iter().enumerate() {
        check_construction(rule).with_context(|| format!("Rule {} ({})", index, rule.name()))?;
    }

    Ok(rules)
}

/// Caller-side checks the pipeline assumes already hold
fn check_construction(rule: &SubstitutionRule) -> Result<()> {
    if rule.primary_inputs.is_empty() {
        bail!("primaryInputs must not be empty");
    }
    if rule.reverse_inputs.is_empty() {
        bail!("reverseInputs must not be empty");
    }
    if rule.primary_plurals.is_empty() != rule.reverse_plurals.is_empty() {
        bail!("primaryPlurals and reversePlurals must both be empty or both be set");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CapitalizationMode;

    #[test]
    fn test_parse_rules_json() {
        let json = r#"[
            {"primaryInputs": ["mile"], "reverseInputs": ["furlong"], "bidirectional": true},
            {
                "primaryInputs": ["ship"],
                "reverseInputs": ["dinghy"],
                "primaryPlurals": ["ships"],
                "reversePlurals": ["dinghies"],
                "wholeWordMatch": false,
                "capitalizationMode": "ignore",
                "tokenRouting": false
            }
        ]"#;

        let rules = parse_rules_json(json).unwrap();

        assert_eq!(rules.len(), 2);
        assert!(rules[0].bidirectional);
        assert!(rules[0].token_routing);
        assert!(rules[0].whole_word_match);
        assert_eq!(rules[0].capitalization_mode, CapitalizationMode::Preserve);
        assert!(!rules[0].has_plurals());

        assert_eq!(rules[1].reverse_plurals, vec!["dinghies"]);
        assert!(!rules[1].whole_word_match);
        assert!(!rules[1].token_routing);
        assert_eq!(rules[1].capitalization_mode, CapitalizationMode::Ignore);
    }

    #[test]
    fn test_unpaired_plurals_rejected() {
        let json = r#"[{"primaryInputs": ["foot"], "reverseInputs": ["hand"], "primaryPlurals": ["feet"]}]"#;
        let err = parse_rules_json(json).unwrap_err();

        assert!(format!("{:#}", err).contains("both be empty or both be set"));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let json = r#"[{"primaryInputs": [], "reverseInputs": ["hand"]}]"#;
        assert!(parse_rules_json(json).is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_rules_json("{not json").is_err());
    }

    #[test]
    fn test_load_rules_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"[{"primaryInputs": ["yes"], "reverseInputs": ["no"]}]"#).unwrap();

        let rules = load_rules_file(&path).unwrap();
        assert_eq!(rules[0].name(), "yes -> no");
    }
}
