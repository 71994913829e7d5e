use serde::{Deserialize, Serialize};

/// How a rule treats the capitalisation of matched text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapitalizationMode {
    /// Match any capitalisation, output exactly as authored
    #[serde(rename = "ignore")]
    Ignore,
    /// Match only the authored capitalisation, output exactly as authored
    #[serde(rename = "matchExact")]
    MatchExact,
    /// Match any capitalisation and carry it over to the output:
    /// 1. all uppercase input gives all uppercase output
    /// 2. else a leading capital gives a leading capital
    /// 3. anything else gives all lowercase output
    #[default]
    #[serde(rename = "preserve")]
    Preserve,
}

/// A high-level substitution rule as authored
///
/// Plural, bidirectional and multi-spelling rules are lowered into single
/// leaf substitutions by the stages in [`crate::stages`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionRule {
    /// Surface forms matched in the forward direction
    pub primary_inputs: Vec<String>,
    /// Surface forms matched in the reverse direction; the first entry is
    /// the canonical forward output
    pub reverse_inputs: Vec<String>,
    /// Plural forms of `primary_inputs` (empty when `reverse_plurals` is)
    #[serde(default)]
    pub primary_plurals: Vec<String>,
    /// Plural forms of `reverse_inputs` (empty when `primary_plurals` is)
    #[serde(default)]
    pub reverse_plurals: Vec<String>,
    #[serde(default = "default_true")]
    pub whole_word_match: bool,
    #[serde(default)]
    pub capitalization_mode: CapitalizationMode,
    /// Route output through an intermediate token so other rules cannot re-match it
    #[serde(default = "default_true")]
    pub token_routing: bool,
    /// Also replace the output with the input
    #[serde(default)]
    pub bidirectional: bool,
}

fn default_true() -> bool {
    true
}

fn pluralise(words: &[String]) -> Vec<String> {
    words.iter().map(|w| format!("{}s", w)).collect()
}

impl SubstitutionRule {
    /// Create a single-spelling rule; plurals default to a trailing "s"
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self::with_alternatives([input], [output])
    }

    /// Create a rule with several input and/or output spellings
    pub fn with_alternatives<I, O>(inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let primary_inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();
        let reverse_inputs: Vec<String> = outputs.into_iter().map(Into::into).collect();

        Self {
            primary_plurals: pluralise(&primary_inputs),
            reverse_plurals: pluralise(&reverse_inputs),
            primary_inputs,
            reverse_inputs,
            whole_word_match: true,
            capitalization_mode: CapitalizationMode::Preserve,
            token_routing: true,
            bidirectional: false,
        }
    }

    pub fn bidirectional(self) -> Self {
        Self {
            bidirectional: true,
            ..self
        }
    }

    /// Drop plural handling entirely
    pub fn no_plurals(self) -> Self {
        Self {
            primary_plurals: vec![],
            reverse_plurals: vec![],
            ..self
        }
    }

    pub fn input_plurals<I>(self, plurals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            primary_plurals: plurals.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn output_plurals<I>(self, plurals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            reverse_plurals: plurals.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn input_plural(self, plural: impl Into<String>) -> Self {
        self.input_plurals([plural])
    }

    pub fn output_plural(self, plural: impl Into<String>) -> Self {
        self.output_plurals([plural])
    }

    pub fn capitalization(self, mode: CapitalizationMode) -> Self {
        Self {
            capitalization_mode: mode,
            ..self
        }
    }

    pub fn without_token_routing(self) -> Self {
        Self {
            token_routing: false,
            ..self
        }
    }

    /// Allow matches inside longer words
    pub fn partial_words(self) -> Self {
        Self {
            whole_word_match: false,
            ..self
        }
    }

    pub fn first_input(&self) -> Option<&str> {
        self.primary_inputs.first().map(String::as_str)
    }

    /// First reverse input, used as the forward replacement text
    pub fn canonical_output(&self) -> Option<&str> {
        self.reverse_inputs.first().map(String::as_str)
    }

    /// Whether both plural lists are populated
    pub fn has_plurals(&self) -> bool {
        !self.primary_plurals.is_empty() && !self.reverse_plurals.is_empty()
    }

    /// Display name, `"<first input> -> <canonical output>"`
    pub fn name(&self) -> String {
        format!(
            "{} -> {}",
            self.first_input().unwrap_or_default(),
            self.canonical_output().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rule_defaults() {
        let rule = SubstitutionRule::new("cheese", "hardmilk");

        assert_eq!(rule.primary_inputs, vec!["cheese"]);
        assert_eq!(rule.reverse_inputs, vec!["hardmilk"]);
        assert_eq!(rule.primary_plurals, vec!["cheeses"]);
        assert_eq!(rule.reverse_plurals, vec!["hardmilks"]);
        assert!(rule.whole_word_match);
        assert!(rule.token_routing);
        assert!(!rule.bidirectional);
        assert_eq!(rule.capitalization_mode, CapitalizationMode::Preserve);
    }

    #[test]
    fn test_alternatives_pluralise_each_spelling() {
        let rule = SubstitutionRule::with_alternatives(["kilometre", "kilometer"], ["league"]);
        assert_eq!(rule.primary_plurals, vec!["kilometres", "kilometers"]);
        assert_eq!(rule.reverse_plurals, vec!["leagues"]);
    }

    #[test]
    fn test_builders_override_fields() {
        let rule = SubstitutionRule::new("foot", "hand")
            .input_plural("feet")
            .bidirectional()
            .capitalization(CapitalizationMode::MatchExact);

        assert_eq!(rule.primary_plurals, vec!["feet"]);
        assert_eq!(rule.reverse_plurals, vec!["hands"]);
        assert!(rule.bidirectional);
        assert_eq!(rule.capitalization_mode, CapitalizationMode::MatchExact);

        let rule = rule.no_plurals().without_token_routing().partial_words();
        assert!(!rule.has_plurals());
        assert!(!rule.token_routing);
        assert!(!rule.whole_word_match);
    }

    #[test]
    fn test_name_uses_first_input_and_canonical_output() {
        let rule = SubstitutionRule::with_alternatives(["concrete"], ["papier mache", "papier-mâché"]);
        assert_eq!(rule.name(), "concrete -> papier mache");
    }

    #[test]
    fn test_parse_rule_with_defaults() {
        let json = r#"{"primaryInputs": ["CEO"], "reverseInputs": ["Head Honcho"], "capitalizationMode": "matchExact"}"#;
        let rule: SubstitutionRule = serde_json::from_str(json).unwrap();

        assert_eq!(rule.capitalization_mode, CapitalizationMode::MatchExact);
        assert!(rule.primary_plurals.is_empty());
        assert!(rule.whole_word_match);
        assert!(rule.token_routing);
        assert!(!rule.bidirectional);
    }
}
