use serde::{Deserialize, Serialize};

/// How the engine interprets a substitution's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputKind {
    #[default]
    #[serde(rename = "regexp")]
    Regexp,
}

/// How the engine interprets a substitution's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputKind {
    /// Output is inserted verbatim
    #[default]
    #[serde(rename = "text")]
    Literal,
    /// Output is a script computed by the engine; never generated here
    #[serde(rename = "function")]
    Computed,
}

/// A single find/replace entry executed by the substitution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafSubstitution {
    #[serde(rename = "input")]
    pub input_pattern: String,
    pub input_type: InputKind,
    #[serde(rename = "output")]
    pub output_text: String,
    #[serde(rename = "outputType")]
    pub output_kind: OutputKind,
    pub case_sensitive: bool,
}

impl LeafSubstitution {
    /// Create a regex leaf with literal output
    pub fn new(
        input_pattern: impl Into<String>,
        case_sensitive: bool,
        output_text: impl Into<String>,
    ) -> Self {
        Self {
            input_pattern: input_pattern.into(),
            input_type: InputKind::Regexp,
            output_text: output_text.into(),
            output_kind: OutputKind::Literal,
            case_sensitive,
        }
    }
}
