pub mod catalogue;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use catalogue::default_rules;
pub use error::MalformedRuleError;
pub use io::{DEFAULT_OUTPUT_PATH, load_rules_file, parse_rules_json};
pub use models::{
    CapitalizationMode, GeneratedRules, GroupDefaults, LeafSubstitution, SubstitutionGroup,
    SubstitutionRule,
};
pub use pipeline::{PipelineConfig, PipelineOutput, RuleExpansion, run_pipeline};
