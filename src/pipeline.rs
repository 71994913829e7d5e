use tracing::{debug, info};

use crate::error::Result;
use crate::models::{GeneratedRules, GroupDefaults, SubstitutionGroup, SubstitutionRule};
use crate::stages::{
    RoutedLeaves, Stage4Config, expand_capitalization, expand_directions, expand_inputs,
    expand_plurals, route_through_tokens,
};

/// Configuration for a full pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub capitalization: Stage4Config,
    /// Metadata copied onto every generated group
    pub group_defaults: GroupDefaults,
}

/// How a single authored rule was expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleExpansion {
    pub name: String,
    /// Unidirectional, single-input rules after stages 1-3
    pub atomic_rules: usize,
    pub phase1_leaves: usize,
    pub phase2_leaves: usize,
}

/// Result of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// One group per authored rule, in authored order
    pub phase1: Vec<SubstitutionGroup>,
    /// One group per token-routed rule, in authored order
    pub phase2: Vec<SubstitutionGroup>,
    pub expansions: Vec<RuleExpansion>,
}

impl PipelineOutput {
    /// Assemble the final document, phase 1 groups first
    pub fn into_document(self) -> GeneratedRules {
        let mut groups = self.phase1;
        groups.extend(self.phase2);
        GeneratedRules { groups }
    }
}

/// One authored rule after all five stages
#[derive(Debug)]
struct ExpandedRule {
    /// Unidirectional, single-input rules after stages 1-3
    atomic_rules: usize,
    routed: RoutedLeaves,
}

/// Run one authored rule through all five stages
fn expand_rule(rule: &SubstitutionRule, config: &PipelineConfig) -> Result<ExpandedRule> {
    let rules = expand_plurals(std::slice::from_ref(rule));
    let rules = expand_directions(&rules)?;
    let rules = expand_inputs(&rules)?;
    let leaves = expand_capitalization(&rules, &config.capitalization)?;

    Ok(ExpandedRule {
        atomic_rules: rules.len(),
        routed: route_through_tokens(leaves, rule.token_routing),
    })
}

/// Execute the full generation pipeline
///
/// Fails on the first malformed rule; nothing is produced for a partial run.
pub fn run_pipeline(rules: &[SubstitutionRule], config: &PipelineConfig) -> Result<PipelineOutput> {
    let mut output = PipelineOutput::default();

    for rule in rules {
        let name = rule.name();
        let ExpandedRule {
            atomic_rules,
            routed,
        } = expand_rule(rule, config).map_err(|e| e.for_rule(&name))?;

        debug!(
            "{}: {} atomic rules, {} phase 1 leaves, {} phase 2 leaves",
            name,
            atomic_rules,
            routed.phase1.len(),
            routed.phase2.len()
        );

        output.expansions.push(RuleExpansion {
            name: name.clone(),
            atomic_rules,
            phase1_leaves: routed.phase1.len(),
            phase2_leaves: routed.phase2.len(),
        });

        if !routed.phase2.is_empty() {
            output.phase2.push(SubstitutionGroup::new(
                name.clone(),
                routed.phase2,
                &config.group_defaults,
            ));
        }
        output.phase1.push(SubstitutionGroup::new(
            name,
            routed.phase1,
            &config.group_defaults,
        ));
    }

    info!(
        "Expanded {} rules into {} phase 1 groups and {} phase 2 groups",
        rules.len(),
        output.phase1.len(),
        output.phase2.len()
    );

    Ok(output)
}
