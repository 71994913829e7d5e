use sha2::{Digest, Sha256};

use crate::models::LeafSubstitution;

/// Leaves split across the two execution phases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutedLeaves {
    /// Leaves applied first; their outputs are tokens when routing is on
    pub phase1: Vec<LeafSubstitution>,
    /// Leaves replacing tokens with the real output text
    pub phase2: Vec<LeafSubstitution>,
}

/// Deterministic token for a leaf
///
/// SHA-256 over a length-prefixed encoding of the pattern, case flag and
/// output, truncated to 128 bits and written as a fixed-width decimal
/// number. Digits never match the word patterns of other rules and need
/// no regex escaping.
pub fn stable_token(leaf: &LeafSubstitution) -> String {
    let mut hasher = Sha256::new();
    for field in [leaf.input_pattern.as_bytes(), leaf.output_text.as_bytes()] {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field);
    }
    hasher.update([leaf.case_sensitive as u8]);

    let digest = hasher.finalize();
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&digest[..16]);
    format!("{:039}", u128::from_be_bytes(prefix))
}

/// Execute Stage 5: Token routing
///
/// With routing on, each leaf becomes a phase-1 leaf writing a token and a
/// phase-2 leaf replacing that token with the real output. Phase 2 runs
/// after every phase-1 group, so no other rule can re-match the output.
/// With routing off, leaves pass through into phase 1 unchanged.
pub fn route_through_tokens(leaves: Vec<LeafSubstitution>, token_routing: bool) -> RoutedLeaves {
    if !token_routing {
        return RoutedLeaves {
            phase1: leaves,
            phase2: vec![],
        };
    }

    let mut routed = RoutedLeaves {
        phase1: Vec::with_capacity(leaves.len()),
        phase2: Vec::with_capacity(leaves.len()),
    };

    for leaf in leaves {
        let token = stable_token(&leaf);
        routed.phase2.push(LeafSubstitution::new(
            token.clone(),
            true,
            leaf.output_text.clone(),
        ));
        routed.phase1.push(LeafSubstitution {
            output_text: token,
            ..leaf
        });
    }

    routed
}
