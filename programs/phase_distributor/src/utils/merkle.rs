use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;

/// Compute the merkle leaf for a claimant.
///
/// The leaf commits to the account identity alone; the entitlement amount is
/// a phase parameter, not part of the tree.
pub fn claimant_leaf(claimant: &Pubkey) -> [u8; 32] {
    hashv(&[claimant.as_ref()]).to_bytes()
}

/// Verify a merkle proof against a root.
///
/// Recomputes the path from `leaf` to a candidate root by folding in each
/// sibling hash. Sibling pairs are sorted before hashing, so the verifier
/// does not care whether each node was a left or right child. An empty proof
/// is valid and means the leaf must equal the root directly.
///
/// Pure and total: any malformed proof simply fails to reproduce the root
/// and yields false.
pub fn verify(proof: Vec<[u8; 32]>, root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for sibling in proof {
        computed = if computed <= sibling {
            hashv(&[&computed, &sibling]).to_bytes()
        } else {
            hashv(&[&sibling, &computed]).to_bytes()
        };
    }
    computed == root
}
