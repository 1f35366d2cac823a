use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::claimant_leaf;
use anchor_lang::solana_program::hash::hashv;

/// Minimal merkle tree over claimant identities, mirroring the off-chain
/// tree builder: leaves are claimant_leaf hashes, intermediate nodes hash
/// their sorted children, and an odd node is paired with itself.
struct ClaimantTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl ClaimantTree {
    fn new(claimants: &[Pubkey]) -> Self {
        let leaf_count = claimants.len();
        let nodes = claimants.iter().map(claimant_leaf).collect();

        let mut tree = ClaimantTree { nodes, leaf_count };
        tree.build();
        tree
    }

    fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        // Sorted-pair hashing, matching the on-chain verifier
        if left <= right {
            hashv(&[left, right]).to_bytes()
        } else {
            hashv(&[right, left]).to_bytes()
        }
    }

    fn build(&mut self) {
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let next_len = level_len.div_ceil(2);
            for i in 0..next_len {
                let left = self.nodes[level_start + 2 * i];
                let right = if 2 * i + 1 < level_len {
                    self.nodes[level_start + 2 * i + 1]
                } else {
                    // Duplicate the last entry on odd levels
                    left
                };
                self.nodes.push(Self::hash_pair(&left, &right));
            }
            level_start += level_len;
            level_len = next_len;
        }
    }

    fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("empty tree")
    }

    /// Sibling path for the leaf at `index`.
    fn proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.leaf_count {
            return Err("index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling = if current % 2 == 0 {
                if current + 1 < level_len {
                    current + 1
                } else {
                    current
                }
            } else {
                current - 1
            };
            proof.push(self.nodes[level_start + sibling]);

            current /= 2;
            level_start += level_len;
            level_len = level_len.div_ceil(2);
        }

        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::verify;

    fn claimants(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    #[test]
    fn every_member_proof_verifies() {
        let members = claimants(4);
        let tree = ClaimantTree::new(&members);
        let root = tree.root();

        for (index, member) in members.iter().enumerate() {
            let proof = tree.proof(index).expect("proof");
            assert!(
                verify(proof, root, claimant_leaf(member)),
                "proof for member {index} did not verify"
            );
        }
    }

    #[test]
    fn proof_is_bound_to_the_claimant() {
        let members = claimants(4);
        let tree = ClaimantTree::new(&members);
        let root = tree.root();

        // A non-member presenting a member's proof must be rejected: the
        // leaf is derived from the caller identity, not the proof
        let outsider = Pubkey::new_unique();
        let member_proof = tree.proof(0).expect("proof");
        assert!(!verify(member_proof, root, claimant_leaf(&outsider)));
    }

    #[test]
    fn tampered_proof_is_rejected() {
        let members = claimants(4);
        let tree = ClaimantTree::new(&members);
        let root = tree.root();

        let mut proof = tree.proof(0).expect("proof");
        proof[0][0] = proof[0][0].wrapping_add(1);
        assert!(!verify(proof, root, claimant_leaf(&members[0])));

        // Truncating the path must also fail
        let mut short_proof = tree.proof(0).expect("proof");
        short_proof.pop();
        assert!(!verify(short_proof, root, claimant_leaf(&members[0])));
    }

    #[test]
    fn single_leaf_tree_uses_the_empty_proof() {
        let members = claimants(1);
        let tree = ClaimantTree::new(&members);
        let root = tree.root();

        let proof = tree.proof(0).expect("proof");
        assert!(proof.is_empty());

        // Empty proof means the leaf must equal the root directly
        assert!(verify(proof, root, claimant_leaf(&members[0])));
        assert!(!verify(vec![], root, claimant_leaf(&Pubkey::new_unique())));
    }

    #[test]
    fn odd_leaf_counts_round_trip() {
        for n in [2, 3, 5, 7] {
            let members = claimants(n);
            let tree = ClaimantTree::new(&members);
            let root = tree.root();

            for (index, member) in members.iter().enumerate() {
                let proof = tree.proof(index).expect("proof");
                assert!(
                    verify(proof, root, claimant_leaf(member)),
                    "member {index} of {n} did not verify"
                );
            }
        }
    }

    #[test]
    fn proof_for_out_of_bounds_index_errors() {
        let tree = ClaimantTree::new(&claimants(4));
        assert!(tree.proof(10).is_err());
    }

    #[test]
    fn roots_differ_across_member_sets() {
        let left = ClaimantTree::new(&claimants(3));
        let right = ClaimantTree::new(&claimants(3));
        assert_ne!(left.root(), right.root());
    }
}
