use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the phase
 * distributor program. These constants control registry bounds and PDA
 * derivation for every account the program owns.
 */

#[constant]
/// ===== REGISTRY CONSTANTS =====

/// Maximum number of phases a distributor can hold
/// - Phase indices are a single seed byte, so indices run 0..=254
/// - create_phase fails with RegistryFull once this count is reached
pub const MAX_PHASES: u8 = 255;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, admin]
/// - One distributor per (token, admin) pair
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - Creates a unique vault controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for phase PDA derivation
/// - Used in: ["phase", distributor_key, phase_index]
/// - The phase index doubles as the stable registry position (0-based)
pub const PHASE_SEED: &str = "phase";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", distributor_key, phase_index, claimant]
/// - One record per (phase, claimant) pair; a live record marks redemption
pub const CLAIM_SEED: &str = "claim";
